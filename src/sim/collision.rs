//! Player-vs-entity collision resolution and scoring
//!
//! Runs once per live tick, after spawning. The id set is snapshotted
//! up front, so an effect that removes its entity cannot disturb the
//! enumeration it fired from; each entity's effect runs at most once
//! per tick.

use glam::Vec2;

use super::state::{Effect, GameState};

pub fn resolve(state: &mut GameState) {
    let ids: Vec<_> = state.entities.keys().copied().collect();

    for id in ids {
        let Some(entity) = state.entities.get(&id) else {
            continue;
        };
        if !state.player.sprite.crash_with(&entity.sprite) {
            continue;
        }

        let kind = entity.kind;
        let center = Vec2::new(
            entity.sprite.pos.x + entity.sprite.width / 2.0,
            entity.sprite.pos.y + entity.sprite.height / 2.0,
        );

        match kind.effect() {
            Effect::Collect { points } => {
                state.score += points;
                state.push_tooltip(points, center);
                state.player.make_happy();
                state.entities.remove(&id);
                log::debug!("collected {:?} for {} points", kind, points);
            }
            Effect::Harm { consumed } => {
                if !state.player.invulnerable() {
                    state.player.hurt(state.surface_h);
                    log::info!(
                        "hit by {:?}, health now {}",
                        kind,
                        state.player.health
                    );
                }
                if consumed {
                    state.entities.remove(&id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::AssetId;
    use crate::sim::sprite::Sprite;
    use crate::sim::state::{Entity, EntityKind};

    /// Park an entity of the given kind right on top of the player
    fn overlap_entity(state: &mut GameState, kind: EntityKind) -> u64 {
        let player = &state.player.sprite;
        let sprite = Sprite::new(AssetId("test.png"), 60.0, 60.0, player.pos);
        let id = state.next_entity_id();
        state.entities.insert(id, Entity { id, kind, sprite });
        id
    }

    /// An entity far away from everything
    fn distant_entity(state: &mut GameState, kind: EntityKind) -> u64 {
        let sprite = Sprite::new(AssetId("test.png"), 60.0, 60.0, Vec2::new(-500.0, -500.0));
        let id = state.next_entity_id();
        state.entities.insert(id, Entity { id, kind, sprite });
        id
    }

    #[test]
    fn test_collect_scores_and_consumes() {
        let mut state = GameState::new(1);
        let id = overlap_entity(&mut state, EntityKind::Sunflower);

        resolve(&mut state);

        assert_eq!(state.score, 100);
        assert!(!state.entities.contains_key(&id));
        assert_eq!(state.tooltips.len(), 1);
        assert_eq!(state.tooltips[0].text, "100");
        assert!(state.player.happy_ticks > 0);
    }

    #[test]
    fn test_miss_is_a_no_op() {
        let mut state = GameState::new(1);
        let id = distant_entity(&mut state, EntityKind::Wine);

        resolve(&mut state);

        assert_eq!(state.score, 0);
        assert!(state.entities.contains_key(&id));
        assert!(state.tooltips.is_empty());
    }

    #[test]
    fn test_bean_harms_and_is_consumed() {
        let mut state = GameState::new(1);
        let id = overlap_entity(&mut state, EntityKind::Bean);

        resolve(&mut state);

        assert_eq!(state.player.health, 5);
        assert_eq!(state.score, 0, "harm never touches score");
        assert!(!state.entities.contains_key(&id));
    }

    #[test]
    fn test_hazard_survives_its_own_collision() {
        let mut state = GameState::new(1);
        let id = overlap_entity(&mut state, EntityKind::Nyan);

        resolve(&mut state);

        assert_eq!(state.player.health, 5);
        assert!(state.entities.contains_key(&id), "nyan keeps traveling");
    }

    #[test]
    fn test_hurt_window_blocks_new_harm() {
        let mut state = GameState::new(1);
        overlap_entity(&mut state, EntityKind::Nyan);

        resolve(&mut state);
        assert_eq!(state.player.health, 5);

        // Still overlapping on the next tick, but shielded
        resolve(&mut state);
        assert_eq!(state.player.health, 5);

        state.player.hurt_ticks = 0;
        resolve(&mut state);
        assert_eq!(state.player.health, 4);
    }

    #[test]
    fn test_multiple_overlaps_each_fire_once() {
        let mut state = GameState::new(1);
        let a = overlap_entity(&mut state, EntityKind::Sunflower);
        let b = overlap_entity(&mut state, EntityKind::Tulip);

        resolve(&mut state);

        assert_eq!(state.score, 250);
        assert!(!state.entities.contains_key(&a));
        assert!(!state.entities.contains_key(&b));
        assert_eq!(state.tooltips.len(), 2);
    }

    #[test]
    fn test_removal_mid_iteration_is_safe() {
        let mut state = GameState::new(1);
        // A consuming collision in front of a surviving one, and a
        // distant one behind both; the snapshot keeps iteration sound
        overlap_entity(&mut state, EntityKind::Bean);
        overlap_entity(&mut state, EntityKind::Nyan);
        let far = distant_entity(&mut state, EntityKind::Wine);

        resolve(&mut state);

        assert_eq!(state.player.health, 5);
        assert!(state.entities.contains_key(&far));
        assert_eq!(state.entities.len(), 2);
    }
}
