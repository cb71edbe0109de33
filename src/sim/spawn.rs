//! Entity catalog and timed spawning
//!
//! Three independent streams feed the playfield: falling items on a
//! short fuse, and two scrolling hazards on long fuses. Every interval
//! is redrawn after firing and tightens as the level climbs, which is
//! the whole difficulty ramp.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::render::AssetId;

use super::sprite::Sprite;
use super::state::{Entity, EntityKind, GameState};

/// Fixed spawn parameters for one falling item kind
struct ItemSpec {
    kind: EntityKind,
    width: f32,
    height: f32,
    spawn_y: f32,
    /// Level scaling adds 0.01 per level on top
    base_gravity: f32,
    image: AssetId,
}

const ITEM_HITBOX_MARGIN: f32 = 5.0;

const ITEM_CATALOG: &[ItemSpec] = &[
    ItemSpec {
        kind: EntityKind::Sunflower,
        width: 80.0,
        height: 67.0,
        spawn_y: -100.0,
        base_gravity: 0.01,
        image: AssetId("img/items/sunflower.gif"),
    },
    ItemSpec {
        kind: EntityKind::Tulip,
        width: 80.0,
        height: 87.0,
        spawn_y: -109.0,
        base_gravity: 0.01,
        image: AssetId("img/items/tulip.gif"),
    },
    ItemSpec {
        kind: EntityKind::Lemon,
        width: 90.0,
        height: 87.0,
        spawn_y: -100.0,
        base_gravity: 0.05,
        image: AssetId("img/items/lemon.gif"),
    },
    ItemSpec {
        kind: EntityKind::Bean,
        width: 70.0,
        height: 62.0,
        spawn_y: -100.0,
        base_gravity: 0.04,
        image: AssetId("img/items/bean.gif"),
    },
    ItemSpec {
        kind: EntityKind::Honey,
        width: 65.0,
        height: 90.0,
        spawn_y: -100.0,
        base_gravity: 0.08,
        image: AssetId("img/items/honey.gif"),
    },
    ItemSpec {
        kind: EntityKind::Beer,
        width: 80.0,
        height: 84.0,
        spawn_y: -100.0,
        base_gravity: 0.12,
        image: AssetId("img/items/beer.gif"),
    },
    ItemSpec {
        kind: EntityKind::Wine,
        width: 60.0,
        height: 92.0,
        spawn_y: -100.0,
        base_gravity: 0.08,
        image: AssetId("img/items/wine.gif"),
    },
];

/// Fixed spawn parameters for one scrolling hazard kind
struct HazardSpec {
    kind: EntityKind,
    width: f32,
    height: f32,
    frames: u32,
    hitbox_margin: f32,
    /// Offset of the top edge up from the surface bottom
    y_from_bottom: f32,
    /// Speed is drawn from `[3 + level, max_speed + level]`
    max_speed: i64,
    image_right: AssetId,
    image_left: AssetId,
}

const HAZARD_TICKS_PER_FRAME: u32 = 4;
const HAZARD_MIN_SPEED: i64 = 3;

const NYAN: HazardSpec = HazardSpec {
    kind: EntityKind::Nyan,
    width: 2772.0,
    height: 161.0,
    frames: 12,
    hitbox_margin: 0.0,
    // Flies at duck height: its bottom edge grazes a crouched hitbox
    y_from_bottom: 323.0,
    max_speed: 7,
    image_right: AssetId("img/nyan_right.gif"),
    image_left: AssetId("img/nyan_left.gif"),
};

const CLOWN: HazardSpec = HazardSpec {
    kind: EntityKind::Clown,
    width: 4350.0,
    height: 290.0,
    frames: 15,
    hitbox_margin: 100.0,
    y_from_bottom: 210.0,
    max_speed: 9,
    image_right: AssetId("img/clown_right.gif"),
    image_left: AssetId("img/clown_left.gif"),
};

/// Uniform inclusive integer draw; the shape every spawn decision uses
fn random_int(rng: &mut Pcg32, lo: i64, hi: i64) -> i64 {
    rng.random_range(lo..=hi)
}

/// Item spawn delay in ms; the bounds tighten 50/100 per level and are
/// clamped once the scaling crosses them
pub fn item_interval(rng: &mut Pcg32, level: u32) -> f64 {
    let lo = (ITEM_SPAWN_MIN_MS - 50 * level as i64).max(0);
    let hi = (ITEM_SPAWN_MAX_MS - 100 * level as i64).max(lo);
    random_int(rng, lo, hi) as f64
}

/// Scrolling hazard delay in ms; both bounds tighten 1000 per level
pub fn hazard_interval(rng: &mut Pcg32, level: u32) -> f64 {
    let lo = (HAZARD_SPAWN_MIN_MS - 1000 * level as i64).max(0);
    let hi = (HAZARD_SPAWN_MAX_MS - 1000 * level as i64).max(lo);
    random_int(rng, lo, hi) as f64
}

/// Drop one random catalog item from above the playfield
pub fn spawn_item(state: &mut GameState) {
    let pick = random_int(&mut state.rng, 0, ITEM_CATALOG.len() as i64 - 1) as usize;
    let spec = &ITEM_CATALOG[pick];

    let mut sprite = Sprite::new(
        spec.image,
        spec.width,
        spec.height,
        Vec2::new(0.0, spec.spawn_y),
    );
    sprite.hitbox_margin = ITEM_HITBOX_MARGIN;
    sprite.gravity = spec.base_gravity + 0.01 * state.level as f32;

    let max_x = (state.surface_w - sprite.frame_width()) as i64;
    sprite.pos.x = random_int(&mut state.rng, 0, max_x) as f32;
    sprite.speed.y = random_int(&mut state.rng, 1, 3) as f32;

    insert(state, spec.kind, sprite);
}

pub fn spawn_nyan(state: &mut GameState) {
    spawn_hazard(state, &NYAN);
}

pub fn spawn_clown(state: &mut GameState) {
    spawn_hazard(state, &CLOWN);
}

/// Send a hazard scrolling across the playfield: coin-flip a direction,
/// enter fully off that edge, speed signed to cross toward the other.
fn spawn_hazard(state: &mut GameState, spec: &HazardSpec) {
    let mut sprite = Sprite::new(
        spec.image_right,
        spec.width,
        spec.height,
        Vec2::new(0.0, state.surface_h - spec.y_from_bottom),
    );
    sprite.number_of_frames = spec.frames;
    sprite.ticks_per_frame = HAZARD_TICKS_PER_FRAME;
    sprite.hitbox_margin = spec.hitbox_margin;

    let level = state.level as i64;
    let speed = random_int(
        &mut state.rng,
        HAZARD_MIN_SPEED + level,
        spec.max_speed + level,
    ) as f32;

    if random_int(&mut state.rng, 0, 1) == 1 {
        sprite.pos.x = -sprite.frame_width();
        sprite.speed.x = speed;
        sprite.image = spec.image_right;
    } else {
        sprite.pos.x = state.surface_w;
        sprite.speed.x = -speed;
        sprite.image = spec.image_left;
    }

    insert(state, spec.kind, sprite);
}

fn insert(state: &mut GameState, kind: EntityKind, sprite: Sprite) {
    let id = state.next_entity_id();
    log::debug!("spawned {:?} #{} at x={:.0}", kind, id, sprite.pos.x);
    state.entities.insert(id, Entity { id, kind, sprite });
}

/// Fire any spawn timer whose deadline has passed and re-arm it with a
/// fresh interval at the current level
pub fn run_spawners(state: &mut GameState, now: f64) {
    let level = state.level;

    let item_due = match state.timers.last_item {
        None => true,
        Some(last) => now - last >= state.timers.next_item,
    };
    if item_due {
        state.timers.last_item = Some(now);
        spawn_item(state);
        state.timers.next_item = item_interval(&mut state.rng, level);
    }

    if now - state.timers.last_nyan >= state.timers.next_nyan {
        state.timers.last_nyan = now;
        spawn_nyan(state);
        state.timers.next_nyan = hazard_interval(&mut state.rng, level);
    }

    if now - state.timers.last_clown >= state.timers.next_clown {
        state.timers.last_clown = now;
        spawn_clown(state);
        state.timers.next_clown = hazard_interval(&mut state.rng, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_item_interval_bounds_shrink_with_level() {
        let mut r = rng(3);
        for _ in 0..200 {
            let ms = item_interval(&mut r, 0);
            assert!((500.0..=3000.0).contains(&ms));
        }
        for _ in 0..200 {
            let ms = item_interval(&mut r, 1);
            assert!((450.0..=2900.0).contains(&ms));
        }
    }

    #[test]
    fn test_intervals_survive_extreme_levels() {
        let mut r = rng(3);
        // Far past where the raw bounds cross or go negative
        for level in [10, 20, 40, 100] {
            let item = item_interval(&mut r, level);
            assert!(item >= 0.0);
            let hazard = hazard_interval(&mut r, level);
            assert!(hazard >= 0.0);
        }
    }

    #[test]
    fn test_hazard_interval_bounds() {
        let mut r = rng(9);
        for _ in 0..200 {
            let ms = hazard_interval(&mut r, 0);
            assert!((10_000.0..=20_000.0).contains(&ms));
        }
        for _ in 0..200 {
            let ms = hazard_interval(&mut r, 3);
            assert!((7_000.0..=17_000.0).contains(&ms));
        }
    }

    #[test]
    fn test_spawn_item_geometry() {
        let mut state = GameState::new(11);
        for _ in 0..100 {
            spawn_item(&mut state);
        }
        for entity in state.entities.values() {
            let s = &entity.sprite;
            assert!(s.pos.x >= 0.0);
            assert!(s.pos.x + s.frame_width() <= state.surface_w);
            assert!(s.pos.y < 0.0, "items start above the surface");
            assert!((1.0..=3.0).contains(&s.speed.y));
            assert_eq!(s.hitbox_margin, ITEM_HITBOX_MARGIN);
            assert!(!matches!(
                entity.kind,
                EntityKind::Nyan | EntityKind::Clown
            ));
        }
    }

    #[test]
    fn test_item_gravity_scales_with_level() {
        let mut state = GameState::new(5);
        state.level = 3;
        spawn_item(&mut state);
        let entity = state.entities.values().next().unwrap();
        // Catalog bases span 0.01..=0.12, plus 0.03 for the level
        assert!(entity.sprite.gravity >= 0.04 - 1e-6);
        assert!(entity.sprite.gravity <= 0.15 + 1e-6);
    }

    #[test]
    fn test_spawn_hazard_enters_off_one_edge() {
        let mut state = GameState::new(2);
        for _ in 0..40 {
            spawn_nyan(&mut state);
        }

        let mut from_left = 0;
        let mut from_right = 0;
        for entity in state.entities.values() {
            let s = &entity.sprite;
            assert_eq!(entity.kind, EntityKind::Nyan);
            assert!((3.0..=7.0).contains(&s.speed.x.abs()));
            if s.speed.x > 0.0 {
                assert_eq!(s.pos.x, -s.frame_width());
                from_left += 1;
            } else {
                assert_eq!(s.pos.x, state.surface_w);
                from_right += 1;
            }
        }
        // Coin flip: both directions show up over 40 draws
        assert!(from_left > 0 && from_right > 0);
    }

    #[test]
    fn test_clown_speed_range_and_margin() {
        let mut state = GameState::new(6);
        state.level = 2;
        for _ in 0..40 {
            spawn_clown(&mut state);
        }
        for entity in state.entities.values() {
            let s = &entity.sprite;
            assert!((5.0..=11.0).contains(&s.speed.x.abs()));
            assert_eq!(s.hitbox_margin, 100.0);
            assert_eq!(s.number_of_frames, 15);
        }
    }

    #[test]
    fn test_spawned_ids_are_unique_and_monotonic() {
        let mut state = GameState::new(8);
        for _ in 0..20 {
            spawn_item(&mut state);
        }
        let ids: Vec<_> = state.entities.keys().copied().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(sorted.len(), 20);

        // Removal never frees an id for reuse
        let first = ids[0];
        state.entities.remove(&first);
        spawn_item(&mut state);
        assert!(!state.entities.contains_key(&first));
    }

    #[test]
    fn test_run_spawners_first_frame_drops_an_item() {
        let mut state = GameState::new(4);
        run_spawners(&mut state, 0.0);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.timers.last_item, Some(0.0));

        // Hazards hold back until their long fuses burn down
        assert!(state
            .entities
            .values()
            .all(|e| !matches!(e.kind, EntityKind::Nyan | EntityKind::Clown)));
    }

    #[test]
    fn test_run_spawners_fires_on_deadline() {
        let mut state = GameState::new(4);
        run_spawners(&mut state, 0.0);
        let deadline = state.timers.next_item;

        run_spawners(&mut state, deadline - 1.0);
        assert_eq!(state.entities.len(), 1, "a hair early: nothing new");

        run_spawners(&mut state, deadline);
        assert_eq!(state.entities.len(), 2);
    }

    #[test]
    fn test_hazard_timer_fires_and_rearms() {
        let mut state = GameState::new(12);
        let due = state.timers.next_nyan;
        run_spawners(&mut state, due);
        assert!(state
            .entities
            .values()
            .any(|e| e.kind == EntityKind::Nyan));
        assert_eq!(state.timers.last_nyan, due);
        assert!(state.timers.next_nyan >= 10_000.0);
    }
}
