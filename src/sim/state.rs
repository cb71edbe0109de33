//! Game state and core simulation types
//!
//! Everything mutable lives in [`GameState`], which is the single
//! writer: only the frame scheduler and its direct callees touch it.
//! Entity iteration follows id order, so a seed plus an input script
//! reproduces a run exactly.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::render::{AssetId, Surface};

use super::player::Player;
use super::spawn;
use super::sprite::Sprite;

/// Unique entity identifier; monotonically increasing, never reused
pub type EntityId = u64;

/// Everything that can spawn into the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Sunflower,
    Tulip,
    Lemon,
    Bean,
    Honey,
    Beer,
    Wine,
    Nyan,
    Clown,
}

/// What touching an entity does, as data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Add points, leave a tooltip, cheer the player up, consume the
    /// entity
    Collect { points: u64 },
    /// Damage the player unless the hurt window shields them;
    /// `consumed` also removes the entity
    Harm { consumed: bool },
}

impl EntityKind {
    /// Fixed collision effect per kind. Scrolling hazards are not
    /// consumed by their own collision; they travel until purged.
    pub fn effect(self) -> Effect {
        match self {
            EntityKind::Sunflower => Effect::Collect { points: 100 },
            EntityKind::Tulip => Effect::Collect { points: 150 },
            EntityKind::Lemon => Effect::Collect { points: 200 },
            EntityKind::Bean => Effect::Harm { consumed: true },
            EntityKind::Honey => Effect::Collect { points: 300 },
            EntityKind::Beer => Effect::Collect { points: 350 },
            EntityKind::Wine => Effect::Collect { points: 400 },
            EntityKind::Nyan | EntityKind::Clown => Effect::Harm { consumed: false },
        }
    }
}

/// A live playfield entity: sprite, kind and id fixed at spawn time,
/// never extended afterwards
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub sprite: Sprite,
}

/// Floating "+points" readout left behind by a collected item
#[derive(Debug, Clone)]
pub struct ScoreTooltip {
    pub pos: Vec2,
    pub text: String,
    pub ticks_left: u32,
}

/// Heart icon visual; each icon covers two health points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartIcon {
    Full,
    Half,
    Hidden,
}

/// The three heart sprites across the top-left corner. Purely derived
/// from player health; keeps no state of its own.
#[derive(Debug, Clone)]
pub struct HealthBar {
    pub icons: [Sprite; 3],
}

impl HealthBar {
    const FULL: AssetId = AssetId("img/heart_full.gif");
    const HALF: AssetId = AssetId("img/heart_half.gif");

    pub fn new() -> Self {
        let icons = std::array::from_fn(|i| {
            Sprite::new(
                Self::FULL,
                50.0,
                47.0,
                Vec2::new(40.0 + 60.0 * i as f32, 40.0),
            )
        });
        Self { icons }
    }

    /// Discrete lookup from health to the three icon visuals
    pub fn icons_for_health(health: u8) -> [HeartIcon; 3] {
        use HeartIcon::*;
        match health {
            6.. => [Full, Full, Full],
            5 => [Full, Full, Half],
            4 => [Full, Full, Hidden],
            3 => [Full, Half, Hidden],
            2 => [Full, Hidden, Hidden],
            1 => [Half, Hidden, Hidden],
            0 => [Hidden, Hidden, Hidden],
        }
    }

    pub fn sync(&mut self, health: u8) {
        for (sprite, icon) in self.icons.iter_mut().zip(Self::icons_for_health(health)) {
            match icon {
                HeartIcon::Full => {
                    sprite.image = Self::FULL;
                    sprite.render_enabled = true;
                }
                HeartIcon::Half => {
                    sprite.image = Self::HALF;
                    sprite.render_enabled = true;
                }
                HeartIcon::Hidden => {
                    sprite.render_enabled = false;
                }
            }
        }
    }

    pub fn update_and_render(
        &mut self,
        surface_w: f32,
        surface_h: f32,
        surface: &mut dyn Surface,
        debug: bool,
    ) {
        for sprite in &mut self.icons {
            sprite.update(surface_w, surface_h);
            sprite.render(surface, debug);
        }
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Millisecond deadlines for the three spawn streams
#[derive(Debug, Clone)]
pub struct SpawnTimers {
    /// `None` until the first item has dropped, so the opening frame
    /// spawns one immediately
    pub last_item: Option<f64>,
    pub next_item: f64,
    pub last_nyan: f64,
    pub next_nyan: f64,
    pub last_clown: f64,
    pub next_clown: f64,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub surface_w: f32,
    pub surface_h: f32,
    pub score: u64,
    /// Derived from score every tick; never set directly
    pub level: u32,
    /// Frames run so far
    pub tick: u64,
    /// Pause gate, checked before any mutation
    pub paused: bool,
    /// Cleared exactly once, on death; the loop never restarts
    pub running: bool,
    /// Outline hitboxes while rendering
    pub debug_hitboxes: bool,
    pub player: Player,
    pub entities: BTreeMap<EntityId, Entity>,
    pub tooltips: Vec<ScoreTooltip>,
    pub health_bar: HealthBar,
    pub timers: SpawnTimers,
    pub ticks_until_gc: u32,
    next_id: EntityId,
}

impl GameState {
    /// Fresh game: full health, zero score, hazard timers armed,
    /// an item due on the opening frame.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let timers = SpawnTimers {
            last_item: None,
            next_item: 0.0,
            last_nyan: 0.0,
            next_nyan: spawn::hazard_interval(&mut rng, 0),
            last_clown: 0.0,
            next_clown: spawn::hazard_interval(&mut rng, 0),
        };

        Self {
            seed,
            rng,
            surface_w: SURFACE_WIDTH,
            surface_h: SURFACE_HEIGHT,
            score: 0,
            level: 0,
            tick: 0,
            paused: false,
            running: true,
            debug_hitboxes: false,
            player: Player::new(Vec2::new(348.0, 423.0)),
            entities: BTreeMap::new(),
            tooltips: Vec::new(),
            health_bar: HealthBar::new(),
            timers,
            ticks_until_gc: GC_FIRST_PASS_TICKS,
            next_id: 0,
        }
    }

    /// Allocate the next entity id; ids are never reused
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Cancel the loop permanently; like death, there is no way back.
    /// A new game needs a fresh state.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn push_tooltip(&mut self, points: u64, center: Vec2) {
        self.tooltips.push(ScoreTooltip {
            pos: center.floor(),
            text: points.to_string(),
            ticks_left: TOOLTIP_TICKS,
        });
    }
}
