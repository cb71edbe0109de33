//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Single-threaded, host-driven frames only
//! - Seeded RNG only, owned by the game state
//! - Stable iteration order (by entity id)
//! - No rendering backends or platform dependencies; drawing goes
//!   through the abstract `Surface` sink

pub mod collision;
pub mod player;
pub mod spawn;
pub mod sprite;
pub mod state;
pub mod tick;

pub use player::{Facing, Mood, Player};
pub use sprite::Sprite;
pub use state::{
    Effect, Entity, EntityId, EntityKind, GameState, HealthBar, ScoreTooltip, SpawnTimers,
};
pub use tick::{FrameOutcome, TickInput, frame};
