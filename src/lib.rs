//! Flowerfall - a falling-items arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sprites, physics, collisions, game state)
//! - `render`: Abstract drawing sink the simulation writes into
//! - `settings`: Debug and seed preferences

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame cadence the host is expected to drive (milliseconds)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Playfield dimensions
    pub const SURFACE_WIDTH: f32 = 1152.0;
    pub const SURFACE_HEIGHT: f32 = 648.0;

    /// Player defaults
    pub const STARTING_HEALTH: u8 = 6;
    pub const JUMP_SPEED: f32 = -22.0;
    pub const BASE_RUN_SPEED: f32 = 8.0;

    /// Mood windows (ticks)
    pub const HURT_TICKS: u32 = 180;
    pub const HAPPY_TICKS: u32 = 60;
    /// Blink cadence while the hurt window is active (ticks)
    pub const HURT_BLINK_TICKS: u32 = 12;

    /// Score needed to advance one difficulty level
    pub const POINTS_PER_LEVEL: u64 = 5000;

    /// Score tooltip lifetime (ticks)
    pub const TOOLTIP_TICKS: u32 = 60;

    /// Off-screen purge cadence: one early pass, then a long period
    pub const GC_FIRST_PASS_TICKS: u32 = 60;
    pub const GC_PERIOD_TICKS: u32 = 600;

    /// Item spawn interval bounds (ms) before level scaling
    pub const ITEM_SPAWN_MIN_MS: i64 = 500;
    pub const ITEM_SPAWN_MAX_MS: i64 = 3000;
    /// Scrolling hazard interval bounds (ms) before level scaling
    pub const HAZARD_SPAWN_MIN_MS: i64 = 10_000;
    pub const HAZARD_SPAWN_MAX_MS: i64 = 20_000;
}
