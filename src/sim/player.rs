//! Player character: pose selection, movement, moods and health
//!
//! Poppy walks the ground line, catching what falls. Pose is a pure
//! lookup over facing, mood and the crouch bit; moods are tick-counted
//! windows the scheduler decays; health only ever moves through
//! [`Player::hurt`], which owns the zero boundary.

use glam::Vec2;

use crate::consts::*;
use crate::render::AssetId;

use super::sprite::Sprite;

/// Horizontal intent, as read from the input snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Idle,
    Left,
    Right,
}

/// Mood overlay, derived from the timed windows (hurt wins)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Neutral,
    Happy,
    Hurt,
}

/// Fixed visual parameters for one pose
struct PoseSpec {
    image: AssetId,
    width: f32,
    height: f32,
    frames: u32,
    ticks_per_frame: u32,
}

const STANDING_HEIGHT: f32 = 192.0;
const CROUCHED_HEIGHT: f32 = 162.0;
const IDLE_STRIP_WIDTH: f32 = 113.0;
const RUN_STRIP_WIDTH: f32 = 904.0;
const RUN_FRAMES: u32 = 8;
const RUN_TICKS_PER_FRAME: u32 = 4;

/// Deterministic pose lookup. Every combination maps to its own frame
/// strip; idle poses are a single static frame, runs are 8-frame loops.
fn pose(facing: Facing, mood: Mood, crouch: bool) -> PoseSpec {
    use Facing::*;
    use Mood::*;

    let image = match (facing, mood, crouch) {
        (Idle, Neutral, false) => "img/poppy/poppy_static.gif",
        (Idle, Happy, false) => "img/poppy/poppy_static_happy.gif",
        (Idle, Hurt, false) => "img/poppy/poppy_static_hurt.gif",
        (Idle, Neutral, true) => "img/poppy/poppy_duck_static.gif",
        (Idle, Happy, true) => "img/poppy/poppy_duck_static_happy.gif",
        (Idle, Hurt, true) => "img/poppy/poppy_duck_static_hurt.gif",
        (Left, Neutral, false) => "img/poppy/poppy_left.gif",
        (Left, Happy, false) => "img/poppy/poppy_left_happy.gif",
        (Left, Hurt, false) => "img/poppy/poppy_left_hurt.gif",
        (Left, Neutral, true) => "img/poppy/poppy_duck_left.gif",
        (Left, Happy, true) => "img/poppy/poppy_duck_left_happy.gif",
        (Left, Hurt, true) => "img/poppy/poppy_duck_left_hurt.gif",
        (Right, Neutral, false) => "img/poppy/poppy_right.gif",
        (Right, Happy, false) => "img/poppy/poppy_right_happy.gif",
        (Right, Hurt, false) => "img/poppy/poppy_right_hurt.gif",
        (Right, Neutral, true) => "img/poppy/poppy_duck_right.gif",
        (Right, Happy, true) => "img/poppy/poppy_duck_right_happy.gif",
        (Right, Hurt, true) => "img/poppy/poppy_duck_right_hurt.gif",
    };

    let (width, frames, ticks_per_frame) = match facing {
        Idle => (IDLE_STRIP_WIDTH, 1, 0),
        Left | Right => (RUN_STRIP_WIDTH, RUN_FRAMES, RUN_TICKS_PER_FRAME),
    };

    PoseSpec {
        image: AssetId(image),
        width,
        height: if crouch { CROUCHED_HEIGHT } else { STANDING_HEIGHT },
        frames,
        ticks_per_frame,
    }
}

/// Run speed grows half a pixel per frame every other level
fn run_speed(level: u32) -> f32 {
    BASE_RUN_SPEED + (level / 2) as f32
}

#[derive(Debug, Clone)]
pub struct Player {
    pub sprite: Sprite,
    pub health: u8,
    /// Frames left in the post-hit invulnerability window
    pub hurt_ticks: u32,
    /// Frames left wearing the happy face
    pub happy_ticks: u32,
    /// Terminal; set exactly when health reaches zero
    pub dead: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        let spec = pose(Facing::Idle, Mood::Neutral, false);
        let mut sprite = Sprite::new(spec.image, spec.width, spec.height, pos);
        sprite.hitbox_margin = 10.0;
        sprite.bounded = true;
        sprite.gravity = 1.0;
        Self {
            sprite,
            health: STARTING_HEALTH,
            hurt_ticks: 0,
            happy_ticks: 0,
            dead: false,
        }
    }

    pub fn mood(&self) -> Mood {
        if self.hurt_ticks > 0 {
            Mood::Hurt
        } else if self.happy_ticks > 0 {
            Mood::Happy
        } else {
            Mood::Neutral
        }
    }

    /// True while the post-hit window shields against new harm
    pub fn invulnerable(&self) -> bool {
        self.hurt_ticks > 0
    }

    fn apply_pose(&mut self, facing: Facing, crouch: bool) {
        let spec = pose(facing, self.mood(), crouch);
        self.sprite.image = spec.image;
        self.sprite.width = spec.width;
        self.sprite.height = spec.height;
        self.sprite.number_of_frames = spec.frames;
        self.sprite.ticks_per_frame = spec.ticks_per_frame;
    }

    /// Drop back to the idle pose with no horizontal motion. Runs first
    /// every tick; a held direction key re-applies its pose after it.
    pub fn clear_move(&mut self, crouch: bool) {
        self.apply_pose(Facing::Idle, crouch);
        self.sprite.speed.x = 0.0;
    }

    pub fn move_left(&mut self, crouch: bool, level: u32) {
        self.apply_pose(Facing::Left, crouch);
        self.sprite.speed.x = -run_speed(level);
    }

    pub fn move_right(&mut self, crouch: bool, level: u32) {
        self.apply_pose(Facing::Right, crouch);
        self.sprite.speed.x = run_speed(level);
    }

    /// Upward impulse, only from the ground; airborne jumps are ignored
    pub fn jump(&mut self, surface_h: f32) {
        if self.sprite.grounded(surface_h) {
            self.sprite.speed.y = JUMP_SPEED;
        }
    }

    pub fn make_happy(&mut self) {
        self.happy_ticks = HAPPY_TICKS;
    }

    /// Take one point of damage; kills at zero health. Also arms the
    /// hurt window and the blink cue, even on the killing hit.
    pub fn hurt(&mut self, surface_h: f32) {
        self.health = self.health.saturating_sub(1);

        if self.health == 0 {
            self.die(surface_h);
        }

        self.hurt_ticks = HURT_TICKS;
        self.sprite.blink_every(HURT_BLINK_TICKS);
    }

    /// Terminal: freeze motion in the death pose on the ground line.
    /// There is no transition back.
    pub fn die(&mut self, surface_h: f32) {
        self.sprite.image = AssetId("img/poppy/poppy_dead.gif");
        self.sprite.width = 190.0;
        self.sprite.height = 85.0;
        self.sprite.pos.y = surface_h - self.sprite.height;
        self.sprite.number_of_frames = 1;
        self.sprite.ticks_per_frame = 0;
        self.sprite.speed = Vec2::ZERO;
        self.dead = true;
    }

    /// Per-tick decay of the mood windows; clears the blink cue once
    /// the hurt window empties
    pub fn decay_moods(&mut self) {
        if self.happy_ticks > 0 {
            self.happy_ticks -= 1;
        }

        if self.hurt_ticks > 0 {
            self.hurt_ticks -= 1;
        } else {
            self.sprite.stop_blinking();
        }
    }
}
