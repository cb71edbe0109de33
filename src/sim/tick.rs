//! Fixed-cadence frame scheduler
//!
//! The host owns the clock: it calls [`frame`] once per display frame
//! (~60 Hz) with a monotonic millisecond timestamp and keeps itself
//! re-armed until the outcome says [`FrameOutcome::Halted`]. All
//! mutation of shared state happens inside that call, in a fixed
//! order, so there is nothing to lock and nothing to race.

use glam::Vec2;

use crate::consts::*;
use crate::render::{AssetId, Rect, Surface, TextStyle};

use super::collision;
use super::spawn;
use super::state::GameState;

/// Input snapshot polled once per tick.
///
/// `pause` is a press edge, not a held state; the host clears it after
/// the frame is processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub crouch: bool,
    pub pause: bool,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Simulation advanced; schedule the next frame
    Ran,
    /// Pause gate closed; nothing mutated, keep polling
    Paused,
    /// Terminal; never schedule again
    Halted,
}

const BACKGROUND: AssetId = AssetId("img/background.png");
const SCORE_POS: Vec2 = Vec2::new(910.0, 70.0);
const SCORE_STYLE: TextStyle = TextStyle {
    font: "30px Consolas",
    fill: "black",
    stroke: Some("red"),
};
const TOOLTIP_STYLE: TextStyle = TextStyle {
    font: "40px Consolas",
    fill: "white",
    stroke: Some("black"),
};

/// Advance the game by one frame.
///
/// Order within a frame is fixed: repaint, entities, tooltips, score,
/// the death check, input and player motion, spawners, collisions,
/// mood decay, health icons, the periodic off-screen purge, and the
/// level recomputation. Pause short-circuits before any of it.
pub fn frame(
    state: &mut GameState,
    input: &TickInput,
    now: f64,
    surface: &mut dyn Surface,
) -> FrameOutcome {
    // Cancellation is one-directional; a halted loop stays halted
    if !state.running {
        return FrameOutcome::Halted;
    }

    if input.pause {
        state.paused = !state.paused;
    }
    if state.paused {
        return FrameOutcome::Paused;
    }

    let w = state.surface_w;
    let h = state.surface_h;

    surface.clear(Rect::new(0.0, 0.0, w, h));
    surface.draw_image(
        BACKGROUND,
        Rect::new(0.0, 0.0, w, h),
        Rect::new(0.0, 0.0, w, h),
    );

    // Entities move even on the player's final frame
    for entity in state.entities.values_mut() {
        entity.sprite.update(w, h);
        entity.sprite.render(surface, state.debug_hitboxes);
    }

    // Tooltips burn down while they render
    state.tooltips.retain_mut(|tip| {
        if tip.ticks_left == 0 {
            return false;
        }
        surface.draw_text(&tip.text, tip.pos, &TOOLTIP_STYLE);
        tip.ticks_left -= 1;
        true
    });

    let score_text = format!("SCORE: {}", state.score);
    surface.draw_text(&score_text, SCORE_POS, &SCORE_STYLE);

    // Death: one last pose update, then the loop is cancelled for good
    if state.player.dead {
        state.player.sprite.update(w, h);
        state.player.sprite.render(surface, state.debug_hitboxes);
        state.running = false;
        log::info!(
            "game over: score {} at level {} after {} ticks",
            state.score,
            state.level,
            state.tick
        );
        return FrameOutcome::Halted;
    }

    // Translate the input snapshot into pose and motion
    state.player.clear_move(input.crouch);
    if input.left {
        state.player.move_left(input.crouch, state.level);
    }
    if input.jump {
        state.player.jump(h);
    }
    if input.right {
        state.player.move_right(input.crouch, state.level);
    }
    state.player.sprite.update(w, h);
    state.player.sprite.render(surface, state.debug_hitboxes);

    spawn::run_spawners(state, now);

    collision::resolve(state);

    state.player.decay_moods();

    state.health_bar.sync(state.player.health);
    state
        .health_bar
        .update_and_render(w, h, surface, state.debug_hitboxes);

    // Off-screen purge on a long cadence (one early pass at startup)
    state.ticks_until_gc -= 1;
    if state.ticks_until_gc == 0 {
        garbage_collect(state);
        state.ticks_until_gc = GC_PERIOD_TICKS;
    }

    let previous_level = state.level;
    state.level = (state.score / POINTS_PER_LEVEL) as u32;
    if state.level > previous_level {
        log::info!("level up: {}", state.level);
    }

    state.tick += 1;
    FrameOutcome::Ran
}

fn garbage_collect(state: &mut GameState) {
    let (w, h) = (state.surface_w, state.surface_h);
    let before = state.entities.len();
    state.entities.retain(|_, e| !e.sprite.is_off_screen(w, h));

    let purged = before - state.entities.len();
    if purged > 0 {
        log::debug!("purged {} off-screen entities", purged);
    }
}
