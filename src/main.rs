//! Flowerfall headless demo
//!
//! Drives the simulation at a synthetic 60 Hz with a small scripted
//! pilot chasing collectibles, until the character dies. Useful for
//! watching the difficulty ramp from a terminal:
//!
//! ```text
//! RUST_LOG=info FLOWERFALL_SEED=7 cargo run
//! ```

use flowerfall::consts::FRAME_MS;
use flowerfall::render::NullSurface;
use flowerfall::settings::Settings;
use flowerfall::sim::{Effect, FrameOutcome, GameState, TickInput, frame};

const DEFAULT_SEED: u64 = 0xF10;
/// Progress log cadence (ticks); ten seconds of game time
const REPORT_EVERY: u64 = 600;

fn main() {
    env_logger::init();

    let settings = std::env::var("FLOWERFALL_SETTINGS")
        .ok()
        .and_then(|json| Settings::from_json(&json).ok())
        .unwrap_or_default();

    let seed = std::env::var("FLOWERFALL_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .or(settings.seed)
        .unwrap_or(DEFAULT_SEED);

    let mut state = GameState::new(seed);
    state.debug_hitboxes = settings.debug_hitboxes;
    log::info!("starting run with seed {}", seed);

    let mut surface = NullSurface;
    let mut now = 0.0;

    loop {
        let input = pilot(&state);
        if frame(&mut state, &input, now, &mut surface) == FrameOutcome::Halted {
            break;
        }
        now += FRAME_MS;

        if state.tick % REPORT_EVERY == 0 {
            log::info!(
                "tick {}: score {} level {} health {} entities {}",
                state.tick,
                state.score,
                state.level,
                state.player.health,
                state.entities.len()
            );
        }
    }

    println!(
        "final score {} at level {} after {} ticks",
        state.score, state.level, state.tick
    );
}

/// Scripted pilot: chase the nearest falling collectible, hop over
/// whatever scrolls in at ground level.
fn pilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player = &state.player.sprite;
    let player_center = player.pos.x + player.frame_width() / 2.0;

    // Nearest collectible by horizontal distance
    let target = state
        .entities
        .values()
        .filter(|e| matches!(e.kind.effect(), Effect::Collect { .. }))
        .min_by(|a, b| {
            let da = (a.sprite.pos.x - player_center).abs();
            let db = (b.sprite.pos.x - player_center).abs();
            da.total_cmp(&db)
        });

    if let Some(entity) = target {
        let item_center = entity.sprite.pos.x + entity.sprite.frame_width() / 2.0;
        if item_center < player_center - 10.0 {
            input.left = true;
        } else if item_center > player_center + 10.0 {
            input.right = true;
        }
    }

    // Hop over anything harmful closing in at ground level
    let danger_near = state.entities.values().any(|e| {
        matches!(e.kind.effect(), Effect::Harm { .. })
            && (e.sprite.pos.y + e.sprite.height >= player.pos.y)
            && (e.sprite.pos.x + e.sprite.frame_width() >= player.pos.x - 150.0)
            && (e.sprite.pos.x <= player.pos.x + player.frame_width() + 150.0)
    });
    if danger_near {
        input.jump = true;
    }

    input
}
