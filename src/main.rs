//! Headless demo driver
//!
//! Runs the simulation for a minute of game time with a scripted pilot,
//! standing in for the window shell: it owns the high score file, drains
//! the event queue and reports the outcome. Useful for profiling and for
//! eyeballing the spawn ramp without a renderer.

use std::path::Path;

use glam::Vec2;

use neon_blaster::consts::TICK_DT;
use neon_blaster::sim::{GameEvent, GameState, TickInput, tick};
use neon_blaster::{highscores, polar_to_cartesian};

const HIGH_SCORE_PATH: &str = "highscore.json";

/// One minute of simulated play
const DEMO_TICKS: u32 = 60 * 60;

fn main() {
    env_logger::init();

    let path = Path::new(HIGH_SCORE_PATH);
    let config = neon_blaster::SimConfig {
        seed: 0x5eed,
        high_score: highscores::load(path),
        ..Default::default()
    };
    let mut state = GameState::new(config);

    for tick_no in 0..DEMO_TICKS {
        let input = pilot(&state, tick_no);
        tick(&mut state, &input, TICK_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::Sound(cue) => log::trace!("sound cue: {cue:?}"),
                GameEvent::GameOver { score } => log::info!("game over with score {score}"),
                GameEvent::HighScore(score) => {
                    if let Err(err) = highscores::save(path, score) {
                        log::error!("failed to save high score: {err}");
                    }
                }
            }
        }
    }

    let mut frame = Vec::new();
    state.draw(&mut frame);
    println!(
        "simulated {} ticks: score {}, multiplier x{}, {} lives, {} entities on screen",
        state.time_ticks,
        state.status.score,
        state.status.multiplier,
        state.status.lives,
        frame.len()
    );
}

/// Scripted pilot: circle the screen center and shoot at the nearest
/// materialized enemy
fn pilot(state: &GameState, tick_no: u32) -> TickInput {
    let t = tick_no as f32 * TICK_DT;
    let player_pos = state.player.body.position;

    let aim = state
        .enemies
        .iter()
        .filter(|enemy| enemy.is_active())
        .min_by(|a, b| {
            let da = a.body.position.distance_squared(player_pos);
            let db = b.body.position.distance_squared(player_pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|enemy| (enemy.body.position - player_pos).normalize_or_zero())
        .unwrap_or(Vec2::ZERO);

    TickInput {
        movement: polar_to_cartesian(1.0, t * 0.8),
        aim,
    }
}
