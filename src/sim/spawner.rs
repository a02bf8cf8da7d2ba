//! Enemy spawning and the difficulty ramp
//!
//! Each tick every archetype independently rolls a one-in-N chance to
//! materialize, with N ramping down from 60 to a floor of 20 over the
//! session. Spawn positions are rejection sampled to keep new enemies at
//! least 250 pixels from the player.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::enemy::Enemy;
use super::state::{Bounds, GameEvent, GameState, SoundCue};
use crate::consts::{
    MAX_LIVE_ENTITIES, MIN_SPAWN_DISTANCE, SPAWN_RAMP_DECAY, SPAWN_RAMP_FLOOR, SPAWN_RAMP_START,
};

/// Bound on the rejection sampling loop. Running dry means the forbidden
/// radius covers the playable area, which is a configuration error.
const MAX_POSITION_ATTEMPTS: u32 = 1000;

/// Spawn ramp state. Reset on player death.
#[derive(Debug, Clone)]
pub struct EnemySpawner {
    inverse_spawn_chance: f32,
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self {
            inverse_spawn_chance: SPAWN_RAMP_START,
        }
    }
}

impl EnemySpawner {
    pub fn inverse_spawn_chance(&self) -> f32 {
        self.inverse_spawn_chance
    }

    /// Lower the inverse chance one tick's worth, never past the floor
    pub fn decay(&mut self) {
        self.inverse_spawn_chance =
            (self.inverse_spawn_chance - SPAWN_RAMP_DECAY).max(SPAWN_RAMP_FLOOR);
    }

    /// Restore the ramp to its session-start value
    pub fn reset(&mut self) {
        self.inverse_spawn_chance = SPAWN_RAMP_START;
    }
}

/// Roll spawns for this tick and advance the ramp
pub fn run(state: &mut GameState) {
    if !state.player.is_dead() && state.live_count() < MAX_LIVE_ENTITIES {
        let chance = state.spawner.inverse_spawn_chance as u32;
        let player_pos = state.player.body.position;

        if state.rng.random_range(0..chance) == 0 {
            if let Some(pos) = spawn_position(&mut state.rng, state.bounds, player_pos) {
                state.add_enemy(Enemy::seeker(pos));
                state.events.push(GameEvent::Sound(SoundCue::Spawn));
            }
        }

        if state.rng.random_range(0..chance) == 0 {
            if let Some(pos) = spawn_position(&mut state.rng, state.bounds, player_pos) {
                let enemy = Enemy::wanderer(pos, &mut state.rng);
                state.add_enemy(enemy);
                state.events.push(GameEvent::Sound(SoundCue::Spawn));
            }
        }
    }

    state.spawner.decay();
}

/// Uniform screen position at least `MIN_SPAWN_DISTANCE` from the player.
/// The loop is bounded; exhaustion is reported and the spawn skipped rather
/// than retrying forever.
pub fn spawn_position(rng: &mut Pcg32, bounds: Bounds, player_pos: Vec2) -> Option<Vec2> {
    for _ in 0..MAX_POSITION_ATTEMPTS {
        let pos = Vec2::new(
            rng.random_range(0.0..bounds.size.x),
            rng.random_range(0.0..bounds.size.y),
        );
        if pos.distance_squared(player_pos) >= MIN_SPAWN_DISTANCE * MIN_SPAWN_DISTANCE {
            return Some(pos);
        }
    }
    log::error!(
        "no spawn position at least {} px from the player after {} attempts; \
         screen {}x{} is too small for the exclusion radius",
        MIN_SPAWN_DISTANCE,
        MAX_POSITION_ATTEMPTS,
        bounds.size.x,
        bounds.size.y
    );
    None
}
