//! Neon Blaster - a twin-stick arena shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, behaviors, spawning)
//! - `highscores`: High score persistence
//!
//! Rendering, audio playback and input polling live outside this crate; the
//! shell feeds `TickInput` in and consumes `DrawParams` and `GameEvent`s out.

pub mod highscores;
pub mod sim;

pub use sim::{GameState, SimConfig, TickInput};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const TICK_DT: f32 = 1.0 / 60.0;

    /// Player top speed in pixels per tick
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Player collision radius
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Ticks between shots
    pub const FIRE_COOLDOWN_TICKS: u32 = 6;
    /// Ticks the player stays dead before respawning
    pub const RESPAWN_TICKS: u32 = 60;

    /// Bullet speed in pixels per tick
    pub const BULLET_SPEED: f32 = 11.0;
    /// Bullet collision radius
    pub const BULLET_RADIUS: f32 = 8.0;
    /// Per-bullet spread half-range in radians (sampled twice per shot)
    pub const BULLET_SPREAD: f32 = 0.04;

    /// Ticks an enemy takes to fade in; behaviors are gated until it elapses
    pub const SPAWN_FADE_TICKS: u32 = 60;
    /// Velocity damping applied to enemies every tick
    pub const ENEMY_FRICTION: f32 = 0.8;
    /// Strength of the enemy-enemy repulsion impulse
    pub const REPULSION_STRENGTH: f32 = 10.0;

    /// Live entity cap; the spawner stops rolling above it
    pub const MAX_LIVE_ENTITIES: usize = 200;
    /// Minimum spawn distance from the player, in pixels
    pub const MIN_SPAWN_DISTANCE: f32 = 250.0;
    /// Spawn ramp start: one-in-60 chance per archetype per tick
    pub const SPAWN_RAMP_START: f32 = 60.0;
    /// Spawn ramp floor: the chance never exceeds one-in-20
    pub const SPAWN_RAMP_FLOOR: f32 = 20.0;
    /// Linear ramp decay per tick
    pub const SPAWN_RAMP_DECAY: f32 = 0.005;

    /// Seconds without a kill before the multiplier resets
    pub const MULTIPLIER_EXPIRY_SECS: f32 = 0.8;
    /// Multiplier cap
    pub const MAX_MULTIPLIER: u32 = 20;
    /// Lives at the start of a session
    pub const STARTING_LIVES: u32 = 4;
    /// Score interval that grants an extra life
    pub const EXTRA_LIFE_SCORE: u32 = 2000;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Rescale a vector to the given length; zero vectors stay zero
#[inline]
pub fn scale_to(v: Vec2, length: f32) -> Vec2 {
    v.normalize_or_zero() * length
}
