//! Resumable per-tick behavior tasks
//!
//! An enemy's control flow is expressed as behavior tasks: small state
//! machines advanced exactly once per tick. A task's private progress state
//! (a wander heading, a patrol leg counter) lives inside the task itself and
//! survives across calls, so multi-phase routines stay linear instead of
//! being scattered over fields on the enemy.
//!
//! `advance` does one tick's worth of work and reports whether the task is
//! still running; completed tasks are removed from the owning enemy's list.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::Body;
use super::state::Bounds;
use crate::{normalize_angle, polar_to_cartesian, scale_to};

/// Result of advancing a task by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorState {
    Running,
    Completed,
}

/// Read-mostly context a task needs each tick. The RNG is the session
/// generator, so task randomness stays deterministic per seed.
pub struct BehaviorEnv<'a> {
    pub player_pos: Vec2,
    pub bounds: Bounds,
    pub rng: &'a mut Pcg32,
}

/// A resumable unit of enemy control flow
pub trait Behavior {
    /// Perform one tick's worth of state change on the owning enemy's body
    fn advance(&mut self, body: &mut Body, env: &mut BehaviorEnv<'_>) -> BehaviorState;
}

/// Accelerate toward the player at a constant rate every tick.
///
/// Enemy friction caps the resulting speed: with acceleration 1.0 and 0.8
/// damping the velocity settles at 5 pixels per tick. Never completes.
#[derive(Debug, Clone)]
pub struct Seek {
    acceleration: f32,
}

impl Seek {
    pub fn new(acceleration: f32) -> Self {
        Self { acceleration }
    }
}

impl Behavior for Seek {
    fn advance(&mut self, body: &mut Body, env: &mut BehaviorEnv<'_>) -> BehaviorState {
        body.velocity += scale_to(env.player_pos - body.position, self.acceleration);
        if body.velocity != Vec2::ZERO {
            body.orientation = body.velocity.to_angle();
        }
        BehaviorState::Running
    }
}

/// Drift along a persistent heading, nudging it by a small random delta
/// every sixth tick so the motion is smooth rather than jittery.
///
/// If the enemy strays outside the play area inset by its sprite size, the
/// heading is reassigned toward the screen center plus a bounded random
/// offset. Never completes.
#[derive(Debug, Clone)]
pub struct Wander {
    heading: f32,
    substep: u8,
}

/// Ticks per heading perturbation
const WANDER_SUBSTEPS: u8 = 6;
/// Acceleration along the heading each tick
const WANDER_ACCEL: f32 = 0.4;

impl Wander {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            heading: rng.random_range(0.0..TAU),
            substep: 0,
        }
    }
}

impl Behavior for Wander {
    fn advance(&mut self, body: &mut Body, env: &mut BehaviorEnv<'_>) -> BehaviorState {
        if self.substep == 0 {
            self.heading = normalize_angle(self.heading + env.rng.random_range(-0.1..0.1));
        }

        body.velocity += polar_to_cartesian(WANDER_ACCEL, self.heading);
        body.orientation -= 0.05;

        // Steer back toward the middle whenever the enemy leaves the inset
        // play area
        if !env.bounds.contains_inset(body.position, body.sprite.size()) {
            let to_center = (env.bounds.center() - body.position).to_angle();
            self.heading = to_center + env.rng.random_range(-FRAC_PI_2..FRAC_PI_2);
        }

        self.substep = (self.substep + 1) % WANDER_SUBSTEPS;
        BehaviorState::Running
    }
}

/// Move in a square: right, down, left, up, 30 ticks per leg, forever.
///
/// Kept as the reference multi-phase task; the leg and frame counters are
/// the whole continuation state.
#[derive(Debug, Clone, Default)]
pub struct PatrolSquare {
    leg: u8,
    frame: u32,
}

/// Ticks spent on each leg of the square
const FRAMES_PER_LEG: u32 = 30;

impl PatrolSquare {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Behavior for PatrolSquare {
    fn advance(&mut self, body: &mut Body, _env: &mut BehaviorEnv<'_>) -> BehaviorState {
        body.velocity = match self.leg {
            0 => Vec2::X,
            1 => Vec2::Y,
            2 => Vec2::NEG_X,
            _ => Vec2::NEG_Y,
        };

        self.frame += 1;
        if self.frame >= FRAMES_PER_LEG {
            self.frame = 0;
            self.leg = (self.leg + 1) % 4;
        }
        BehaviorState::Running
    }
}
