//! The player ship
//!
//! A singleton for the whole session: killed ships sit out a 60-tick respawn
//! countdown instead of being removed, and running out of lives resets the
//! session in place.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::bullet::Bullet;
use super::entity::{Body, Sprite};
use super::state::{Bounds, GameEvent, Pending, SoundCue};
use super::status::PlayerStatus;
use super::tick::TickInput;
use crate::consts::{
    BULLET_SPEED, BULLET_SPREAD, FIRE_COOLDOWN_TICKS, PLAYER_RADIUS, PLAYER_SPEED, RESPAWN_TICKS,
};
use crate::polar_to_cartesian;

/// Muzzle points either side of the ship's nose, in aim space
const MUZZLE_OFFSETS: [Vec2; 2] = [Vec2::new(25.0, -8.0), Vec2::new(25.0, 8.0)];

pub struct PlayerShip {
    pub body: Body,
    /// Ticks until respawn; the ship is dead while this is non-zero
    respawn_timer: u32,
    /// Ticks until the next shot is allowed
    cooldown: u32,
}

impl PlayerShip {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            body: Body::new(Sprite::Player, bounds.center(), PLAYER_RADIUS),
            respawn_timer: 0,
            cooldown: 0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.respawn_timer > 0
    }

    /// Start the respawn countdown. Life accounting and the spawner reset
    /// happen in the collision pass that called this.
    pub fn kill(&mut self) {
        self.respawn_timer = RESPAWN_TICKS;
    }

    pub fn update(
        &mut self,
        input: &TickInput,
        bounds: Bounds,
        rng: &mut Pcg32,
        pending: &mut Pending,
        status: &mut PlayerStatus,
        events: &mut Vec<GameEvent>,
    ) {
        if self.is_dead() {
            self.respawn_timer -= 1;
            if self.respawn_timer == 0 && status.is_game_over() {
                // Out of lives: the session resets and the ship re-centers
                if let Some(high) = status.reset() {
                    events.push(GameEvent::HighScore(high));
                }
                self.body.position = bounds.center();
            }
            return;
        }

        self.body.velocity = PLAYER_SPEED * input.movement;
        self.body.position += self.body.velocity;
        self.body.position = bounds.clamp_inset(self.body.position, self.body.sprite.size() / 2.0);
        if self.body.velocity.length_squared() > 0.0 {
            self.body.orientation = self.body.velocity.to_angle();
        }

        if input.aim.length_squared() > 0.0 && self.cooldown == 0 {
            self.cooldown = FIRE_COOLDOWN_TICKS;
            let aim_angle = input.aim.to_angle();
            let aim_rot = Vec2::from_angle(aim_angle);

            for muzzle in MUZZLE_OFFSETS {
                // Two uniform samples give a triangular spread centered on
                // the aim angle, rolled independently per bullet
                let spread = rng.random_range(-BULLET_SPREAD..BULLET_SPREAD)
                    + rng.random_range(-BULLET_SPREAD..BULLET_SPREAD);
                let velocity = polar_to_cartesian(BULLET_SPEED, aim_angle + spread);
                pending.add_bullet(Bullet::new(
                    self.body.position + aim_rot.rotate(muzzle),
                    velocity,
                ));
            }
            events.push(GameEvent::Sound(SoundCue::Shot));
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
        }
    }
}
