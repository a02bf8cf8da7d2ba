//! Enemy entities
//!
//! Enemies fade in over 60 ticks before their behaviors engage, then move
//! under whatever behavior tasks they carry, with velocity damping giving a
//! soft top speed and a screen clamp keeping them in play.

use glam::{Vec2, Vec4};
use rand_pcg::Pcg32;

use super::behavior::{Behavior, BehaviorEnv, BehaviorState, Seek, Wander};
use super::entity::{Body, Sprite};
use super::state::{GameEvent, SoundCue};
use crate::consts::{ENEMY_FRICTION, REPULSION_STRENGTH, SPAWN_FADE_TICKS};

pub struct Enemy {
    pub body: Body,
    /// Base score value, scaled by the multiplier when shot
    pub point_value: u32,
    /// Ticks until fully materialized; gates behaviors and player collision
    spawn_timer: u32,
    /// Active tasks, advanced once per tick in registration order
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Enemy {
    fn new(sprite: Sprite, position: Vec2, point_value: u32) -> Self {
        let mut body = Body::new(sprite, position, sprite.size().x / 2.0);
        body.tint = Vec4::ZERO;
        Self {
            body,
            point_value,
            spawn_timer: SPAWN_FADE_TICKS,
            behaviors: Vec::new(),
        }
    }

    /// An enemy that chases the player
    pub fn seeker(position: Vec2) -> Self {
        let mut enemy = Self::new(Sprite::Seeker, position, 1);
        enemy.add_behavior(Box::new(Seek::new(1.0)));
        enemy
    }

    /// An enemy that drifts along a randomly perturbed heading
    pub fn wanderer(position: Vec2, rng: &mut Pcg32) -> Self {
        let mut enemy = Self::new(Sprite::Wanderer, position, 2);
        enemy.add_behavior(Box::new(Wander::new(rng)));
        enemy
    }

    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) {
        self.behaviors.push(behavior);
    }

    /// Fully materialized; freshly spawned enemies cannot hurt the player
    pub fn is_active(&self) -> bool {
        self.spawn_timer == 0
    }

    #[cfg(test)]
    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    /// Skip the fade-in, as if the spawn timer had elapsed
    #[cfg(test)]
    pub fn materialize(&mut self) {
        self.spawn_timer = 0;
        self.body.tint = Vec4::ONE;
    }

    /// Advance one tick: run behaviors (or fade in), integrate, clamp, damp
    pub fn update(&mut self, env: &mut BehaviorEnv<'_>) {
        if self.spawn_timer == 0 {
            self.apply_behaviors(env);
        } else {
            self.spawn_timer -= 1;
            let fade = 1.0 - self.spawn_timer as f32 / SPAWN_FADE_TICKS as f32;
            self.body.tint = Vec4::splat(fade);
        }

        self.body.position += self.body.velocity;
        self.body.position = env
            .bounds
            .clamp_inset(self.body.position, self.body.sprite.size() / 2.0);
        self.body.velocity *= ENEMY_FRICTION;
    }

    /// Advance every task once; completed tasks drop out, the rest keep
    /// their relative order
    fn apply_behaviors(&mut self, env: &mut BehaviorEnv<'_>) {
        let Enemy {
            body, behaviors, ..
        } = self;
        behaviors.retain_mut(|behavior| behavior.advance(body, env) == BehaviorState::Running);
    }

    /// Soft separation impulse away from another enemy's position. The
    /// magnitude falls off with squared distance; the +1 keeps it finite
    /// when the pair sits on the same point.
    pub fn repel_from(&mut self, other_pos: Vec2) {
        let d = self.body.position - other_pos;
        self.body.velocity += REPULSION_STRENGTH * d / (d.length_squared() + 1.0);
    }

    /// Mark this enemy destroyed and emit the explosion cue. Score and
    /// multiplier are the collision pass's concern.
    pub fn kill(&mut self, events: &mut Vec<GameEvent>) {
        self.body.expired = true;
        events.push(GameEvent::Sound(SoundCue::Explosion));
    }
}
