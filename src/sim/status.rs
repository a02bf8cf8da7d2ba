//! Score, lives and the kill multiplier
//!
//! Every kill is worth its base points times the current multiplier, and
//! bumps the multiplier by one (capped at 20). Going 0.8 seconds without a
//! kill drops the multiplier back to 1. An extra life is granted every 2000
//! points; losing the last life ends the session, which resets on respawn.

use crate::consts::{EXTRA_LIFE_SCORE, MAX_MULTIPLIER, MULTIPLIER_EXPIRY_SECS, STARTING_LIVES};

pub struct PlayerStatus {
    pub lives: u32,
    pub score: u32,
    /// Always in 1..=20
    pub multiplier: u32,
    pub high_score: u32,
    /// Seconds until the current multiplier expires
    multiplier_time_left: f32,
    /// Next score threshold that grants a life
    score_for_extra_life: u32,
}

impl PlayerStatus {
    pub fn new(high_score: u32) -> Self {
        Self {
            lives: STARTING_LIVES,
            score: 0,
            multiplier: 1,
            high_score,
            multiplier_time_left: 0.0,
            score_for_extra_life: EXTRA_LIFE_SCORE,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    /// Advance the multiplier expiry clock
    pub fn update(&mut self, dt: f32) {
        if self.multiplier > 1 {
            self.multiplier_time_left -= dt;
            if self.multiplier_time_left <= 0.0 {
                self.multiplier_time_left = 0.0;
                self.multiplier = 1;
            }
        }
    }

    /// Bank a kill's base points, scaled by the multiplier
    pub fn add_points(&mut self, base_points: u32) {
        self.score += base_points * self.multiplier;
        while self.score >= self.score_for_extra_life {
            self.score_for_extra_life += EXTRA_LIFE_SCORE;
            self.lives += 1;
        }
    }

    /// Bump the multiplier and restart its expiry clock
    pub fn increase_multiplier(&mut self) {
        self.multiplier_time_left = MULTIPLIER_EXPIRY_SECS;
        if self.multiplier < MAX_MULTIPLIER {
            self.multiplier += 1;
        }
    }

    pub fn remove_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Start a fresh session, rolling the high score first. Returns the new
    /// high score when the finished session beat it.
    pub fn reset(&mut self) -> Option<u32> {
        let beaten = if self.score > self.high_score {
            self.high_score = self.score;
            log::info!("new high score: {}", self.high_score);
            Some(self.high_score)
        } else {
            None
        };

        self.score = 0;
        self.multiplier = 1;
        self.lives = STARTING_LIVES;
        self.score_for_extra_life = EXTRA_LIFE_SCORE;
        self.multiplier_time_left = 0.0;
        beaten
    }
}
