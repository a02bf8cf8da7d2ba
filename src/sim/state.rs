//! Game state and the entity registry
//!
//! `GameState` is the simulation context: it owns the player singleton, the
//! typed enemy and bullet lists, the seeded RNG, scoring, the spawner ramp
//! and the per-tick event queue. It is constructed once by the shell and
//! passed to `tick` every frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::entity::DrawParams;
use super::enemy::Enemy;
use super::player::PlayerShip;
use super::spawner::EnemySpawner;
use super::status::PlayerStatus;

/// Session configuration, loadable from JSON by the shell
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed; same seed and inputs reproduce the same session
    pub seed: u64,
    /// Screen size in pixels
    pub screen_size: Vec2,
    /// High score carried in from persistence
    pub high_score: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            screen_size: Vec2::new(1280.0, 720.0),
            high_score: 0,
        }
    }
}

/// The playable screen rectangle, origin at the top left
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub size: Vec2,
}

impl Bounds {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// True if the point lies inside the rectangle
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.size.x && p.y < self.size.y
    }

    /// True if the point lies inside the rectangle shrunk by `inset` per side
    pub fn contains_inset(&self, p: Vec2, inset: Vec2) -> bool {
        p.x >= inset.x
            && p.y >= inset.y
            && p.x <= self.size.x - inset.x
            && p.y <= self.size.y - inset.y
    }

    /// Clamp a center position so a sprite with the given half-extent stays
    /// fully on screen
    pub fn clamp_inset(&self, p: Vec2, half_extent: Vec2) -> Vec2 {
        p.clamp(half_extent, self.size - half_extent)
    }
}

/// Fire-and-forget audio cues; the shell picks concrete samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Shot,
    Explosion,
    Spawn,
}

/// Events accumulated during a tick and drained by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundCue),
    /// The last life was lost; the session resets once the respawn
    /// countdown elapses
    GameOver { score: u32 },
    /// A finished session beat the stored high score; the shell persists it
    HighScore(u32),
}

/// Deferred-add buffer for entities created during the update pass.
///
/// The live lists cannot be grown while they are being iterated, so anything
/// spawned mid-update (bullets fired by the player) lands here and is merged
/// at the end of the tick.
#[derive(Default)]
pub struct Pending {
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
}

impl Pending {
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }
}

/// Complete simulation state
pub struct GameState {
    pub bounds: Bounds,
    /// All randomness flows through this seeded generator
    pub rng: Pcg32,
    pub player: PlayerShip,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub status: PlayerStatus,
    pub spawner: EnemySpawner,
    pub events: Vec<GameEvent>,
    pub(crate) pending: Pending,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session from the given config
    pub fn new(config: SimConfig) -> Self {
        let bounds = Bounds::new(config.screen_size);
        log::info!(
            "new session: seed {}, screen {}x{}",
            config.seed,
            config.screen_size.x,
            config.screen_size.y
        );
        Self {
            bounds,
            rng: Pcg32::seed_from_u64(config.seed),
            player: PlayerShip::new(bounds),
            enemies: Vec::new(),
            bullets: Vec::new(),
            status: PlayerStatus::new(config.high_score),
            spawner: EnemySpawner::default(),
            events: Vec::new(),
            pending: Pending::default(),
            time_ticks: 0,
        }
    }

    /// Insert an enemy directly into the live list. Only valid outside the
    /// update pass; mid-update creation goes through the pending buffer.
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Insert a bullet directly into the live list. Only valid outside the
    /// update pass.
    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    /// Number of live entities, the player included
    pub fn live_count(&self) -> usize {
        1 + self.enemies.len() + self.bullets.len()
    }

    /// Emit draw parameters for every live entity in list order. The player
    /// is skipped while dead.
    pub fn draw(&self, out: &mut Vec<DrawParams>) {
        if !self.player.is_dead() {
            out.push(self.player.body.draw_params());
        }
        for enemy in &self.enemies {
            out.push(enemy.body.draw_params());
        }
        for bullet in &self.bullets {
            out.push(bullet.body.draw_params());
        }
    }

    /// Take all events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Merge entities created during the update pass into the live lists
    pub(crate) fn flush_pending(&mut self) {
        self.enemies.append(&mut self.pending.enemies);
        self.bullets.append(&mut self.pending.bullets);
    }
}
