//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (player, then enemies, then bullets)
//! - No rendering or platform dependencies

pub mod behavior;
pub mod bullet;
pub mod collision;
pub mod entity;
pub mod enemy;
pub mod player;
pub mod spawner;
pub mod state;
pub mod status;
pub mod tick;

pub use behavior::{Behavior, BehaviorEnv, BehaviorState, PatrolSquare, Seek, Wander};
pub use bullet::Bullet;
pub use entity::{Body, DrawParams, Sprite};
pub use enemy::Enemy;
pub use player::PlayerShip;
pub use spawner::EnemySpawner;
pub use state::{Bounds, GameEvent, GameState, SimConfig, SoundCue};
pub use status::PlayerStatus;
pub use tick::{TickInput, tick};
