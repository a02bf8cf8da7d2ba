//! Shared entity state
//!
//! Every simulated object (player ship, enemies, bullets) embeds a `Body`:
//! the kinematic and collision state the manager and the collision pass
//! operate on. Concrete types layer their own fields and update logic on top.

use glam::{Vec2, Vec4};

/// Opaque handle to a sprite image. The renderer resolves it to a texture;
/// the simulation only uses the nominal size for bounds clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Player,
    Seeker,
    Wanderer,
    Bullet,
}

impl Sprite {
    /// Nominal image size in pixels
    pub fn size(self) -> Vec2 {
        match self {
            Sprite::Player => Vec2::new(40.0, 40.0),
            Sprite::Seeker => Vec2::new(40.0, 40.0),
            Sprite::Wanderer => Vec2::new(40.0, 40.0),
            Sprite::Bullet => Vec2::new(16.0, 8.0),
        }
    }
}

/// Kinematic and collision state shared by all entity kinds
#[derive(Debug, Clone)]
pub struct Body {
    pub sprite: Sprite,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing in radians
    pub orientation: f32,
    /// Collision radius, never negative
    pub radius: f32,
    /// RGBA tint; enemies fade this in while materializing
    pub tint: Vec4,
    /// Marked for removal at the end of the current tick
    pub expired: bool,
}

impl Body {
    pub fn new(sprite: Sprite, position: Vec2, radius: f32) -> Self {
        Self {
            sprite,
            position,
            velocity: Vec2::ZERO,
            orientation: 0.0,
            radius,
            tint: Vec4::ONE,
            expired: false,
        }
    }

    /// Draw parameters for this body, origin at the sprite center
    pub fn draw_params(&self) -> DrawParams {
        DrawParams {
            sprite: self.sprite,
            position: self.position,
            orientation: self.orientation,
            tint: self.tint,
            origin: self.sprite.size() / 2.0,
        }
    }
}

/// One entity's worth of draw output, consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    pub sprite: Sprite,
    pub position: Vec2,
    pub orientation: f32,
    pub tint: Vec4,
    pub origin: Vec2,
}
