//! Player projectiles
//!
//! Bullets fly in a straight line and expire the moment they leave the
//! screen; collision with enemies is handled by the collision pass.

use glam::Vec2;

use super::entity::{Body, Sprite};
use super::state::Bounds;
use crate::consts::BULLET_RADIUS;

pub struct Bullet {
    pub body: Body,
}

impl Bullet {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        let mut body = Body::new(Sprite::Bullet, position, BULLET_RADIUS);
        body.velocity = velocity;
        body.orientation = velocity.to_angle();
        Self { body }
    }

    pub fn update(&mut self, bounds: Bounds) {
        // Squared length avoids the square root on the hot path
        if self.body.velocity.length_squared() > 0.0 {
            self.body.orientation = self.body.velocity.to_angle();
        }

        self.body.position += self.body.velocity;

        if !bounds.contains(self.body.position) {
            self.body.expired = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_moves_straight() {
        let bounds = Bounds::new(Vec2::new(1280.0, 720.0));
        let mut bullet = Bullet::new(Vec2::new(100.0, 100.0), Vec2::new(11.0, 0.0));

        bullet.update(bounds);
        bullet.update(bounds);
        assert_eq!(bullet.body.position, Vec2::new(122.0, 100.0));
        assert!(!bullet.body.expired);
    }

    #[test]
    fn test_orientation_follows_velocity() {
        let bullet = Bullet::new(Vec2::ZERO, Vec2::new(0.0, 11.0));
        assert!((bullet.body.orientation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_bullet_expires_off_screen() {
        let bounds = Bounds::new(Vec2::new(1280.0, 720.0));
        let mut bullet = Bullet::new(Vec2::new(1275.0, 100.0), Vec2::new(11.0, 0.0));

        bullet.update(bounds);
        assert!(bullet.body.expired);
    }
}
