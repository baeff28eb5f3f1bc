//! The laser projectile.
//!
//! A single fire-and-forget shot. At most one exists at a time; the scene
//! holds it as `Option<LaserShot>`. A shot flies along a fixed direction at
//! fixed speed, dies at its deadline regardless of what happens, and dies
//! early on the first collision. The orientation captured at launch is
//! render-only and never changes in flight.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Flight speed, units per second.
pub const LASER_SPEED: f32 = 25.0;

/// Maximum lifetime of a shot, seconds.
pub const LASER_DURATION: f32 = 0.5;

/// Collision probe radius of the shot.
pub const LASER_RADIUS: f32 = 0.5;

/// One laser shot in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaserShot {
    pub position: Vec3,
    /// Unit flight direction, fixed at launch.
    pub direction: Vec3,
    /// Clock reading at launch; the shot expires at `launched_at + LASER_DURATION`.
    pub launched_at: f32,
    /// Ship orientation at launch, frozen for rendering.
    pub rotation: Quat,
}

impl LaserShot {
    pub fn fired(position: Vec3, direction: Vec3, rotation: Quat, now: f32) -> Self {
        Self {
            position,
            direction,
            launched_at: now,
            rotation,
        }
    }

    /// Whether the shot has outlived its deadline at clock reading `now`.
    #[inline]
    pub fn expired(&self, now: f32) -> bool {
        now - self.launched_at >= LASER_DURATION
    }

    /// Advance the shot along its direction.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction * LASER_SPEED * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_at_deadline() {
        let shot = LaserShot::fired(Vec3::ZERO, Vec3::X, Quat::IDENTITY, 10.0);
        assert!(!shot.expired(10.0));
        assert!(!shot.expired(10.49));
        assert!(shot.expired(10.5));
        assert!(shot.expired(11.0));
    }

    #[test]
    fn advances_along_direction() {
        let mut shot = LaserShot::fired(Vec3::ZERO, Vec3::X, Quat::IDENTITY, 0.0);
        shot.advance(0.1);
        shot.advance(0.1);
        assert!((shot.position - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn rotation_is_frozen() {
        let rotation = Quat::from_rotation_y(1.0);
        let mut shot = LaserShot::fired(Vec3::ZERO, Vec3::X, rotation, 0.0);
        shot.advance(0.05);
        assert_eq!(shot.rotation, rotation);
    }
}
