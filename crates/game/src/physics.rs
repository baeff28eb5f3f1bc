//! Physics utilities for the simulation.
//!
//! Everything in the scene collides as a sphere, so this stays tiny - no
//! external physics engine needed.

use glam::Vec3;

/// Sphere-sphere collision detection.
#[inline]
pub fn spheres_collide(pos_a: Vec3, radius_a: f32, pos_b: Vec3, radius_b: f32) -> bool {
    let distance_sq = pos_a.distance_squared(pos_b);
    let combined_radius = radius_a + radius_b;
    distance_sq < combined_radius * combined_radius
}

/// Component-wise linear interpolation between direction vectors.
///
/// The result is deliberately NOT renormalized: steering blends the previous
/// forward vector toward the target with a small factor every frame, and the
/// slight shortening between frames is part of the damped feel.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}
