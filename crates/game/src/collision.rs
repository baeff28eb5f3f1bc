//! Scene-wide collision queries.
//!
//! The probe is read-only and shared by every caller; damage is a separate,
//! explicit step. The ship's pre-move check only probes - brushing against
//! debris blocks the ship without shrinking the debris pool. The laser
//! probes and then applies damage to whatever it found.
//!
//! Probe order is fixed: celestial bodies, then asteroids, then debris,
//! first match wins. Bodies and asteroids are indestructible, and a single
//! probe can name at most one debris piece, so at most one piece is ever
//! destroyed per query.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::asteroids::{AsteroidField, ASTEROID_RADIUS};
use crate::debris::DebrisRegistry;
use crate::physics::spheres_collide;
use crate::planets::{PlanetId, PlanetStates, SUN_COLLISION_RADIUS};

/// What a collision probe hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Sun,
    Planet(PlanetId),
    Asteroid { row: usize, col: usize },
    Debris { planet: PlanetId, slot: usize },
}

/// Read-only probe: does a sphere at `point` with `radius` intersect
/// anything in the scene? Returns the first intersecting target, or `None`.
///
/// Positions must already be updated for the current frame; probing against
/// last frame's positions is a correctness bug, not a tolerance.
pub fn query_any(
    point: Vec3,
    radius: f32,
    planets: &PlanetStates,
    asteroids: &AsteroidField,
    debris: &DebrisRegistry,
) -> Option<Target> {
    if spheres_collide(point, radius, Vec3::ZERO, SUN_COLLISION_RADIUS) {
        return Some(Target::Sun);
    }
    for id in PlanetId::ALL {
        if spheres_collide(point, radius, planets.position(id), id.spec().body_radius()) {
            return Some(Target::Planet(id));
        }
    }
    for (row, col, position) in asteroids.iter() {
        if spheres_collide(point, radius, position, ASTEROID_RADIUS) {
            return Some(Target::Asteroid { row, col });
        }
    }
    for (planet, slot, piece) in debris.iter_live() {
        if spheres_collide(point, radius, piece.position, piece.radius) {
            return Some(Target::Debris { planet, slot });
        }
    }
    None
}

/// Apply damage to a probed target. Only debris takes damage; bodies and
/// asteroids shrug it off. Returns whether anything was destroyed.
pub fn apply_damage(target: Target, debris: &mut DebrisRegistry) -> bool {
    match target {
        Target::Debris { planet, slot } => {
            debris.mark_destroyed(planet, slot);
            true
        }
        Target::Sun | Target::Planet(_) | Target::Asteroid { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_at(t: f32) -> (PlanetStates, AsteroidField, DebrisRegistry) {
        let mut planets = PlanetStates::new();
        planets.update(t);
        let mut debris = DebrisRegistry::new();
        debris.rebuild(&planets, t);
        // A jitter-free field keeps these tests position-predictable.
        let asteroids = AsteroidField::new();
        (planets, asteroids, debris)
    }

    #[test]
    fn empty_space_misses() {
        let (planets, asteroids, debris) = scene_at(0.0);
        let hit = query_any(Vec3::new(0.0, 200.0, 0.0), 0.5, &planets, &asteroids, &debris);
        assert_eq!(hit, None);
    }

    #[test]
    fn sun_hit_comes_first() {
        let (planets, asteroids, debris) = scene_at(0.0);
        let hit = query_any(Vec3::ZERO, 0.5, &planets, &asteroids, &debris);
        assert_eq!(hit, Some(Target::Sun));
    }

    #[test]
    fn planet_hit_at_its_center() {
        let t = 1.7;
        let (planets, asteroids, debris) = scene_at(t);
        let hit = query_any(
            planets.position(PlanetId::Jupiter),
            0.5,
            &planets,
            &asteroids,
            &debris,
        );
        assert_eq!(hit, Some(Target::Planet(PlanetId::Jupiter)));
    }

    #[test]
    fn hit_threshold_is_sum_of_radii() {
        let (planets, asteroids, debris) = scene_at(0.0);
        let probe_radius = 0.5;

        // Just inside the sun's combined radius hits, just outside misses.
        let inside = Vec3::new(SUN_COLLISION_RADIUS + probe_radius - 0.01, 0.0, 0.0);
        let outside = Vec3::new(SUN_COLLISION_RADIUS + probe_radius + 0.01, 0.0, 0.0);

        assert_eq!(
            query_any(inside, probe_radius, &planets, &asteroids, &debris),
            Some(Target::Sun)
        );
        assert_eq!(
            query_any(outside, probe_radius, &planets, &asteroids, &debris),
            None
        );
    }

    #[test]
    fn probe_is_pure() {
        let (planets, asteroids, mut debris) = scene_at(0.0);
        let piece_pos = debris.piece(PlanetId::Neptune, 0).unwrap().position;

        let hit = query_any(piece_pos, 0.5, &planets, &asteroids, &debris);
        assert!(matches!(hit, Some(Target::Debris { .. })));

        // Probing alone never destroys anything.
        debris.rebuild(&planets, 0.1);
        assert!(debris.is_visible(PlanetId::Neptune, 0));
        debris.rebuild(&planets, 0.2);
        assert_eq!(debris.live_count(PlanetId::Neptune), 4);
    }

    #[test]
    fn damage_only_affects_debris() {
        let (planets, _asteroids, mut debris) = scene_at(0.0);

        assert!(!apply_damage(Target::Sun, &mut debris));
        assert!(!apply_damage(Target::Planet(PlanetId::Earth), &mut debris));
        assert!(!apply_damage(Target::Asteroid { row: 0, col: 0 }, &mut debris));
        assert!(apply_damage(
            Target::Debris {
                planet: PlanetId::Mars,
                slot: 0
            },
            &mut debris
        ));

        debris.rebuild(&planets, 0.1);
        assert!(!debris.is_visible(PlanetId::Mars, 0));
        for planet in PlanetId::ALL {
            for slot in 0..4 {
                if planet == PlanetId::Mars && slot == 0 {
                    continue;
                }
                assert!(debris.is_visible(planet, slot));
            }
        }
    }
}
