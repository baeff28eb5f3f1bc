//! Celestial bodies and their orbital position model.
//!
//! Every planet moves on a fixed circular orbit in the y=0 plane. All
//! tunables live in one static table indexed by [`PlanetId`] - simulation
//! state is never keyed by display strings.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Number of planets in the scene.
pub const PLANET_COUNT: usize = 8;

/// Collision radius of the sun, fixed at the origin.
pub const SUN_COLLISION_RADIUS: f32 = 9.5;

/// Visual scale of the sun sphere.
pub const SUN_SCALE: f32 = 10.0;

/// Stable identifier for a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    pub const ALL: [PlanetId; PLANET_COUNT] = [
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
        }
    }

    #[inline]
    pub fn spec(self) -> &'static PlanetSpec {
        &PLANET_SPECS[self.index()]
    }
}

/// Static per-planet configuration.
#[derive(Debug, Clone, Copy)]
pub struct PlanetSpec {
    /// Radius of the circular orbit around the sun.
    pub orbit_radius: f32,
    /// Angular speed along the orbit, radians per second.
    pub orbit_speed: f32,
    /// Visual scale of the planet sphere.
    pub scale: f32,
    /// Radius of the debris orbit around the planet.
    pub trash_orbit_radius: f32,
}

impl PlanetSpec {
    /// Collision radius of the planet body. Kept one unit inside the debris
    /// orbit so debris never intersects its own planet.
    #[inline]
    pub fn body_radius(&self) -> f32 {
        self.trash_orbit_radius - 1.0
    }

    /// World position of the planet at simulation time `t`.
    #[inline]
    pub fn position_at(&self, t: f32) -> Vec3 {
        let angle = self.orbit_speed * t;
        Vec3::new(
            self.orbit_radius * angle.cos(),
            0.0,
            self.orbit_radius * angle.sin(),
        )
    }
}

/// Configuration table, indexed by `PlanetId as usize`.
pub const PLANET_SPECS: [PlanetSpec; PLANET_COUNT] = [
    // Mercury
    PlanetSpec { orbit_radius: 15.0, orbit_speed: 0.4, scale: 0.5, trash_orbit_radius: 1.0 },
    // Venus
    PlanetSpec { orbit_radius: 20.0, orbit_speed: 0.35, scale: 1.0, trash_orbit_radius: 1.5 },
    // Earth
    PlanetSpec { orbit_radius: 25.0, orbit_speed: 0.3, scale: 1.3, trash_orbit_radius: 2.0 },
    // Mars
    PlanetSpec { orbit_radius: 30.0, orbit_speed: 0.25, scale: 1.3, trash_orbit_radius: 2.0 },
    // Jupiter
    PlanetSpec { orbit_radius: 40.0, orbit_speed: 0.2, scale: 2.5, trash_orbit_radius: 3.0 },
    // Saturn
    PlanetSpec { orbit_radius: 50.0, orbit_speed: 0.15, scale: 2.2, trash_orbit_radius: 3.0 },
    // Uranus
    PlanetSpec { orbit_radius: 55.0, orbit_speed: 0.1, scale: 1.6, trash_orbit_radius: 2.5 },
    // Neptune
    PlanetSpec { orbit_radius: 60.0, orbit_speed: 0.05, scale: 1.8, trash_orbit_radius: 2.5 },
];

/// Per-frame world positions of all planets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetStates {
    positions: [Vec3; PLANET_COUNT],
}

impl PlanetStates {
    pub fn new() -> Self {
        Self {
            positions: [Vec3::ZERO; PLANET_COUNT],
        }
    }

    /// Recompute every planet position for time `t`. Must run before any
    /// collision query in the same frame.
    pub fn update(&mut self, t: f32) {
        for id in PlanetId::ALL {
            self.positions[id.index()] = id.spec().position_at(t);
        }
    }

    #[inline]
    pub fn position(&self, id: PlanetId) -> Vec3 {
        self.positions[id.index()]
    }
}

impl Default for PlanetStates {
    fn default() -> Self {
        Self::new()
    }
}
