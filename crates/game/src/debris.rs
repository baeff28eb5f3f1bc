//! Destructible orbital debris.
//!
//! Each planet carries up to four debris slots, two inner pieces and two
//! outer pieces generated pairwise. Pieces are ephemeral - the whole set is
//! rebuilt from orbital parameters every frame - but destruction is sticky:
//! once a slot's piece is shot down, the visibility flag for that
//! (planet, slot) pair is cleared for the rest of the process lifetime.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::planets::{PlanetId, PlanetStates, PLANET_COUNT};

/// Debris slots per planet.
pub const SLOTS_PER_PLANET: usize = 4;

/// Angular speed of debris around its planet, radians per second.
pub const DEBRIS_ORBIT_SPEED: f32 = 1.5;

/// Collision radius shrink factor applied to the visual scale.
const COLLISION_SHRINK: f32 = 0.4;

/// Phase offsets per slot: (cosine offset, sine offset, orbit height).
/// Slots within a planet share the orbit radius but are desynchronized so
/// the pieces spread out along the ring.
const SLOT_PHASES: [(f32, f32, f32); SLOTS_PER_PLANET] = [
    (100.0, 50.0, 0.5),
    (-50.0, -100.0, -0.5),
    (200.0, 100.0, 0.5),
    (-100.0, -200.0, -0.5),
];

/// The two visual/collision variants of debris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebrisKind {
    /// Small piece on the upper ring, scaled to a tenth of the planet.
    Inner,
    /// Large piece on the lower ring, scaled to half of the planet.
    Outer,
}

impl DebrisKind {
    fn for_slot(slot: usize) -> Self {
        if slot % 2 == 0 {
            DebrisKind::Inner
        } else {
            DebrisKind::Outer
        }
    }

    /// Visual scale of a piece relative to the owning planet's scale.
    pub fn scale_factor(self) -> f32 {
        match self {
            DebrisKind::Inner => 0.1,
            DebrisKind::Outer => 0.5,
        }
    }
}

/// One live piece of debris, valid for the current frame only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DebrisPiece {
    pub position: Vec3,
    pub radius: f32,
    pub kind: DebrisKind,
    pub destroyed: bool,
}

/// Per-planet debris bookkeeping: the persistent visibility bitmap plus the
/// live pieces rebuilt each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebrisRegistry {
    visible: [[bool; SLOTS_PER_PLANET]; PLANET_COUNT],
    live: [[Option<DebrisPiece>; SLOTS_PER_PLANET]; PLANET_COUNT],
}

impl DebrisRegistry {
    pub fn new() -> Self {
        Self {
            visible: [[true; SLOTS_PER_PLANET]; PLANET_COUNT],
            live: [[None; SLOTS_PER_PLANET]; PLANET_COUNT],
        }
    }

    /// Whether the given slot can still spawn a piece.
    #[inline]
    pub fn is_visible(&self, planet: PlanetId, slot: usize) -> bool {
        self.visible[planet.index()][slot]
    }

    /// The live piece in a slot, if the slot is visible this frame.
    #[inline]
    pub fn piece(&self, planet: PlanetId, slot: usize) -> Option<&DebrisPiece> {
        self.live[planet.index()][slot].as_ref()
    }

    /// Number of live pieces around a planet this frame.
    pub fn live_count(&self, planet: PlanetId) -> usize {
        self.live[planet.index()].iter().flatten().count()
    }

    /// Iterate all live pieces, planet-major then slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = (PlanetId, usize, &DebrisPiece)> {
        PlanetId::ALL.into_iter().flat_map(move |planet| {
            self.live[planet.index()]
                .iter()
                .enumerate()
                .filter_map(move |(slot, piece)| piece.as_ref().map(|p| (planet, slot, p)))
        })
    }

    /// Flag the piece in a slot as destroyed. The slot's visibility is
    /// cleared on the next rebuild, never to return.
    pub fn mark_destroyed(&mut self, planet: PlanetId, slot: usize) {
        if let Some(piece) = self.live[planet.index()][slot].as_mut() {
            piece.destroyed = true;
            log::debug!("debris destroyed: {} slot {}", planet.name(), slot);
        }
    }

    /// Rebuild every planet's live pieces for time `t`.
    ///
    /// Slots whose piece was flagged destroyed since the last rebuild are
    /// permanently suppressed first, then each still-visible slot gets a
    /// fresh piece at its orbital position.
    pub fn rebuild(&mut self, planets: &PlanetStates, t: f32) {
        for planet in PlanetId::ALL {
            let spec = planet.spec();
            let center = planets.position(planet);
            let slots = &mut self.live[planet.index()];

            for (slot, piece) in slots.iter().enumerate() {
                if piece.is_some_and(|p| p.destroyed) {
                    self.visible[planet.index()][slot] = false;
                }
            }

            *slots = [None; SLOTS_PER_PLANET];
            for (slot, &(cos_offset, sin_offset, height)) in SLOT_PHASES.iter().enumerate() {
                if !self.visible[planet.index()][slot] {
                    continue;
                }
                let kind = DebrisKind::for_slot(slot);
                let angle = DEBRIS_ORBIT_SPEED * t;
                let position = Vec3::new(
                    center.x + spec.trash_orbit_radius * (angle + cos_offset).cos(),
                    height,
                    center.z + spec.trash_orbit_radius * (angle + sin_offset).sin(),
                );
                slots[slot] = Some(DebrisPiece {
                    position,
                    radius: spec.scale * kind.scale_factor() * COLLISION_SHRINK,
                    kind,
                    destroyed: false,
                });
            }
        }
    }
}

impl Default for DebrisRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planets_at(t: f32) -> PlanetStates {
        let mut planets = PlanetStates::new();
        planets.update(t);
        planets
    }

    #[test]
    fn full_set_after_first_rebuild() {
        let mut registry = DebrisRegistry::new();
        registry.rebuild(&planets_at(0.0), 0.0);

        for planet in PlanetId::ALL {
            assert_eq!(registry.live_count(planet), SLOTS_PER_PLANET);
        }
        assert_eq!(registry.iter_live().count(), PLANET_COUNT * SLOTS_PER_PLANET);
    }

    #[test]
    fn slot_zero_orbital_position() {
        let t = 2.0;
        let planets = planets_at(t);
        let mut registry = DebrisRegistry::new();
        registry.rebuild(&planets, t);

        let mars = planets.position(PlanetId::Mars);
        let spec = PlanetId::Mars.spec();
        let piece = registry.piece(PlanetId::Mars, 0).unwrap();

        let angle = DEBRIS_ORBIT_SPEED * t;
        let expected = Vec3::new(
            mars.x + spec.trash_orbit_radius * (angle + 100.0).cos(),
            0.5,
            mars.z + spec.trash_orbit_radius * (angle + 50.0).sin(),
        );
        assert!((piece.position - expected).length() < 1e-4);
        assert_eq!(piece.kind, DebrisKind::Inner);
    }

    #[test]
    fn inner_and_outer_radii_differ() {
        let mut registry = DebrisRegistry::new();
        registry.rebuild(&planets_at(0.0), 0.0);

        let spec = PlanetId::Jupiter.spec();
        let inner = registry.piece(PlanetId::Jupiter, 0).unwrap();
        let outer = registry.piece(PlanetId::Jupiter, 1).unwrap();
        assert!((inner.radius - spec.scale / 10.0 * 0.4).abs() < 1e-6);
        assert!((outer.radius - spec.scale / 2.0 * 0.4).abs() < 1e-6);
    }

    #[test]
    fn destruction_is_sticky() {
        let mut registry = DebrisRegistry::new();
        registry.rebuild(&planets_at(0.0), 0.0);

        registry.mark_destroyed(PlanetId::Mars, 0);
        // Piece stays in the live set for the remainder of the frame.
        assert_eq!(registry.live_count(PlanetId::Mars), SLOTS_PER_PLANET);

        for frame in 1..20 {
            let t = frame as f32 / 60.0;
            registry.rebuild(&planets_at(t), t);
            assert!(!registry.is_visible(PlanetId::Mars, 0));
            assert!(registry.piece(PlanetId::Mars, 0).is_none());
            assert_eq!(registry.live_count(PlanetId::Mars), SLOTS_PER_PLANET - 1);
        }

        // Other planets are untouched.
        assert_eq!(registry.live_count(PlanetId::Earth), SLOTS_PER_PLANET);
    }

    #[test]
    fn mark_destroyed_on_suppressed_slot_is_noop() {
        let mut registry = DebrisRegistry::new();
        registry.rebuild(&planets_at(0.0), 0.0);
        registry.mark_destroyed(PlanetId::Venus, 3);
        registry.rebuild(&planets_at(0.1), 0.1);

        // Slot already empty; marking again must not panic or resurrect it.
        registry.mark_destroyed(PlanetId::Venus, 3);
        registry.rebuild(&planets_at(0.2), 0.2);
        assert!(!registry.is_visible(PlanetId::Venus, 3));
    }
}
