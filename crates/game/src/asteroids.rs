//! The asteroid field.
//!
//! A fixed 3x8 grid below the orbital plane. Cells are laid out brick-style
//! (odd rows shifted half a cell), drift together on a shared sine wave, and
//! each cell gets fresh random jitter every frame - the field is meant to
//! twinkle, not to behave like simulated rocks.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::random::SeededRandom;

/// Grid rows.
pub const FIELD_ROWS: usize = 3;
/// Grid columns.
pub const FIELD_COLS: usize = 8;

/// Collision radius of every asteroid.
pub const ASTEROID_RADIUS: f32 = 1.5;

/// Corner of the grid in world space.
const FIELD_ORIGIN: Vec3 = Vec3::new(0.0, -20.0, 0.0);
/// Distance between neighbouring cells.
const CELL_SPACING: f32 = 10.0;
/// Amplitude of the shared sinusoidal x-drift.
const DRIFT_AMPLITUDE: f32 = 2.0;
/// Per-axis jitter amplitude.
const JITTER_AMPLITUDE: f32 = 5.0;

/// Per-frame asteroid positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidField {
    positions: [[Vec3; FIELD_COLS]; FIELD_ROWS],
}

impl AsteroidField {
    pub fn new() -> Self {
        Self {
            positions: [[FIELD_ORIGIN; FIELD_COLS]; FIELD_ROWS],
        }
    }

    /// Recompute every cell for time `t`, drawing jitter from the scene's
    /// long-lived generator.
    pub fn update(&mut self, t: f32, rng: &mut SeededRandom) {
        let drift = t.sin() * DRIFT_AMPLITUDE;

        for row in 0..FIELD_ROWS {
            for col in 0..FIELD_COLS {
                let mut position = FIELD_ORIGIN
                    + Vec3::new(col as f32 * CELL_SPACING, 0.0, row as f32 * CELL_SPACING);
                if row % 2 == 1 {
                    position.x += CELL_SPACING * 0.5;
                }
                position.x += drift;

                position.x += rng.next_symmetric() * JITTER_AMPLITUDE;
                position.y += rng.next_symmetric() * JITTER_AMPLITUDE;
                position.z += rng.next_symmetric() * JITTER_AMPLITUDE;

                self.positions[row][col] = position;
            }
        }
    }

    #[inline]
    pub fn position(&self, row: usize, col: usize) -> Vec3 {
        self.positions[row][col]
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Vec3)> + '_ {
        self.positions.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, pos)| (row, col, *pos))
        })
    }
}

impl Default for AsteroidField {
    fn default() -> Self {
        Self::new()
    }
}
