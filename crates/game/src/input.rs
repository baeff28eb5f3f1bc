//! Per-frame input for the simulation.
//!
//! The windowing layer collects raw events and hands the simulation one of
//! these per tick. The simulation never polls devices itself.

use serde::{Deserialize, Serialize};

/// Everything the player did this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Thrust forward (W held).
    pub forward: bool,

    /// Thrust backward (S held).
    pub backward: bool,

    /// Fire key held. The laser only reacts while no shot is in flight.
    pub fire: bool,

    /// Show the mission overlay while held.
    pub overlay: bool,

    /// Cursor movement since the previous frame, in pixels.
    pub mouse_delta: (f32, f32),
}

impl FrameInput {
    pub const fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            fire: false,
            overlay: false,
            mouse_delta: (0.0, 0.0),
        }
    }
}
