//! Frame timing.
//!
//! Converts a monotonic clock reading into a per-frame delta. The delta is
//! clamped so that a stall (debugger pause, window drag) cannot launch every
//! moving object across the scene in a single frame.

use serde::{Deserialize, Serialize};

/// Longest delta a single frame is allowed to integrate, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Tracks the previous clock reading and produces clamped frame deltas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameClock {
    last_time: Option<f32>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_time: None }
    }

    /// Advance the clock to `now` and return the delta since the previous
    /// call, clamped to [`MAX_FRAME_DELTA`].
    ///
    /// The very first call establishes the baseline and returns 0.0, so
    /// nothing moves on frame one.
    pub fn advance(&mut self, now: f32) -> f32 {
        let delta = match self.last_time {
            None => 0.0,
            Some(last) => (now - last).min(MAX_FRAME_DELTA),
        };
        self.last_time = Some(now);
        delta
    }
}
