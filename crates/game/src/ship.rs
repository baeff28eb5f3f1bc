//! Ship steering and the chase camera.
//!
//! Mouse deltas accumulate into yaw/pitch angles for the ship and the
//! camera. Each frame the target forward vector is rebuilt from those
//! angles and the actual forward vector is blended toward it, which gives
//! the steering its damped, slightly heavy feel. The camera trails the ship
//! from behind and above; it is derived, never independently moved.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::input::FrameInput;
use crate::physics::lerp_vec3;

/// Degrees of yaw/pitch per pixel of mouse travel.
pub const MOUSE_SENSITIVITY: f32 = 0.1;

/// Pitch clamp in degrees.
pub const PITCH_LIMIT: f32 = 89.0;

/// Blend factor applied to the forward vector each frame.
pub const TURN_SMOOTHING: f32 = 0.1;

/// Base translation speed, scaled by delta time and a 60 fps normalization.
pub const MOVE_SPEED: f32 = 0.3;

/// Collision radius of the ship.
pub const SHIP_RADIUS: f32 = 0.5;

/// How far behind the ship the camera sits.
const CAMERA_TRAIL: f32 = 1.5;
/// How far above the ship the camera sits.
const CAMERA_LIFT: f32 = 0.5;

/// The rest-pose forward axis that yaw/pitch rotate.
const BASE_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Steering state for the ship and its chase camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Steering {
    pub ship_position: Vec3,
    pub ship_forward: Vec3,
    pub camera_position: Vec3,
    pub camera_forward: Vec3,
    ship_yaw: f32,
    ship_pitch: f32,
    camera_yaw: f32,
    camera_pitch: f32,
}

impl Steering {
    pub fn new() -> Self {
        let ship_position = Vec3::new(20.0, 0.0, 0.0);
        let ship_forward = Vec3::new(-1.0, 0.0, 0.0);
        Self {
            ship_position,
            ship_forward,
            camera_position: ship_position - CAMERA_TRAIL * ship_forward
                + Vec3::Y * CAMERA_LIFT,
            camera_forward: ship_forward,
            ship_yaw: 0.0,
            ship_pitch: 0.0,
            camera_yaw: 0.0,
            camera_pitch: 0.0,
        }
    }

    /// Where the ship wants to be after this frame's thrust input, or `None`
    /// when no thrust is applied. The caller commits the move only after a
    /// collision probe comes back clear.
    pub fn tentative_move(&self, input: &FrameInput, dt: f32) -> Option<Vec3> {
        let axis = match (input.forward, input.backward) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => return None,
        };
        let speed = MOVE_SPEED * dt * 60.0;
        Some(self.ship_position + self.ship_forward * axis * speed)
    }

    pub fn commit_move(&mut self, position: Vec3) {
        self.ship_position = position;
    }

    /// Feed this frame's mouse delta into the yaw/pitch accumulators and
    /// re-derive both forward vectors and the camera position.
    pub fn steer(&mut self, mouse_delta: (f32, f32)) {
        let (dx, dy) = mouse_delta;

        self.camera_yaw += dx * MOUSE_SENSITIVITY;
        self.camera_pitch -= dy * MOUSE_SENSITIVITY;
        self.camera_pitch = self.camera_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.ship_yaw += dx * MOUSE_SENSITIVITY;
        // The ship's vertical aim tracks the camera's clamped pitch; the two
        // never diverge vertically.
        self.ship_pitch = self.camera_pitch;

        let camera_target = orient(self.camera_pitch, self.camera_yaw) * BASE_FORWARD;
        self.camera_forward = lerp_vec3(self.camera_forward, camera_target, TURN_SMOOTHING);

        let ship_target = orient(self.ship_pitch, self.ship_yaw) * BASE_FORWARD;
        self.ship_forward = lerp_vec3(self.ship_forward, ship_target, TURN_SMOOTHING);

        self.camera_position =
            self.ship_position - CAMERA_TRAIL * self.ship_forward + Vec3::Y * CAMERA_LIFT;
    }

    /// The ship's current orientation as a quaternion, used to freeze a
    /// laser shot's rendering rotation at launch.
    pub fn orientation(&self) -> Quat {
        orient(self.ship_pitch, self.ship_yaw)
    }

    pub fn yaw(&self) -> f32 {
        self.ship_yaw
    }

    pub fn pitch(&self) -> f32 {
        self.ship_pitch
    }
}

impl Default for Steering {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotation for the given pitch/yaw in degrees: yaw about Y (mouse right
/// turns right), then pitch about the local X axis.
fn orient(pitch: f32, yaw: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        -yaw.to_radians(),
        pitch.to_radians(),
        0.0,
    )
}
