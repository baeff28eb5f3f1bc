//! Third-person chase camera for rendering.

use glam::{Mat4, Vec3};

/// Chase camera state, fed from the simulation's derived camera pose.
#[derive(Debug, Clone)]
pub struct ChaseCamera {
    /// Eye position in world space.
    pub position: Vec3,

    /// Direction the camera is looking. Not required to be unit length -
    /// the steering blend hands us slightly shortened vectors.
    pub forward: Vec3,

    /// Field of view in degrees.
    pub fov: f32,

    /// Near clipping plane.
    pub near: f32,

    /// Far clipping plane.
    pub far: f32,

    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            fov: 90.0,
            near: 0.05,
            far: 200.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl ChaseCamera {
    /// Create a new camera at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Take position and look direction from the simulation.
    pub fn follow(&mut self, position: Vec3, forward: Vec3) {
        self.position = position;
        self.forward = forward;
    }

    /// Get the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.forward;
        Mat4::look_at_rh(self.position, target, Vec3::Y)
    }

    /// Get the projection matrix for rendering.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
