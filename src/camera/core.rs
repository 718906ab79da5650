use glam::{Mat4, Quat, Vec3};

use crate::util::math::look_rotation;

/// Perspective camera: a world-space pose plus projection parameters.
///
/// The camera views down its local −Z axis. Orientation is stored
/// explicitly so that both the orbit controls (via [`look_at`]) and the
/// discrete keyboard/swipe path (which writes orientation directly) can
/// drive it.
///
/// [`look_at`]: Camera::look_at
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Up direction used when re-orienting.
    pub up: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Create a camera at `position` looking down −Z with +Y up.
    #[must_use]
    pub fn new(position: Vec3, fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            position,
            up: Vec3::Y,
            orientation: Quat::IDENTITY,
            fovy,
            aspect,
            znear,
            zfar,
        }
    }

    /// Rotate the camera so that it faces `target`, keeping `up` as the
    /// reference vertical.
    pub fn look_at(&mut self, target: Vec3) {
        self.orientation = look_rotation(self.position - target, self.up);
    }

    /// Unit vector the camera is looking along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Transform a camera-local offset into a world-space displacement.
    #[must_use]
    pub fn local_to_world_direction(&self, local: Vec3) -> Vec3 {
        self.orientation * local
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
