use glam::{Mat4, Vec3};

/// Perspective camera on the +Z axis looking at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Distance from the origin along +Z.
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 10.0,
            fov_y: 45f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.distance), Vec3::ZERO, Vec3::Y)
    }

    /// Projection with wgpu's `[0, 1]` depth range.
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect_ratio.max(f32::EPSILON), self.near, self.far)
    }

    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection(aspect_ratio) * self.view()
    }
}
