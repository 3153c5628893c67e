use crate::color::Rgb;
use crate::geometry::{Point3, Triangle};

/// Renderer-side object that displays a star.
///
/// Implemented by the rendering layer's mesh/material abstraction. The star
/// pushes every change through these calls and never reads anything back.
pub trait Renderable {
    /// Replaces both buffers; element counts may differ from before.
    fn replace_geometry(&mut self, positions: &[Point3], triangles: &[Triangle]);

    /// Overwrites positions only. `positions.len()` equals the current
    /// vertex count and the index buffer stays as it is.
    fn patch_positions(&mut self, positions: &[Point3]);

    fn set_wireframe(&mut self, wireframe: bool);

    fn set_color(&mut self, color: Rgb);

    fn set_position(&mut self, position: Point3);

    /// Rotation about +Z in radians.
    fn set_rotation(&mut self, angle: f32);
}
