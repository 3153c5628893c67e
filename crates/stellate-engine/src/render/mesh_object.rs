use glam::{Mat4, Vec3};
use stellate_star::mesh::edges_of;
use stellate_star::{Point3, Renderable, Rgb, Triangle};

/// Surface appearance of a mesh object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub color: Rgb,
    /// Draw triangle edges instead of filled faces.
    pub wireframe: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self { color: Rgb::WHITE, wireframe: false }
    }
}

/// World placement: translation plus rotation about +Z.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Transform {
    pub position: Point3,
    pub rotation: f32,
}

impl Transform {
    /// Model matrix: rotate in place, then translate.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::from(self.position)) * Mat4::from_rotation_z(self.rotation)
    }
}

/// CPU-side staging for a renderable mesh.
///
/// Implements [`Renderable`] so a star can push into it. The GPU side
/// ([`MeshRenderer`](super::MeshRenderer)) compares revisions against what
/// it last uploaded:
/// - `topology_revision` moves on `replace_geometry` (buffers reallocate)
/// - `position_revision` moves on every position change (vertex buffer rewrite)
#[derive(Debug, Default)]
pub struct MeshObject {
    positions: Vec<Point3>,
    indices: Vec<u32>,
    edge_indices: Vec<u32>,
    material: Material,
    transform: Transform,
    topology_revision: u64,
    position_revision: u64,
}

impl MeshObject {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Triangle list indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Line list indices, one pair per unique triangle edge.
    #[inline]
    pub fn edge_indices(&self) -> &[u32] {
        &self.edge_indices
    }

    #[inline]
    pub fn material(&self) -> Material {
        self.material
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[inline]
    pub fn topology_revision(&self) -> u64 {
        self.topology_revision
    }

    #[inline]
    pub fn position_revision(&self) -> u64 {
        self.position_revision
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Renderable for MeshObject {
    fn replace_geometry(&mut self, positions: &[Point3], triangles: &[Triangle]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);

        self.indices.clear();
        self.indices.extend(triangles.iter().flatten());

        self.edge_indices.clear();
        self.edge_indices.extend(edges_of(triangles).iter().flatten());

        self.topology_revision += 1;
        self.position_revision += 1;
    }

    fn patch_positions(&mut self, positions: &[Point3]) {
        debug_assert_eq!(positions.len(), self.positions.len());
        self.positions.copy_from_slice(positions);
        self.position_revision += 1;
    }

    fn set_wireframe(&mut self, wireframe: bool) {
        self.material.wireframe = wireframe;
    }

    fn set_color(&mut self, color: Rgb) {
        self.material.color = color;
    }

    fn set_position(&mut self, position: Point3) {
        self.transform.position = position;
    }

    fn set_rotation(&mut self, angle: f32) {
        self.transform.rotation = angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stellate_star::{Star, StarParameters};

    fn star() -> Star<MeshObject> {
        let params = StarParameters { point_count: 5, size: 4.0, ..Default::default() };
        Star::new(params, MeshObject::new()).unwrap()
    }

    #[test]
    fn construction_stages_full_geometry() {
        let s = star();
        let obj = s.renderable();
        assert_eq!(obj.positions().len(), 11);
        assert_eq!(obj.indices().len(), 30);
        // 10 ring edges + 10 spokes, two indices each.
        assert_eq!(obj.edge_indices().len(), 40);
        assert_eq!(obj.topology_revision(), 1);
        assert_eq!(obj.position_revision(), 1);
    }

    #[test]
    fn size_change_bumps_positions_only() {
        let mut s = star();
        s.set_size(6.0).unwrap();
        let obj = s.renderable();
        assert_eq!(obj.topology_revision(), 1);
        assert_eq!(obj.position_revision(), 2);
        assert_eq!(obj.positions()[0], [3.0, 0.0, 0.0]);
    }

    #[test]
    fn point_count_change_bumps_topology() {
        let mut s = star();
        s.set_point_count(7).unwrap();
        let obj = s.renderable();
        assert_eq!(obj.topology_revision(), 2);
        assert_eq!(obj.indices().len(), 42);
    }

    #[test]
    fn material_and_transform_do_not_touch_revisions() {
        let mut s = star();
        s.set_wireframe_mode(true);
        s.set_color(Rgb::from_hex(0x336699)).unwrap();
        s.set_position([0.0, 1.0, 0.0]).unwrap();
        s.set_rotation(1.0).unwrap();

        let obj = s.renderable();
        assert_eq!((obj.topology_revision(), obj.position_revision()), (1, 1));
        assert!(obj.material().wireframe);
        assert_eq!(obj.material().color.to_hex(), 0x336699);
        assert_eq!(obj.transform(), Transform { position: [0.0, 1.0, 0.0], rotation: 1.0 });
    }

    #[test]
    fn transform_rotates_then_translates() {
        let t = Transform { position: [1.0, 0.0, 0.0], rotation: std::f32::consts::FRAC_PI_2 };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
    }
}
