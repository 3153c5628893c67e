//! Owned star mesh buffers.

use std::collections::HashSet;

use crate::error::StarError;
use crate::geometry::{compute_triangles, compute_vertices, Point3, Triangle};
use crate::params::StarParameters;

/// Vertex positions and fan triangles derived from a [`StarParameters`].
///
/// Only the owning `Star` mutates it, through two paths: `replace` when the
/// element counts change (tip count edits) and `patch_positions` when only
/// positions move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarMesh {
    vertices: Vec<Point3>,
    triangles: Vec<Triangle>,
}

impl StarMesh {
    /// Builds the mesh for the geometry-affecting fields of `params`.
    pub fn build(params: &StarParameters) -> Result<Self, StarError> {
        let vertices = compute_vertices(
            params.point_count,
            params.size,
            params.inner_radius_scale,
            params.inner_angle_offset,
        )?;
        let triangles = compute_triangles(params.point_count)?;
        Ok(Self { vertices, triangles })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Swaps in new buffers of any size.
    pub(crate) fn replace(&mut self, vertices: Vec<Point3>, triangles: Vec<Triangle>) {
        self.vertices = vertices;
        self.triangles = triangles;
    }

    /// Overwrites positions in place. The index buffer is left untouched.
    ///
    /// # Panics
    /// Panics if the vertex count differs; use `replace` then.
    pub(crate) fn patch_positions(&mut self, vertices: &[Point3]) {
        assert_eq!(
            vertices.len(),
            self.vertices.len(),
            "patch_positions requires an unchanged vertex count"
        );
        self.vertices.copy_from_slice(vertices);
    }

    /// Index buffer flattened to `u32`s, three per triangle.
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Unique undirected triangle edges, in first-seen order.
    pub fn wireframe_edges(&self) -> Vec<[u32; 2]> {
        edges_of(&self.triangles)
    }
}

/// Collects the unique undirected edges of `triangles`.
pub fn edges_of(triangles: &[Triangle]) -> Vec<[u32; 2]> {
    let mut seen = HashSet::with_capacity(triangles.len() * 3);
    let mut edges = Vec::with_capacity(triangles.len() * 2);
    for &[a, b, c] in triangles {
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let key = (u.min(v), u.max(v));
            if seen.insert(key) {
                edges.push([u, v]);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_uses_geometry_fields() {
        let params = StarParameters { point_count: 5, size: 4.0, ..Default::default() };
        let mesh = StarMesh::build(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 11);
        assert_eq!(mesh.triangle_count(), 10);
        assert_eq!(mesh.flat_indices().len(), 30);
    }

    #[test]
    fn patch_keeps_triangles() {
        let params = StarParameters::default();
        let mut mesh = StarMesh::build(&params).unwrap();
        let triangles = mesh.triangles().to_vec();

        let bigger = StarParameters { size: 3.0, ..params };
        let moved = compute_vertices(4, bigger.size, 0.5, 0.5).unwrap();
        mesh.patch_positions(&moved);

        assert_eq!(mesh.vertices(), moved.as_slice());
        assert_eq!(mesh.triangles(), triangles.as_slice());
    }

    #[test]
    #[should_panic(expected = "unchanged vertex count")]
    fn patch_with_wrong_length_panics() {
        let mut mesh = StarMesh::build(&StarParameters::default()).unwrap();
        mesh.patch_positions(&[[0.0; 3]; 3]);
    }

    #[test]
    fn replace_changes_both_buffers() {
        let mut mesh = StarMesh::build(&StarParameters::default()).unwrap();
        let v = compute_vertices(9, 1.0, 0.5, 0.5).unwrap();
        let t = compute_triangles(9).unwrap();
        mesh.replace(v, t);
        assert_eq!(mesh.vertex_count(), 19);
        assert_eq!(mesh.triangle_count(), 18);
    }

    #[test]
    fn fan_edges_are_ring_plus_spokes() {
        let mesh = StarMesh::build(&StarParameters { point_count: 3, ..Default::default() }).unwrap();
        let edges = mesh.wireframe_edges();
        // 6 ring edges + 6 spokes to the center.
        assert_eq!(edges.len(), 12);
        let spokes = edges.iter().filter(|e| e.contains(&6)).count();
        assert_eq!(spokes, 6);
    }
}
