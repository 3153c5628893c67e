//! Star outline generation.
//!
//! The ring holds `2n` edge vertices alternating tip / notch (tips on even
//! slots), followed by one center vertex at the origin. Triangles fan from
//! each ring edge to the center:
//!
//! ```text
//!   slot:   0     1     2     3   ...  2n-1   2n
//!   role:  tip  notch  tip  notch ...  notch  center
//! ```
//!
//! Tip `k` (slot `2k`) sits at angle `k / n · 2π`; its notch (slot `2k + 1`)
//! at `(k + offset) / n · 2π`. The offset is clamped to `[0, 1]`, so angles
//! never decrease around the ring and no triangle `(i, i + 1, center)` winds
//! clockwise seen from +Z. At either end of the range half the fan collapses
//! to zero area.

use std::f32::consts::TAU;

use crate::error::StarError;
use crate::params::{check_inner_radius_scale, check_point_count, check_size, clamp_inner_angle_offset};

/// Vertex position in local space.
pub type Point3 = [f32; 3];

/// Index triple into a vertex list.
pub type Triangle = [u32; 3];

/// Number of vertices for `point_count` tips (ring plus center).
#[inline]
pub const fn vertex_count(point_count: u32) -> usize {
    2 * point_count as usize + 1
}

/// Number of fan triangles for `point_count` tips.
#[inline]
pub const fn triangle_count(point_count: u32) -> usize {
    2 * point_count as usize
}

/// Computes ring + center vertex positions.
pub fn compute_vertices(
    point_count: u32,
    size: f32,
    inner_radius_scale: f32,
    inner_angle_offset: f32,
) -> Result<Vec<Point3>, StarError> {
    check_point_count(point_count)?;
    check_size(size)?;
    check_inner_radius_scale(inner_radius_scale)?;
    let inner_angle_offset = clamp_inner_angle_offset(inner_angle_offset)?;

    let n = point_count as f32;
    let outer_radius = size * 0.5;
    let inner_radius = outer_radius * inner_radius_scale;

    let mut vertices = Vec::with_capacity(vertex_count(point_count));
    for k in 0..point_count {
        let tip = k as f32;
        vertices.push(polar(outer_radius, tip / n * TAU));
        vertices.push(polar(inner_radius, (tip + inner_angle_offset) / n * TAU));
    }
    vertices.push([0.0, 0.0, 0.0]);

    Ok(vertices)
}

/// Computes the fan index list. Depends on `point_count` only.
pub fn compute_triangles(point_count: u32) -> Result<Vec<Triangle>, StarError> {
    check_point_count(point_count)?;

    let ring = 2 * point_count;
    let center = ring;
    Ok((0..ring).map(|i| [i, (i + 1) % ring, center]).collect())
}

#[inline]
fn polar(radius: f32, angle: f32) -> Point3 {
    [radius * angle.cos(), radius * angle.sin(), 0.0]
}
