use crate::color::Rgb;
use crate::error::StarError;
use crate::geometry::{compute_triangles, compute_vertices, Point3};
use crate::mesh::StarMesh;
use crate::params::{
    check_color, check_inner_radius_scale, check_point_count, check_position, check_rotation,
    check_size, clamp_inner_angle_offset, StarParameters,
};
use crate::renderable::Renderable;
use crate::schema::ParamValue;

/// A star: current parameters, the mesh derived from them, and the
/// renderable that displays it.
///
/// Every setter validates first and only then commits, so a rejected call
/// leaves parameters, mesh and renderable exactly as they were.
#[derive(Debug)]
pub struct Star<R: Renderable> {
    params: StarParameters,
    mesh: StarMesh,
    renderable: R,
}

impl<R: Renderable> Star<R> {
    /// Validates `params`, builds the mesh and pushes the full state into
    /// `renderable`.
    pub fn new(params: StarParameters, mut renderable: R) -> Result<Self, StarError> {
        params.validate()?;
        let params = StarParameters {
            inner_angle_offset: clamp_inner_angle_offset(params.inner_angle_offset)?,
            ..params
        };
        let mesh = StarMesh::build(&params)?;

        renderable.replace_geometry(mesh.vertices(), mesh.triangles());
        renderable.set_wireframe(params.wireframe);
        renderable.set_color(params.color);
        renderable.set_position(params.position);
        renderable.set_rotation(params.rotation);

        log::debug!(
            "star created: {} points, {} vertices",
            params.point_count,
            mesh.vertex_count()
        );

        Ok(Self { params, mesh, renderable })
    }

    #[inline]
    pub fn params(&self) -> &StarParameters {
        &self.params
    }

    #[inline]
    pub fn mesh(&self) -> &StarMesh {
        &self.mesh
    }

    /// The object a scene graph attaches.
    #[inline]
    pub fn renderable(&self) -> &R {
        &self.renderable
    }

    pub fn into_renderable(self) -> R {
        self.renderable
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Changes the tip count and rebuilds both buffers.
    pub fn set_point_count(&mut self, n: u32) -> Result<(), StarError> {
        check_point_count(n)?;
        let p = &self.params;
        let vertices = compute_vertices(n, p.size, p.inner_radius_scale, p.inner_angle_offset)?;
        let triangles = compute_triangles(n)?;

        self.mesh.replace(vertices, triangles);
        self.renderable.replace_geometry(self.mesh.vertices(), self.mesh.triangles());
        self.params.point_count = n;

        log::debug!("star rebuilt: {n} points, {} vertices", self.mesh.vertex_count());
        Ok(())
    }

    pub fn set_size(&mut self, size: f32) -> Result<(), StarError> {
        check_size(size)?;
        self.patch(StarParameters { size, ..self.params })
    }

    pub fn set_inner_angle_offset(&mut self, offset: f32) -> Result<(), StarError> {
        let inner_angle_offset = clamp_inner_angle_offset(offset)?;
        self.patch(StarParameters { inner_angle_offset, ..self.params })
    }

    pub fn set_inner_radius_scale(&mut self, scale: f32) -> Result<(), StarError> {
        check_inner_radius_scale(scale)?;
        self.patch(StarParameters { inner_radius_scale: scale, ..self.params })
    }

    /// Recomputes positions for `next` and commits them without touching
    /// the index buffer.
    fn patch(&mut self, next: StarParameters) -> Result<(), StarError> {
        let vertices = compute_vertices(
            next.point_count,
            next.size,
            next.inner_radius_scale,
            next.inner_angle_offset,
        )?;

        self.mesh.patch_positions(&vertices);
        self.renderable.patch_positions(self.mesh.vertices());
        self.params = next;

        log::trace!("star positions patched");
        Ok(())
    }

    // ── material / transform ──────────────────────────────────────────────

    pub fn set_wireframe_mode(&mut self, wireframe: bool) {
        self.params.wireframe = wireframe;
        self.renderable.set_wireframe(wireframe);
    }

    pub fn set_color(&mut self, color: Rgb) -> Result<(), StarError> {
        check_color(color)?;
        self.params.color = color;
        self.renderable.set_color(color);
        Ok(())
    }

    pub fn set_position(&mut self, position: Point3) -> Result<(), StarError> {
        check_position(position)?;
        self.params.position = position;
        self.renderable.set_position(position);
        Ok(())
    }

    /// Sets the rotation about +Z in radians. Transform only.
    pub fn set_rotation(&mut self, angle: f32) -> Result<(), StarError> {
        check_rotation(angle)?;
        self.params.rotation = angle;
        self.renderable.set_rotation(angle);
        Ok(())
    }

    // ── panel dispatch ────────────────────────────────────────────────────

    /// Routes a control-panel edit to the matching setter.
    pub fn apply(&mut self, value: ParamValue) -> Result<(), StarError> {
        match value {
            ParamValue::PointCount(n) => self.set_point_count(n),
            ParamValue::Size(s) => self.set_size(s),
            ParamValue::InnerAngleOffset(o) => self.set_inner_angle_offset(o),
            ParamValue::InnerRadiusScale(k) => self.set_inner_radius_scale(k),
            ParamValue::Wireframe(w) => {
                self.set_wireframe_mode(w);
                Ok(())
            }
            ParamValue::Color(c) => self.set_color(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Triangle;
    use crate::schema::ParamField;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Replace { vertices: usize, triangles: usize },
        Patch { vertices: usize },
        Wireframe(bool),
        Color(Rgb),
        Position(Point3),
        Rotation(f32),
    }

    /// Records every call and keeps the last pushed buffers.
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<Call>,
        positions: Vec<Point3>,
        triangles: Vec<Triangle>,
    }

    impl Renderable for Recorder {
        fn replace_geometry(&mut self, positions: &[Point3], triangles: &[Triangle]) {
            self.calls.push(Call::Replace { vertices: positions.len(), triangles: triangles.len() });
            self.positions = positions.to_vec();
            self.triangles = triangles.to_vec();
        }
        fn patch_positions(&mut self, positions: &[Point3]) {
            assert_eq!(positions.len(), self.positions.len());
            self.calls.push(Call::Patch { vertices: positions.len() });
            self.positions = positions.to_vec();
        }
        fn set_wireframe(&mut self, wireframe: bool) {
            self.calls.push(Call::Wireframe(wireframe));
        }
        fn set_color(&mut self, color: Rgb) {
            self.calls.push(Call::Color(color));
        }
        fn set_position(&mut self, position: Point3) {
            self.calls.push(Call::Position(position));
        }
        fn set_rotation(&mut self, angle: f32) {
            self.calls.push(Call::Rotation(angle));
        }
    }

    fn star() -> Star<Recorder> {
        let params = StarParameters {
            point_count: 5,
            size: 4.0,
            inner_radius_scale: 0.5,
            inner_angle_offset: 0.5,
            wireframe: true,
            ..Default::default()
        };
        let mut s = Star::new(params, Recorder::default()).unwrap();
        s.renderable.calls.clear();
        s
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_pushes_full_state() {
        let s = Star::new(StarParameters::default(), Recorder::default()).unwrap();
        assert_eq!(
            s.renderable().calls,
            vec![
                Call::Replace { vertices: 9, triangles: 8 },
                Call::Wireframe(false),
                Call::Color(Rgb::WHITE),
                Call::Position([0.0, 0.0, 0.0]),
                Call::Rotation(0.0),
            ]
        );
    }

    #[test]
    fn new_rejects_invalid_params() {
        let params = StarParameters { point_count: 1, ..Default::default() };
        let err = Star::new(params, Recorder::default()).unwrap_err();
        assert_eq!(err.parameter(), "pointCount");
    }

    // ── point count ───────────────────────────────────────────────────────

    #[test]
    fn point_count_rebuilds_both_buffers() {
        let mut s = star();
        s.set_point_count(8).unwrap();
        assert_eq!(s.params().point_count, 8);
        assert_eq!(s.mesh().vertex_count(), 17);
        assert_eq!(s.renderable().calls, vec![Call::Replace { vertices: 17, triangles: 16 }]);
        assert_eq!(s.renderable().positions, s.mesh().vertices());
    }

    #[test]
    fn point_count_below_three_changes_nothing() {
        let mut s = star();
        let params = *s.params();
        let mesh = s.mesh().clone();

        let err = s.set_point_count(2).unwrap_err();
        assert!(matches!(err, StarError::InvalidParameter { name: "pointCount", .. }));
        assert_eq!(*s.params(), params);
        assert_eq!(*s.mesh(), mesh);
        assert!(s.renderable().calls.is_empty());
    }

    // ── position patches ──────────────────────────────────────────────────

    #[test]
    fn shape_setters_only_patch_positions() {
        let mut s = star();
        let triangles = s.mesh().triangles().to_vec();
        let before = s.mesh().vertices().to_vec();

        s.set_size(6.0).unwrap();
        s.set_inner_radius_scale(0.3).unwrap();
        s.set_inner_angle_offset(0.2).unwrap();

        assert_eq!(s.mesh().triangles(), triangles.as_slice());
        assert_eq!(s.renderable().triangles, triangles);
        assert_ne!(s.mesh().vertices(), before.as_slice());
        assert_eq!(s.renderable().calls, vec![Call::Patch { vertices: 11 }; 3]);
        assert_eq!(s.mesh().vertices()[0], [3.0, 0.0, 0.0]);
    }

    #[test]
    fn patched_positions_match_fresh_build() {
        let mut s = star();
        s.set_size(2.5).unwrap();
        s.set_inner_radius_scale(0.8).unwrap();
        let fresh = StarMesh::build(s.params()).unwrap();
        assert_eq!(*s.mesh(), fresh);
    }

    #[test]
    fn rejected_patch_changes_nothing() {
        let mut s = star();
        let params = *s.params();
        let mesh = s.mesh().clone();

        assert!(s.set_size(0.0).is_err());
        assert!(s.set_size(f32::NAN).is_err());
        assert!(s.set_inner_radius_scale(1.5).is_err());
        assert!(s.set_inner_radius_scale(0.0).is_err());
        assert!(s.set_inner_angle_offset(f32::INFINITY).is_err());

        assert_eq!(*s.params(), params);
        assert_eq!(*s.mesh(), mesh);
        assert!(s.renderable().calls.is_empty());
    }

    #[test]
    fn out_of_range_offset_is_clamped() {
        let mut s = star();
        s.set_inner_angle_offset(1.5).unwrap();
        assert_eq!(s.params().inner_angle_offset, 1.0);
        assert_eq!(s.mesh().vertex_count(), 11);

        s.set_inner_angle_offset(-0.25).unwrap();
        assert_eq!(s.params().inner_angle_offset, 0.0);
        assert_eq!(s.renderable().calls.len(), 2);
    }

    #[test]
    fn new_clamps_offset() {
        let params = StarParameters { inner_angle_offset: 1.5, ..*star().params() };
        let s = Star::new(params, Recorder::default()).unwrap();
        assert_eq!(s.params().inner_angle_offset, 1.0);
    }

    // ── material / transform ──────────────────────────────────────────────

    #[test]
    fn material_and_transform_leave_geometry_alone() {
        let mut s = star();
        let mesh = s.mesh().clone();

        s.set_wireframe_mode(false);
        s.set_color(Rgb::from_hex(0xff0000)).unwrap();
        s.set_position([1.0, 2.0, 3.0]).unwrap();
        s.set_rotation(0.75).unwrap();

        assert_eq!(*s.mesh(), mesh);
        assert_eq!(
            s.renderable().calls,
            vec![
                Call::Wireframe(false),
                Call::Color(Rgb::new(1.0, 0.0, 0.0)),
                Call::Position([1.0, 2.0, 3.0]),
                Call::Rotation(0.75),
            ]
        );
        assert!(!s.params().wireframe);
        assert_eq!(s.params().position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn invalid_color_and_position_rejected() {
        let mut s = star();
        assert_eq!(s.set_color(Rgb::new(2.0, 0.0, 0.0)).unwrap_err().parameter(), "color");
        assert_eq!(s.set_position([f32::NAN, 0.0, 0.0]).unwrap_err().parameter(), "position");
        assert_eq!(s.set_rotation(f32::INFINITY).unwrap_err().parameter(), "rotation");
        assert!(s.renderable().calls.is_empty());
    }

    // ── panel dispatch ────────────────────────────────────────────────────

    #[test]
    fn apply_routes_each_field() {
        let mut s = star();
        s.apply(ParamValue::PointCount(6)).unwrap();
        s.apply(ParamValue::Size(3.0)).unwrap();
        s.apply(ParamValue::Wireframe(false)).unwrap();

        assert_eq!(s.params().get(ParamField::PointCount), ParamValue::PointCount(6));
        assert_eq!(s.params().get(ParamField::Size), ParamValue::Size(3.0));
        assert_eq!(s.params().get(ParamField::Wireframe), ParamValue::Wireframe(false));
        assert_eq!(
            s.renderable().calls,
            vec![
                Call::Replace { vertices: 13, triangles: 12 },
                Call::Patch { vertices: 13 },
                Call::Wireframe(false),
            ]
        );
    }

    #[test]
    fn apply_propagates_rejection() {
        let mut s = star();
        let err = s.apply(ParamValue::PointCount(0)).unwrap_err();
        assert_eq!(err.parameter(), "pointCount");
    }

    #[test]
    fn into_renderable_hands_back_object() {
        let s = star();
        let r = s.into_renderable();
        assert_eq!(r.positions.len(), 11);
    }
}
