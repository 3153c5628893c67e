use crate::color::Rgb;
use crate::error::StarError;
use crate::geometry::Point3;
use crate::schema::{ParamField, ParamValue};

/// Fewest tips that still close a star outline.
pub const MIN_POINT_COUNT: u32 = 3;

/// Largest tip count whose vertex count (`2n + 1`) still fits a `u32` index.
pub const MAX_POINT_COUNT: u32 = (u32::MAX - 1) / 2;

/// Full parameter set of a star.
///
/// Only `point_count`, `size`, `inner_radius_scale` and `inner_angle_offset`
/// affect geometry; the rest is material or transform state.
///
/// Omitted fields take their defaults via struct update syntax:
///
/// ```
/// use stellate_star::StarParameters;
///
/// let params = StarParameters { point_count: 5, size: 4.0, ..Default::default() };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarParameters {
    /// Number of outer tips. At least 3.
    pub point_count: u32,
    /// Outer diameter; tips sit at `size / 2` from the center.
    pub size: f32,
    /// Inner-vertex radius as a fraction of `size / 2`, in `(0, 1]`.
    pub inner_radius_scale: f32,
    /// Phase of the inner vertices in units of one tip's angular slice.
    /// Clamped to `[0, 1]` when geometry is built.
    pub inner_angle_offset: f32,
    pub wireframe: bool,
    pub color: Rgb,
    /// World placement.
    pub position: Point3,
    /// Rotation about +Z in radians.
    pub rotation: f32,
}

impl Default for StarParameters {
    fn default() -> Self {
        Self {
            point_count: 4,
            size: 1.0,
            inner_radius_scale: 0.5,
            inner_angle_offset: 0.5,
            wireframe: false,
            color: Rgb::WHITE,
            position: [0.0, 0.0, 0.0],
            rotation: 0.0,
        }
    }
}

impl StarParameters {
    /// Checks every field, reporting the first offending one.
    pub fn validate(&self) -> Result<(), StarError> {
        check_point_count(self.point_count)?;
        check_size(self.size)?;
        check_inner_radius_scale(self.inner_radius_scale)?;
        clamp_inner_angle_offset(self.inner_angle_offset)?;
        check_color(self.color)?;
        check_position(self.position)?;
        check_rotation(self.rotation)
    }

    /// Reads one panel-visible field.
    pub fn get(&self, field: ParamField) -> ParamValue {
        match field {
            ParamField::PointCount => ParamValue::PointCount(self.point_count),
            ParamField::Size => ParamValue::Size(self.size),
            ParamField::InnerAngleOffset => ParamValue::InnerAngleOffset(self.inner_angle_offset),
            ParamField::InnerRadiusScale => ParamValue::InnerRadiusScale(self.inner_radius_scale),
            ParamField::Wireframe => ParamValue::Wireframe(self.wireframe),
            ParamField::Color => ParamValue::Color(self.color),
        }
    }
}

// ── field validation ──────────────────────────────────────────────────────

pub(crate) fn check_point_count(n: u32) -> Result<(), StarError> {
    if n < MIN_POINT_COUNT {
        return Err(StarError::invalid("pointCount", n, "must be at least 3"));
    }
    if n > MAX_POINT_COUNT {
        return Err(StarError::invalid("pointCount", n, "vertex count would overflow u32 indices"));
    }
    Ok(())
}

pub(crate) fn check_size(size: f32) -> Result<(), StarError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(StarError::invalid("size", size, "must be finite and greater than 0"));
    }
    Ok(())
}

pub(crate) fn check_inner_radius_scale(k: f32) -> Result<(), StarError> {
    if !k.is_finite() || k <= 0.0 || k > 1.0 {
        return Err(StarError::invalid("innerRadiusScale", k, "must be in (0, 1]"));
    }
    Ok(())
}

/// Rejects non-finite offsets and clamps the rest into `[0, 1]`.
///
/// Past either end a notch overtakes its neighbouring tip and half the fan
/// flips to clockwise.
pub(crate) fn clamp_inner_angle_offset(o: f32) -> Result<f32, StarError> {
    if !o.is_finite() {
        return Err(StarError::invalid("innerAngleOffset", o, "must be finite"));
    }
    Ok(o.clamp(0.0, 1.0))
}

pub(crate) fn check_color(color: Rgb) -> Result<(), StarError> {
    if !color.is_valid() {
        return Err(StarError::invalid("color", color, "channels must be in [0, 1]"));
    }
    Ok(())
}

pub(crate) fn check_position(p: Point3) -> Result<(), StarError> {
    if !p.iter().all(|c| c.is_finite()) {
        return Err(StarError::invalid("position", format!("{p:?}"), "must be finite"));
    }
    Ok(())
}

pub(crate) fn check_rotation(angle: f32) -> Result<(), StarError> {
    if !angle.is_finite() {
        return Err(StarError::invalid("rotation", angle, "must be finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(StarParameters::default().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_first_bad_field() {
        let params = StarParameters { point_count: 2, size: -1.0, ..Default::default() };
        let err = params.validate().unwrap_err();
        assert_eq!(err.parameter(), "pointCount");
    }

    #[test]
    fn inner_radius_scale_bounds() {
        assert!(check_inner_radius_scale(1.0).is_ok());
        assert!(check_inner_radius_scale(0.01).is_ok());
        assert!(check_inner_radius_scale(0.0).is_err());
        assert!(check_inner_radius_scale(1.01).is_err());
        assert!(check_inner_radius_scale(f32::NAN).is_err());
    }

    #[test]
    fn inner_angle_offset_clamps_into_unit_range() {
        assert_eq!(clamp_inner_angle_offset(0.3), Ok(0.3));
        assert_eq!(clamp_inner_angle_offset(-0.5), Ok(0.0));
        assert_eq!(clamp_inner_angle_offset(1.5), Ok(1.0));
        assert!(clamp_inner_angle_offset(f32::INFINITY).is_err());
        assert!(clamp_inner_angle_offset(f32::NAN).is_err());
    }

    #[test]
    fn size_must_be_positive() {
        assert!(check_size(0.5).is_ok());
        assert!(check_size(0.0).is_err());
        assert!(check_size(f32::NAN).is_err());
    }

    #[test]
    fn point_count_upper_bound_protects_indices() {
        assert!(check_point_count(MAX_POINT_COUNT).is_ok());
        assert!(check_point_count(MAX_POINT_COUNT + 1).is_err());
    }

    #[test]
    fn get_reads_matching_field() {
        let params = StarParameters { size: 4.0, wireframe: true, ..Default::default() };
        assert_eq!(params.get(ParamField::Size), ParamValue::Size(4.0));
        assert_eq!(params.get(ParamField::Wireframe), ParamValue::Wireframe(true));
    }
}
