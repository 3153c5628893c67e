//! Control-panel schema.
//!
//! Describes every independently settable star field with its display name
//! and declared range, so a UI can build controls without knowing anything
//! about star internals. Values flow back through [`ParamValue`] into
//! [`Star::apply`](crate::Star::apply).

use std::fmt;

use crate::color::Rgb;

/// Inclusive numeric range with a step grid anchored at `min`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NumericRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl NumericRange {
    #[inline]
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamps `v` into the range and rounds it onto the step grid.
    ///
    /// UI helper only: setters never snap.
    pub fn snap(self, v: f32) -> f32 {
        let v = v.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return v;
        }
        let steps = ((v - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Maps `v` to `[0, 1]` across the range.
    pub fn normalize(self, v: f32) -> f32 {
        let span = self.max - self.min;
        if span.abs() < f32::EPSILON {
            0.0
        } else {
            ((v - self.min) / span).clamp(0.0, 1.0)
        }
    }

    /// Inverse of [`normalize`](Self::normalize).
    pub fn denormalize(self, t: f32) -> f32 {
        self.min + t.clamp(0.0, 1.0) * (self.max - self.min)
    }
}

/// Control type a field needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FieldKind {
    Integer(NumericRange),
    Real(NumericRange),
    Toggle,
    Color,
}

/// Every star field a control panel can edit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParamField {
    PointCount,
    Size,
    InnerAngleOffset,
    InnerRadiusScale,
    Wireframe,
    Color,
}

impl ParamField {
    /// All fields, in panel order.
    pub const ALL: [ParamField; 6] = [
        ParamField::Wireframe,
        ParamField::PointCount,
        ParamField::Size,
        ParamField::InnerAngleOffset,
        ParamField::InnerRadiusScale,
        ParamField::Color,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ParamField::PointCount => "pointCount",
            ParamField::Size => "size",
            ParamField::InnerAngleOffset => "innerAngleOffset",
            ParamField::InnerRadiusScale => "innerRadiusScale",
            ParamField::Wireframe => "wireframe",
            ParamField::Color => "color",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            ParamField::PointCount => FieldKind::Integer(NumericRange::new(3.0, 100.0, 1.0)),
            ParamField::Size => FieldKind::Real(NumericRange::new(0.5, 10.0, 0.1)),
            ParamField::InnerAngleOffset => FieldKind::Real(NumericRange::new(0.0, 1.0, 0.1)),
            ParamField::InnerRadiusScale => FieldKind::Real(NumericRange::new(0.1, 1.0, 0.1)),
            ParamField::Wireframe => FieldKind::Toggle,
            ParamField::Color => FieldKind::Color,
        }
    }

    /// Declared range for numeric fields.
    pub const fn range(self) -> Option<NumericRange> {
        match self.kind() {
            FieldKind::Integer(r) | FieldKind::Real(r) => Some(r),
            FieldKind::Toggle | FieldKind::Color => None,
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A new value for exactly one field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParamValue {
    PointCount(u32),
    Size(f32),
    InnerAngleOffset(f32),
    InnerRadiusScale(f32),
    Wireframe(bool),
    Color(Rgb),
}

impl ParamValue {
    pub const fn field(&self) -> ParamField {
        match self {
            ParamValue::PointCount(_) => ParamField::PointCount,
            ParamValue::Size(_) => ParamField::Size,
            ParamValue::InnerAngleOffset(_) => ParamField::InnerAngleOffset,
            ParamValue::InnerRadiusScale(_) => ParamField::InnerRadiusScale,
            ParamValue::Wireframe(_) => ParamField::Wireframe,
            ParamValue::Color(_) => ParamField::Color,
        }
    }

    /// Builds a value for a numeric field from a slider reading.
    ///
    /// Integer fields round to the nearest whole number. Returns `None` for
    /// toggle and color fields.
    pub fn from_numeric(field: ParamField, v: f32) -> Option<ParamValue> {
        match field {
            ParamField::PointCount => Some(ParamValue::PointCount(v.round().max(0.0) as u32)),
            ParamField::Size => Some(ParamValue::Size(v)),
            ParamField::InnerAngleOffset => Some(ParamValue::InnerAngleOffset(v)),
            ParamField::InnerRadiusScale => Some(ParamValue::InnerRadiusScale(v)),
            ParamField::Wireframe | ParamField::Color => None,
        }
    }

    /// Numeric reading for slider display.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            ParamValue::PointCount(n) => Some(n as f32),
            ParamValue::Size(v)
            | ParamValue::InnerAngleOffset(v)
            | ParamValue::InnerRadiusScale(v) => Some(v),
            ParamValue::Wireframe(_) | ParamValue::Color(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::PointCount(n) => write!(f, "{n}"),
            ParamValue::Size(v) | ParamValue::InnerAngleOffset(v) | ParamValue::InnerRadiusScale(v) => {
                write!(f, "{v:.1}")
            }
            ParamValue::Wireframe(b) => write!(f, "{}", if *b { "on" } else { "off" }),
            ParamValue::Color(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── declared ranges ───────────────────────────────────────────────────

    #[test]
    fn numeric_ranges_match_panel_contract() {
        assert_eq!(ParamField::PointCount.range(), Some(NumericRange::new(3.0, 100.0, 1.0)));
        assert_eq!(ParamField::Size.range(), Some(NumericRange::new(0.5, 10.0, 0.1)));
        assert_eq!(ParamField::InnerAngleOffset.range(), Some(NumericRange::new(0.0, 1.0, 0.1)));
        assert_eq!(ParamField::InnerRadiusScale.range(), Some(NumericRange::new(0.1, 1.0, 0.1)));
        assert_eq!(ParamField::Wireframe.range(), None);
        assert_eq!(ParamField::Color.kind(), FieldKind::Color);
    }

    #[test]
    fn all_lists_each_field_once() {
        for field in ParamField::ALL {
            assert_eq!(ParamField::ALL.iter().filter(|f| **f == field).count(), 1);
        }
    }

    // ── snapping ──────────────────────────────────────────────────────────

    #[test]
    fn snap_clamps_and_rounds() {
        let r = NumericRange::new(3.0, 100.0, 1.0);
        assert_eq!(r.snap(2.0), 3.0);
        assert_eq!(r.snap(7.4), 7.0);
        assert_eq!(r.snap(7.6), 8.0);
        assert_eq!(r.snap(250.0), 100.0);
    }

    #[test]
    fn snap_fractional_step() {
        let r = NumericRange::new(0.5, 10.0, 0.1);
        assert!((r.snap(4.04) - 4.0).abs() < 1e-4);
        assert!((r.snap(4.06) - 4.1).abs() < 1e-4);
    }

    #[test]
    fn normalize_and_denormalize_are_inverse() {
        let r = NumericRange::new(0.1, 1.0, 0.1);
        let t = r.normalize(0.55);
        assert!((r.denormalize(t) - 0.55).abs() < 1e-6);
        assert_eq!(r.normalize(-3.0), 0.0);
        assert_eq!(r.normalize(3.0), 1.0);
    }

    // ── values ────────────────────────────────────────────────────────────

    #[test]
    fn from_numeric_rounds_point_count() {
        assert_eq!(
            ParamValue::from_numeric(ParamField::PointCount, 5.6),
            Some(ParamValue::PointCount(6))
        );
        assert_eq!(ParamValue::from_numeric(ParamField::Wireframe, 1.0), None);
    }

    #[test]
    fn value_reports_its_field() {
        assert_eq!(ParamValue::Size(2.0).field(), ParamField::Size);
        assert_eq!(ParamValue::Color(Rgb::WHITE).field(), ParamField::Color);
    }
}
