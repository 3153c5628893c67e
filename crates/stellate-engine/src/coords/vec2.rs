use core::ops::{Add, Mul, Sub};

/// Overlay point or extent, logical pixels, +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Square extent.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Shorter side of an extent; bounds corner radii and border widths.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.x.min(self.y)
    }

    /// Packs an origin and a size into the `[x, y, w, h]` layout the overlay
    /// shader reads.
    #[inline]
    pub fn pack_rect(origin: Vec2, size: Vec2) -> [f32; 4] {
        [origin.x, origin.y, size.x, size.y]
    }
}

/// Pointer positions arrive from the input layer as plain tuples.
impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_side_picks_shorter_axis() {
        assert_eq!(Vec2::new(30.0, 12.0).min_side(), 12.0);
        assert_eq!(Vec2::splat(7.0).min_side(), 7.0);
    }

    #[test]
    fn pack_rect_orders_origin_then_size() {
        let packed = Vec2::pack_rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(packed, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn circle_bounds_from_center() {
        let center = Vec2::from((10.0, 6.0));
        let origin = center - Vec2::splat(2.0);
        assert_eq!(origin, Vec2::new(8.0, 4.0));
        assert_eq!(origin + Vec2::splat(4.0) * 0.5, center);
    }
}
