use super::Vec2;

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x && p.x < self.right() && p.y >= self.origin.y && p.y < self.bottom()
    }

    /// Shrinks every side by `by`; never produces a negative size.
    pub fn inset(self, by: f32) -> Rect {
        Rect::new(
            self.origin.x + by,
            self.origin.y + by,
            (self.size.x - 2.0 * by).max(0.0),
            (self.size.y - 2.0 * by).max(0.0),
        )
    }

    /// Splits off a strip of `width` from the left, returning `(left, rest)`.
    pub fn split_left(self, width: f32) -> (Rect, Rect) {
        let w = width.clamp(0.0, self.size.x);
        (
            Rect::new(self.origin.x, self.origin.y, w, self.size.y),
            Rect::new(self.origin.x + w, self.origin.y, self.size.x - w, self.size.y),
        )
    }

    /// Fraction of the way across the rect at `x`, clamped to `[0, 1]`.
    pub fn fraction_x(self, x: f32) -> f32 {
        if self.size.x <= 0.0 {
            0.0
        } else {
            ((x - self.origin.x) / self.size.x).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(9.9, 9.9)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, -0.1)));
    }

    // ── layout helpers ────────────────────────────────────────────────────

    #[test]
    fn inset_never_goes_negative() {
        assert_eq!(r(0.0, 0.0, 10.0, 4.0).inset(1.0), r(1.0, 1.0, 8.0, 2.0));
        assert_eq!(r(0.0, 0.0, 10.0, 4.0).inset(3.0).size.y, 0.0);
    }

    #[test]
    fn split_left_partitions_width() {
        let (a, b) = r(10.0, 0.0, 100.0, 20.0).split_left(30.0);
        assert_eq!(a, r(10.0, 0.0, 30.0, 20.0));
        assert_eq!(b, r(40.0, 0.0, 70.0, 20.0));
    }

    #[test]
    fn fraction_x_clamps() {
        let rect = r(100.0, 0.0, 200.0, 10.0);
        assert_eq!(rect.fraction_x(200.0), 0.5);
        assert_eq!(rect.fraction_x(0.0), 0.0);
        assert_eq!(rect.fraction_x(900.0), 1.0);
        assert_eq!(r(0.0, 0.0, 0.0, 1.0).fraction_x(5.0), 0.0);
    }

    #[test]
    fn center_and_empty() {
        assert_eq!(r(0.0, 0.0, 10.0, 20.0).center(), Vec2::new(5.0, 10.0));
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
    }
}
