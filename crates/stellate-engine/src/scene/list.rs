use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::{Border, BoxCmd, DrawCmd};

/// Commands recorded for one frame, painted back-to-front in push order.
///
/// `clear()` keeps the allocation, so a list reused every frame stops
/// allocating once warmed up.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    pub fn push_rect(&mut self, rect: Rect, fill: Color) {
        self.push_rounded_rect(rect, 0.0, fill, None);
    }

    /// Records a rounded rect. Empty rects are dropped.
    pub fn push_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Color, border: Option<Border>) {
        if rect.is_empty() {
            return;
        }
        let max_radius = rect.size.min_side() * 0.5;
        self.push(DrawCmd::Box(BoxCmd {
            rect,
            corner_radius: radius.clamp(0.0, max_radius),
            fill,
            border,
        }));
    }

    /// Records a circle. Non-positive radii are dropped.
    pub fn push_circle(&mut self, center: Vec2, radius: f32, fill: Color, border: Option<Border>) {
        if radius <= 0.0 {
            return;
        }
        let rect = Rect { origin: center - Vec2::splat(radius), size: Vec2::splat(radius * 2.0) };
        self.push_rounded_rect(rect, radius, fill, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_becomes_fully_rounded_box() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::new(10.0, 10.0), 4.0, Color::from_hex(0xffffff), None);
        let DrawCmd::Box(b) = &list.items()[0];
        assert_eq!(b.rect, Rect::new(6.0, 6.0, 8.0, 8.0));
        assert_eq!(b.corner_radius, 4.0);
    }

    #[test]
    fn radius_clamped_to_half_short_side() {
        let mut list = DrawList::new();
        list.push_rounded_rect(Rect::new(0.0, 0.0, 100.0, 10.0), 50.0, Color::transparent(), None);
        let DrawCmd::Box(b) = &list.items()[0];
        assert_eq!(b.corner_radius, 5.0);
    }

    #[test]
    fn degenerate_shapes_dropped_and_clear_keeps_nothing() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 0.0, 10.0), Color::transparent());
        list.push_circle(Vec2::zero(), 0.0, Color::transparent(), None);
        assert!(list.is_empty());

        list.push_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::transparent());
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
    }
}
