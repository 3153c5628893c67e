use crate::coords::Rect;
use crate::paint::Color;

/// Stroke along the inside of a shape's edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Rounded box: covers rects, pills and circles (radius = half the side).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxCmd {
    pub rect: Rect,
    pub corner_radius: f32,
    pub fill: Color,
    pub border: Option<Border>,
}

/// One recorded overlay command.
///
/// New shapes get a variant here plus a matching path in the overlay
/// renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Box(BoxCmd),
}
