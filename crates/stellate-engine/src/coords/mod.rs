//! Screen-space coordinate types used by the overlay.
//!
//! Logical pixels, origin top-left, +X right, +Y down. World-space (3D)
//! math uses `glam` directly.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
