//! Color model shared by the overlay and the mesh renderer.

mod color;

pub use color::{srgb_to_linear, Color};
