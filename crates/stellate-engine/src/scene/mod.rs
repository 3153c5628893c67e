//! Overlay draw stream.
//!
//! Renderer-agnostic 2D commands recorded each frame (the control panel
//! draws through this) and replayed by the overlay renderer in insertion
//! order.

mod cmd;
mod list;

pub use cmd::{Border, BoxCmd, DrawCmd};
pub use list::DrawList;
