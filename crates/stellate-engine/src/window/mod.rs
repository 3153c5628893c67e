//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single studio window, and wires them
//! to the GPU layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
