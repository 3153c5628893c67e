//! Stellate engine crate.
//!
//! Owns the platform + GPU runtime, and the renderers that display a
//! [`stellate_star::Star`] and the overlay drawn on top of it.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod render;
