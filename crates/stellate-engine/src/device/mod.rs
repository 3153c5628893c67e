//! GPU device + surface management.
//!
//! - creates the wgpu Instance/Adapter/Device/Queue for a window
//! - configures the surface and keeps it in sync with the window size
//! - hands out per-frame encoders and views

mod config;
mod gpu;
mod surface;

pub use config::GpuInit;
pub use gpu::{Gpu, GpuFrame};
pub use surface::SurfaceErrorAction;
