//! GPU rendering.
//!
//! Each renderer owns its pipelines and buffers and creates them lazily on
//! first use (and again if the surface format changes).
//!
//! - `MeshRenderer` draws a [`MeshObject`] in world space through a [`Camera`]
//! - `OverlayRenderer` draws a `scene::DrawList` in logical pixels

mod camera;
mod common;
mod ctx;
mod mesh_object;
mod mesh_renderer;
mod overlay;

pub use camera::Camera;
pub use ctx::{RenderCtx, RenderTarget};
pub use mesh_object::{Material, MeshObject, Transform};
pub use mesh_renderer::MeshRenderer;
pub use overlay::OverlayRenderer;
