//! Stellate star core.
//!
//! Derives a filled star-polygon mesh (triangle fan around a center vertex)
//! from a handful of parameters, and owns that mesh on behalf of a renderable
//! object supplied by the rendering side.
//!
//! Layout:
//! - `geometry`: pure vertex/index generation
//! - `mesh`: owned buffers with replace / patch update paths
//! - `star`: the entity tying parameters, mesh and renderable together
//! - `schema`: named, range-annotated fields for control panels

mod color;
mod error;
mod params;
mod renderable;
mod star;

pub mod geometry;
pub mod mesh;
pub mod schema;

pub use color::Rgb;
pub use error::StarError;
pub use geometry::{compute_triangles, compute_vertices, Point3, Triangle};
pub use mesh::StarMesh;
pub use params::{StarParameters, MAX_POINT_COUNT, MIN_POINT_COUNT};
pub use renderable::Renderable;
pub use schema::{FieldKind, NumericRange, ParamField, ParamValue};
pub use star::Star;
