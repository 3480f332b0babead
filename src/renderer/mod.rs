//! Rendering module
//!
//! Builds a backend-neutral draw list each frame and tessellates it into
//! vertices. Window and GPU ownership stay with the embedding application.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawCommand, Surface, VertexSurface, build_scene};
pub use vertex::Vertex;
