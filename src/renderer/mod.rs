//! WebGPU rendering module
//!
//! The match is drawn as a single colored triangle list built on the CPU
//! each frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
