//! Quad sink and the connected-texture baking pipeline (CPU-side only).
#![forbid(unsafe_code)]

pub mod build;
pub mod texture;

pub use build::{BuildSink, MaterialId, MeshBuild};
pub use texture::{ConnectedTexture, face_quad};
