//! Declarative, renderer-agnostic scene description.
//!
//! The graph carries primitives, materials, transforms, lights, and a
//! camera — no mesh or pixel data. The renderer collaborator consumes it
//! as-is; tests assert on the structure instead of pixels.

mod compose;
mod graph;

pub use compose::compose;
pub use graph::{
    Camera, Light, Material, Primitive, SceneGraph, SceneNode, Transform, Vec3,
};
