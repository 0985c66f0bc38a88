//! # Step Scene
//!
//! Ownership of the single displayed mesh. The viewer shows at most one
//! model at a time; [`SceneObjectSlot`] makes that an owned handle rather
//! than a name looked up in the host scene graph.
//!
//! ## Architecture
//!
//! ```text
//! step-codec (VertexAttributes) → SceneObjectSlot → SceneBackend (host scene)
//! ```
//!
//! The [`SceneBackend`] trait is the seam to the rendering host; the wasm
//! boundary crate implements it over JavaScript callbacks, tests implement
//! it with an in-memory recorder.

pub mod axis;
pub mod backend;
pub mod slot;

pub use axis::Axis;
pub use backend::SceneBackend;
pub use slot::SceneObjectSlot;
