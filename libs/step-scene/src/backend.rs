//! # Scene Backend
//!
//! The seam between the slot and the rendering host. The host owns the
//! actual scene graph, camera, and renderer; the slot only ever asks it to
//! insert, remove, retransform, and redraw.

use glam::Mat4;
use step_codec::VertexAttributes;

/// Operations the rendering host exposes to the scene slot.
///
/// `Handle` identifies one inserted mesh within the host. Implementations
/// must treat `insert` → `remove` pairs as balanced: the slot never removes
/// a handle it did not insert, and never uses a handle after removing it.
pub trait SceneBackend {
    /// Host-side identity of an inserted mesh.
    type Handle;

    /// Builds a mesh from the attribute views and adds it to the scene.
    ///
    /// The host is expected to freeze the object's transform on insert;
    /// later reorientation arrives through [`SceneBackend::set_transform`]
    /// as a whole matrix.
    fn insert(&mut self, attributes: &VertexAttributes<'_>) -> Self::Handle;

    /// Removes a previously inserted mesh from the scene.
    fn remove(&mut self, handle: Self::Handle);

    /// Assigns the object's local transform directly.
    fn set_transform(&mut self, handle: &Self::Handle, transform: Mat4);

    /// Asks the host to redraw the viewport.
    fn request_render(&mut self);
}
