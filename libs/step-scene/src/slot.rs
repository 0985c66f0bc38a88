//! # Scene Object Slot
//!
//! Owns at most one displayed mesh. Replacement is remove-then-insert
//! followed by a render request, so the host never shows two models or an
//! orphaned old one.

use glam::Mat4;
use step_codec::VertexAttributes;

use crate::axis::Axis;
use crate::backend::SceneBackend;

/// Holder of the single displayed mesh.
///
/// The slot owns the backend handle; callers never touch host identities.
pub struct SceneObjectSlot<B: SceneBackend> {
    backend: B,
    current: Option<B::Handle>,
}

impl<B: SceneBackend> SceneObjectSlot<B> {
    /// Creates an empty slot over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Returns true if a mesh is currently displayed.
    pub fn has_mesh(&self) -> bool {
        self.current.is_some()
    }

    /// Replaces the displayed mesh with one built from `attributes`.
    ///
    /// Atomic from the caller's perspective: the old mesh is removed, the
    /// new one inserted, and a single render is requested.
    pub fn replace(&mut self, attributes: &VertexAttributes<'_>) {
        if let Some(old) = self.current.take() {
            self.backend.remove(old);
        }
        self.current = Some(self.backend.insert(attributes));
        self.backend.request_render();
    }

    /// Assigns the axis permutation matrix to the displayed mesh.
    ///
    /// A no-op when the slot is empty; reorienting nothing is not an error.
    pub fn apply_axis(&mut self, axis: Axis) {
        let Some(handle) = &self.current else {
            return;
        };
        self.backend.set_transform(handle, axis.matrix());
        self.backend.request_render();
    }

    /// Returns the backend, e.g. for host-side inspection.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
