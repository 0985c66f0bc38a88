//! # Step Pipeline
//!
//! Orchestration of one document load: accept a request from the upload or
//! catalog source, hand the raw text to the background triangulation worker,
//! decode the binary reply, swap the mesh into the scene slot, and keep the
//! status line honest throughout.
//!
//! ## Architecture
//!
//! ```text
//! LoadRequest ─→ PipelineCoordinator ─→ ComputeChannel ─→ worker
//!                      │                      │
//!                      │               MeshBuffer (9-float stride)
//!                      │                      ↓
//!                      │                 step-codec
//!                      │                      ↓
//!                      ├──────────────→ SceneObjectSlot ─→ render
//!                      └──→ StatusStateMachine ─→ status line
//! ```
//!
//! All collaborators sit behind traits ([`ComputeChannel`], `SceneBackend`,
//! [`SourceGate`], [`StatusSink`], [`Clock`]); the wasm boundary crate
//! provides the browser implementations and tests provide recorders.
//!
//! ## Concurrency model
//!
//! Everything here runs on one cooperative event loop. A load holds
//! `&mut self` on the coordinator for its whole lifetime, so a second load
//! cannot start while one is in flight; the compute channel additionally
//! rejects an overlapping submit with [`error::ComputeError::Busy`]. There
//! is no cancellation and no timeout: a worker that never replies leaves the
//! pipeline in its busy state.

pub mod catalog;
pub mod channel;
pub mod coordinator;
pub mod error;
pub mod request;
pub mod status;

pub use catalog::{parse_catalog, CatalogEntry};
pub use channel::{ComputeChannel, ComputeResult, PendingBuffer};
pub use coordinator::{Clock, LoadSummary, PipelineCoordinator, PipelineState, SourceGate, SystemClock};
pub use error::{ComputeError, IoError, LoadError};
pub use request::{LoadOrigin, LoadRequest};
pub use status::{format_elapsed, StatusSink, StatusState, StatusStateMachine};

#[cfg(test)]
mod tests;
