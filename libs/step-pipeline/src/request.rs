//! # Load Requests
//!
//! One load request from one of the two origins. The document text arrives
//! asynchronously (a file read or a network fetch); the request carries the
//! pending future plus the metadata threaded through the pipeline, and is
//! consumed exactly once by the coordinator.

use config::constants::{STATUS_DOWNLOADING, STATUS_UPLOADING};
use step_scene::Axis;

use crate::catalog::CatalogEntry;

/// Which of the two request sources produced a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// A user-chosen local file.
    Upload,
    /// A fetched catalog entry.
    Catalog,
}

impl LoadOrigin {
    /// Status text shown while the document payload is being acquired.
    pub(crate) fn acquire_message(self) -> &'static str {
        match self {
            LoadOrigin::Upload => STATUS_UPLOADING,
            LoadOrigin::Catalog => STATUS_DOWNLOADING,
        }
    }
}

/// One load request, consumed exactly once.
///
/// `F` resolves to the raw document text or the acquisition failure. The
/// pending axis is applied once after the mesh is inserted, then discarded;
/// it is never carried over to the next load.
#[derive(Debug)]
pub struct LoadRequest<F> {
    pub(crate) origin: LoadOrigin,
    pub(crate) document: F,
    pub(crate) pending_axis: Option<Axis>,
    pub(crate) source_ref: Option<String>,
}

impl<F> LoadRequest<F> {
    /// A request from the upload source. Uploads carry no axis hint and no
    /// source reference.
    pub fn upload(document: F) -> Self {
        Self {
            origin: LoadOrigin::Upload,
            document,
            pending_axis: None,
            source_ref: None,
        }
    }

    /// A request from the catalog source, taking the entry's axis hint and
    /// display-only source reference.
    pub fn catalog(document: F, entry: &CatalogEntry) -> Self {
        Self {
            origin: LoadOrigin::Catalog,
            document,
            pending_axis: entry.up_axis,
            source_ref: Some(entry.source_url.clone()),
        }
    }

    /// Returns the request's origin.
    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    /// Returns the axis to apply after the load, if any.
    pub fn pending_axis(&self) -> Option<Axis> {
        self.pending_axis
    }
}
