//! # Pipeline Coordinator
//!
//! Drives one load request end to end and owns every piece of scene state
//! the load touches: the compute channel, the scene slot, the status line,
//! and the two request-source enable flags.
//!
//! A load holds `&mut self` for its entire lifetime, so overlapping loads
//! are impossible by construction; the source gating that mirrors this in
//! the UI is a courtesy to the user, not the enforcer.

use std::future::Future;

use log::info;

use config::constants::{STATUS_BUILDING_SCENE, STATUS_TRIANGULATING};
use step_codec::decode;
use step_scene::{Axis, SceneBackend, SceneObjectSlot};

use crate::channel::ComputeChannel;
use crate::error::{IoError, LoadError};
use crate::request::{LoadOrigin, LoadRequest};
use crate::status::{format_elapsed, StatusSink, StatusStateMachine};

/// The two request-source enable flags.
///
/// Both are disabled for the full duration of a load and re-enabled on both
/// the success and every failure path.
pub trait SourceGate {
    /// Enables or disables the file-upload control.
    fn set_upload_enabled(&mut self, enabled: bool);

    /// Enables or disables the catalog selector.
    fn set_catalog_enabled(&mut self, enabled: bool);
}

/// Wall-clock source for the elapsed-time display.
///
/// The browser boundary provides a `Date`-backed implementation; native
/// tests substitute a scripted one.
pub trait Clock {
    /// Returns the current wall-clock time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Coordinator phase, exposed for observability.
///
/// `Done` folds straight back into `Idle`; both `Idle` and `Failed` accept
/// the next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Loading(LoadOrigin),
    Decoding,
    Rendering,
    Failed,
}

/// What a successful load produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSummary {
    /// Vertices in the displayed mesh.
    pub vertex_count: usize,
    /// Wall-clock seconds from document-ready to scene replacement.
    pub elapsed_secs: f64,
}

/// Orchestrates the load pipeline over its trait-seamed collaborators.
pub struct PipelineCoordinator<C, B, G, S, K>
where
    C: ComputeChannel,
    B: SceneBackend,
    G: SourceGate,
    S: StatusSink,
    K: Clock,
{
    channel: C,
    slot: SceneObjectSlot<B>,
    sources: G,
    status: StatusStateMachine<S>,
    clock: K,
    state: PipelineState,
}

impl<C, B, G, S, K> PipelineCoordinator<C, B, G, S, K>
where
    C: ComputeChannel,
    B: SceneBackend,
    G: SourceGate,
    S: StatusSink,
    K: Clock,
{
    /// Creates an idle coordinator with an empty scene slot.
    pub fn new(channel: C, backend: B, sources: G, sink: S, clock: K) -> Self {
        Self {
            channel,
            slot: SceneObjectSlot::new(backend),
            sources,
            status: StatusStateMachine::new(sink),
            clock,
            state: PipelineState::Idle,
        }
    }

    /// Returns the current pipeline phase.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Returns the status machine, e.g. for host-side inspection.
    pub fn status(&self) -> &StatusStateMachine<S> {
        &self.status
    }

    /// Returns the scene slot.
    pub fn scene(&self) -> &SceneObjectSlot<B> {
        &self.slot
    }

    /// Observes a camera interaction.
    ///
    /// Only ever clears a shown "Loaded in X sec" line; camera activity
    /// during a load leaves the progress text untouched.
    pub fn camera_changed(&mut self) {
        self.status.camera_changed();
    }

    /// Reorients the displayed mesh along `axis`; a no-op with no mesh.
    ///
    /// This is the manual path (the viewer's axis buttons); a catalog
    /// entry's axis hint travels on the [`LoadRequest`] instead.
    pub fn apply_axis(&mut self, axis: Axis) {
        self.slot.apply_axis(axis);
    }

    /// Runs one load request to completion.
    ///
    /// On success the scene shows the new mesh, the status line shows the
    /// elapsed time, and any axis hint has been applied once. On failure
    /// the previously displayed mesh is untouched, the failure message is
    /// shown, and both request sources are re-enabled so the user can retry.
    ///
    /// # Errors
    ///
    /// Terminal [`LoadError`] for this request; nothing is retried.
    pub async fn load<F>(&mut self, request: LoadRequest<F>) -> Result<LoadSummary, LoadError>
    where
        F: Future<Output = Result<String, IoError>>,
    {
        self.state = PipelineState::Loading(request.origin);
        self.set_sources(false);
        self.status.busy(request.origin.acquire_message());

        match self.run(request).await {
            Ok(summary) => Ok(summary),
            Err(error) => {
                self.state = PipelineState::Failed;
                self.set_sources(true);
                self.status.fail(&error.to_string());
                Err(error)
            }
        }
    }

    async fn run<F>(&mut self, request: LoadRequest<F>) -> Result<LoadSummary, LoadError>
    where
        F: Future<Output = Result<String, IoError>>,
    {
        let LoadRequest {
            origin: _,
            document,
            pending_axis,
            source_ref,
        } = request;

        if let Some(source) = &source_ref {
            info!("loading catalog document (source: {source})");
        }

        let payload = document.await?;
        let started_ms = self.clock.now_ms();

        self.status.busy(STATUS_TRIANGULATING);
        let pending = self.channel.submit(&payload)?;
        let buffer = pending.wait().await?;

        self.state = PipelineState::Decoding;
        self.status.busy(STATUS_BUILDING_SCENE);
        let attributes = decode(&buffer)?;
        let vertex_count = attributes.vertex_count();

        self.state = PipelineState::Rendering;
        self.slot.replace(&attributes);

        // Done folds straight back to Idle; re-enabling the sources is the
        // observable half of that transition.
        self.state = PipelineState::Idle;
        self.set_sources(true);

        let elapsed_secs = (self.clock.now_ms() - started_ms) / 1000.0;
        self.status
            .show_result(format!("Loaded in {} sec", format_elapsed(elapsed_secs)));

        if let Some(axis) = pending_axis {
            self.slot.apply_axis(axis);
        }

        info!("loaded {vertex_count} vertices in {elapsed_secs:.3} s");
        Ok(LoadSummary {
            vertex_count,
            elapsed_secs,
        })
    }

    fn set_sources(&mut self, enabled: bool) {
        self.sources.set_upload_enabled(enabled);
        self.sources.set_catalog_enabled(enabled);
    }
}
