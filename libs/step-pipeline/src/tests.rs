//! Coordinator tests over recorded mock collaborators.
//!
//! The mocks implement the pipeline's trait seams: a scripted compute
//! channel, an in-memory scene backend, a gate/sink pair that records every
//! call, and a scripted wall clock.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::ready;
use std::rc::Rc;

use futures::executor::block_on;
use glam::Mat4;
use step_codec::MeshBuffer;
use step_scene::{Axis, SceneBackend};

use super::*;

/// Replies to each submit with the next scripted result.
struct ScriptedChannel {
    script: VecDeque<ComputeResult>,
    payloads: Rc<RefCell<Vec<String>>>,
}

impl ComputeChannel for ScriptedChannel {
    fn submit(&mut self, payload: &str) -> Result<PendingBuffer, ComputeError> {
        self.payloads.borrow_mut().push(payload.to_string());
        let result = self
            .script
            .pop_front()
            .unwrap_or(Err(ComputeError::ChannelClosed));
        let (sender, pending) = PendingBuffer::channel();
        let _ = sender.send(result);
        Ok(pending)
    }
}

#[derive(Default)]
struct RecordingBackend {
    next_handle: u32,
    live: Vec<u32>,
    transforms: Vec<(u32, Mat4)>,
    renders: usize,
}

impl SceneBackend for RecordingBackend {
    type Handle = u32;

    fn insert(&mut self, _attributes: &step_codec::VertexAttributes<'_>) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.live.push(handle);
        handle
    }

    fn remove(&mut self, handle: u32) {
        self.live.retain(|&h| h != handle);
    }

    fn set_transform(&mut self, handle: &u32, transform: Mat4) {
        self.transforms.push((*handle, transform));
    }

    fn request_render(&mut self) {
        self.renders += 1;
    }
}

/// Records every enable/disable call as (`'U'` or `'C'`, flag).
struct RecordingGate {
    log: Rc<RefCell<Vec<(char, bool)>>>,
}

impl SourceGate for RecordingGate {
    fn set_upload_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().push(('U', enabled));
    }

    fn set_catalog_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().push(('C', enabled));
    }
}

#[derive(Default)]
struct RecordingSink {
    texts: Vec<String>,
}

impl StatusSink for RecordingSink {
    fn set_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }
}

/// Pops a scripted timestamp per call; repeats the last one when exhausted.
struct ScriptedClock {
    times: RefCell<VecDeque<f64>>,
    last: RefCell<f64>,
}

impl ScriptedClock {
    fn new(times: &[f64]) -> Self {
        Self {
            times: RefCell::new(times.iter().copied().collect()),
            last: RefCell::new(0.0),
        }
    }
}

impl Clock for ScriptedClock {
    fn now_ms(&self) -> f64 {
        if let Some(t) = self.times.borrow_mut().pop_front() {
            *self.last.borrow_mut() = t;
        }
        *self.last.borrow()
    }
}

type TestCoordinator =
    PipelineCoordinator<ScriptedChannel, RecordingBackend, RecordingGate, RecordingSink, ScriptedClock>;

struct TestRig {
    coordinator: TestCoordinator,
    payloads: Rc<RefCell<Vec<String>>>,
    gate_log: Rc<RefCell<Vec<(char, bool)>>>,
}

fn rig(script: Vec<ComputeResult>, times: &[f64]) -> TestRig {
    let payloads = Rc::new(RefCell::new(Vec::new()));
    let gate_log = Rc::new(RefCell::new(Vec::new()));
    let coordinator = PipelineCoordinator::new(
        ScriptedChannel {
            script: script.into(),
            payloads: payloads.clone(),
        },
        RecordingBackend::default(),
        RecordingGate {
            log: gate_log.clone(),
        },
        RecordingSink::default(),
        ScriptedClock::new(times),
    );
    TestRig {
        coordinator,
        payloads,
        gate_log,
    }
}

fn interleaved(vertices: usize) -> MeshBuffer {
    MeshBuffer::new(vec![0.25; vertices * 9])
}

fn cube_entry() -> CatalogEntry {
    CatalogEntry {
        display_name: "Cube".to_string(),
        resource_url: "cube.step".to_string(),
        source_url: "cube_src.txt".to_string(),
        up_axis: Some(Axis::Z),
    }
}

#[test]
fn upload_load_walks_every_status_milestone() {
    let mut rig = rig(vec![Ok(interleaved(10))], &[1000.0, 2234.5]);

    let summary = block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("ISO-10303-21;".to_string())))),
    )
    .expect("load succeeds");

    assert_eq!(summary.vertex_count, 10);
    assert_eq!(
        rig.coordinator.status().sink().texts,
        vec![
            "",
            "Uploading...",
            "Parsing & triangulating...",
            "Building scene...",
            "Loaded in 1.23 sec",
        ]
    );
    assert_eq!(
        rig.coordinator.status().state(),
        &StatusState::ShowingResult("Loaded in 1.23 sec".to_string())
    );
    assert_eq!(rig.coordinator.state(), PipelineState::Idle);
    assert_eq!(rig.payloads.borrow().as_slice(), ["ISO-10303-21;"]);
    assert_eq!(rig.coordinator.scene().backend().live.len(), 1);
}

#[test]
fn catalog_load_applies_the_entry_axis_exactly_once() {
    let mut rig = rig(vec![Ok(interleaved(8))], &[0.0, 500.0]);
    let entry = cube_entry();

    block_on(
        rig.coordinator
            .load(LoadRequest::catalog(ready(Ok("doc".to_string())), &entry)),
    )
    .expect("load succeeds");

    let backend = rig.coordinator.scene().backend();
    assert_eq!(backend.transforms, vec![(0, Axis::Z.matrix())]);
    assert_eq!(
        rig.coordinator.status().sink().texts[1],
        "Downloading...",
        "catalog loads announce the fetch first"
    );
}

#[test]
fn sources_are_gated_for_the_whole_flight() {
    let mut rig = rig(vec![Ok(interleaved(1))], &[0.0, 1.0]);

    block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("doc".to_string())))),
    )
    .expect("load succeeds");

    assert_eq!(
        rig.gate_log.borrow().as_slice(),
        [('U', false), ('C', false), ('U', true), ('C', true)]
    );
}

#[test]
fn compute_failure_keeps_the_previous_mesh() {
    let mut rig = rig(
        vec![
            Ok(interleaved(3)),
            Err(ComputeError::failed("triangulation panicked")),
            Ok(interleaved(5)),
        ],
        &[0.0],
    );

    block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("first".to_string())))),
    )
    .expect("first load succeeds");

    let err = block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("second".to_string())))),
    )
    .unwrap_err();
    assert_eq!(
        err,
        LoadError::Compute(ComputeError::failed("triangulation panicked"))
    );

    // The first mesh is still the one on display.
    assert_eq!(rig.coordinator.scene().backend().live, vec![0]);
    assert_eq!(rig.coordinator.state(), PipelineState::Failed);
    assert!(rig
        .coordinator
        .status()
        .sink()
        .texts
        .last()
        .unwrap()
        .contains("triangulation panicked"));
    assert_eq!(rig.gate_log.borrow().last(), Some(&('C', true)));

    // Failed accepts the next request; the retry replaces the old mesh.
    block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("third".to_string())))),
    )
    .expect("retry succeeds");
    assert_eq!(rig.coordinator.scene().backend().live, vec![1]);
}

#[test]
fn malformed_buffer_fails_without_touching_the_scene() {
    let mut rig = rig(vec![Ok(MeshBuffer::new(vec![0.0; 10]))], &[0.0]);

    let err = block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("doc".to_string())))),
    )
    .unwrap_err();

    assert!(matches!(err, LoadError::MalformedBuffer(_)));
    assert!(rig.coordinator.scene().backend().live.is_empty());
    assert_eq!(rig.coordinator.state(), PipelineState::Failed);
}

#[test]
fn io_failure_never_reaches_the_worker() {
    let mut rig = rig(vec![Ok(interleaved(1))], &[0.0]);

    let err = block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Err(IoError::network("offline"))))),
    )
    .unwrap_err();

    assert_eq!(err, LoadError::Io(IoError::network("offline")));
    assert!(rig.payloads.borrow().is_empty());
    assert_eq!(rig.gate_log.borrow().last(), Some(&('C', true)));
    assert!(rig
        .coordinator
        .status()
        .sink()
        .texts
        .last()
        .unwrap()
        .contains("offline"));
}

#[test]
fn camera_clears_the_result_line_after_a_load() {
    let mut rig = rig(vec![Ok(interleaved(2))], &[0.0, 100.0]);

    block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("doc".to_string())))),
    )
    .expect("load succeeds");

    rig.coordinator.camera_changed();

    assert_eq!(rig.coordinator.status().state(), &StatusState::Idle);
    assert_eq!(rig.coordinator.status().sink().texts.last().unwrap(), "");
}

#[test]
fn manual_axis_reorients_the_displayed_mesh() {
    let mut rig = rig(vec![Ok(interleaved(2))], &[0.0, 100.0]);

    // Before any load the slot is empty and the call is a no-op.
    rig.coordinator.apply_axis(Axis::X);
    assert!(rig.coordinator.scene().backend().transforms.is_empty());

    block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("doc".to_string())))),
    )
    .expect("load succeeds");

    rig.coordinator.apply_axis(Axis::X);
    assert_eq!(
        rig.coordinator.scene().backend().transforms,
        vec![(0, Axis::X.matrix())]
    );
}

#[test]
fn sub_second_loads_format_with_three_significant_digits() {
    let mut rig = rig(vec![Ok(interleaved(1))], &[0.0, 45.6]);

    block_on(
        rig.coordinator
            .load(LoadRequest::upload(ready(Ok("doc".to_string())))),
    )
    .expect("load succeeds");

    assert_eq!(
        rig.coordinator.status().sink().texts.last().unwrap(),
        "Loaded in 0.0456 sec"
    );
}
