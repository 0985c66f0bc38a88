//! WASM-facing entry points for the STEP viewer pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The page constructs one [`Viewer`] with its DOM elements
//! and scene callbacks; every load, camera event, and axis button press
//! flows through it into `step-pipeline`.
//!
//! ```no_run
//! // In JavaScript:
//! // import init, { Viewer, init_log, init_panic_hook } from "step_wasm";
//! // await init();
//! // init_panic_hook();
//! // init_log();
//! // const viewer = new Viewer("worker.js", statusEl, fileEl, selectEl,
//! //                           insertMesh, removeMesh, setTransform, render);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use step_pipeline::{
    parse_catalog, CatalogEntry, Clock, LoadRequest, PipelineCoordinator,
};
use step_scene::Axis;

mod channel;
mod document;
mod dom;
mod scene;

pub use channel::WorkerChannel;
pub use dom::{DomSourceGate, DomStatusSink};
pub use scene::JsScene;

/// Installs a panic hook that forwards Rust panics to the browser console.
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_log() {
    let _ = console_log::init_with_level(log::Level::Info);
}

/// `Date`-backed wall clock for the elapsed-time display.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateClock;

impl Clock for DateClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

type BrowserPipeline =
    PipelineCoordinator<WorkerChannel, JsScene, DomSourceGate, DomStatusSink, DateClock>;

/// The page-facing facade over the load pipeline.
///
/// Holds the coordinator behind a `RefCell`: a load keeps the borrow for
/// its whole flight, so a second request arriving mid-load is rejected at
/// the borrow instead of racing the worker. Camera events during a load are
/// dropped at the same borrow, leaving the progress text untouched.
#[wasm_bindgen]
pub struct Viewer {
    pipeline: Rc<RefCell<BrowserPipeline>>,
    catalog: Rc<RefCell<Vec<CatalogEntry>>>,
}

#[wasm_bindgen]
impl Viewer {
    /// Wires the viewer to its worker script, DOM controls, and scene
    /// callbacks.
    ///
    /// # Errors
    ///
    /// Fails when the worker script cannot be spawned.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        worker_url: &str,
        status_element: web_sys::Element,
        file_input: web_sys::HtmlInputElement,
        catalog_select: web_sys::HtmlSelectElement,
        scene_insert: js_sys::Function,
        scene_remove: js_sys::Function,
        scene_set_transform: js_sys::Function,
        scene_render: js_sys::Function,
    ) -> Result<Viewer, JsValue> {
        let channel = WorkerChannel::new(worker_url)?;
        let scene = JsScene::new(scene_insert, scene_remove, scene_set_transform, scene_render);
        let gate = DomSourceGate::new(file_input, catalog_select);
        let sink = DomStatusSink::new(status_element);

        Ok(Viewer {
            pipeline: Rc::new(RefCell::new(PipelineCoordinator::new(
                channel, scene, gate, sink, DateClock,
            ))),
            catalog: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// Loads a user-chosen local file.
    pub fn load_file(&self, file: web_sys::File) {
        let pipeline = self.pipeline.clone();
        spawn_local(async move {
            let Ok(mut pipeline) = pipeline.try_borrow_mut() else {
                warn!("upload ignored: a load is already in flight");
                return;
            };
            let request = LoadRequest::upload(document::read_file_text(file));
            if let Err(err) = pipeline.load(request).await {
                error!("upload failed: {err}");
            }
        });
    }

    /// Loads the catalog entry at `index` (order of the fetched catalog).
    pub fn load_catalog_entry(&self, index: usize) {
        let Some(entry) = self.catalog.borrow().get(index).cloned() else {
            warn!("no catalog entry at index {index}");
            return;
        };
        let pipeline = self.pipeline.clone();
        spawn_local(async move {
            let Ok(mut pipeline) = pipeline.try_borrow_mut() else {
                warn!("catalog load ignored: a load is already in flight");
                return;
            };
            let fetch = document::fetch_text(entry.resource_url.clone());
            let request = LoadRequest::catalog(fetch, &entry);
            if let Err(err) = pipeline.load(request).await {
                error!("catalog load failed: {err}");
            }
        });
    }

    /// Fetches and parses the example catalog.
    ///
    /// Resolves to the ordered array of display names for populating the
    /// selector.
    pub fn fetch_catalog(&self, url: String) -> js_sys::Promise {
        let catalog = self.catalog.clone();
        future_to_promise(async move {
            let json = document::fetch_text(url)
                .await
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            let entries =
                parse_catalog(&json).map_err(|err| JsValue::from_str(&err.to_string()))?;

            let names = js_sys::Array::new();
            for entry in &entries {
                names.push(&JsValue::from_str(&entry.display_name));
            }
            *catalog.borrow_mut() = entries;
            Ok(names.into())
        })
    }

    /// Returns the number of fetched catalog entries.
    pub fn catalog_len(&self) -> usize {
        self.catalog.borrow().len()
    }

    /// Returns the source-reference URL for a catalog entry, for the
    /// "model source" link next to the selector.
    pub fn entry_source_url(&self, index: usize) -> Option<String> {
        self.catalog
            .borrow()
            .get(index)
            .map(|entry| entry.source_url.clone())
    }

    /// Observes a camera interaction (wired to the orbit controls).
    ///
    /// Clears a shown "Loaded in X sec" line; does nothing during a load.
    pub fn camera_changed(&self) {
        if let Ok(mut pipeline) = self.pipeline.try_borrow_mut() {
            pipeline.camera_changed();
        }
    }

    /// Reorients the displayed model (wired to the axis buttons).
    ///
    /// `letter` is one of `"X"`, `"Y"`, `"Z"`; anything else is ignored
    /// with a warning. A no-op while a load is in flight or with no model.
    pub fn apply_axis(&self, letter: &str) {
        let Some(axis) = Axis::from_letter(letter) else {
            warn!("unknown axis letter {letter:?}");
            return;
        };
        if let Ok(mut pipeline) = self.pipeline.try_borrow_mut() {
            pipeline.apply_axis(axis);
        }
    }
}
