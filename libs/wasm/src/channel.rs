//! # Worker Channel
//!
//! The browser implementation of [`ComputeChannel`]: one persistent
//! `web_sys::Worker` created at startup, a single pending oneshot slot, and
//! message handlers that fulfil it. The worker script is opaque; the
//! protocol is document text out, one `Float32Array` (or an error event)
//! back.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, MessageEvent, Worker};

use step_codec::MeshBuffer;
use step_pipeline::{ComputeChannel, ComputeError, ComputeResult, PendingBuffer};

type PendingSlot = Rc<RefCell<Option<oneshot::Sender<ComputeResult>>>>;

/// One long-lived triangulation worker behind a single pending slot.
pub struct WorkerChannel {
    worker: Worker,
    pending: PendingSlot,
    // Handlers stay owned here so the JS side keeps valid callbacks for the
    // worker's whole lifetime.
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(ErrorEvent)>,
}

impl WorkerChannel {
    /// Spawns the worker from `script_url` and wires its handlers.
    pub fn new(script_url: &str) -> Result<Self, JsValue> {
        let worker = Worker::new(script_url)?;
        let pending: PendingSlot = Rc::new(RefCell::new(None));

        let onmessage = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move |event: MessageEvent| {
                let Some(sender) = pending.borrow_mut().take() else {
                    warn!("worker reply arrived with no request outstanding");
                    return;
                };
                let result = match event.data().dyn_into::<js_sys::Float32Array>() {
                    Ok(array) => Ok(MeshBuffer::new(array.to_vec())),
                    Err(_) => Err(ComputeError::failed("worker returned a non-buffer payload")),
                };
                let _ = sender.send(result);
            }) as Box<dyn FnMut(MessageEvent)>)
        };
        worker.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let onerror = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move |event: ErrorEvent| {
                if let Some(sender) = pending.borrow_mut().take() {
                    let _ = sender.send(Err(ComputeError::failed(event.message())));
                }
            }) as Box<dyn FnMut(ErrorEvent)>)
        };
        worker.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        Ok(Self {
            worker,
            pending,
            _onmessage: onmessage,
            _onerror: onerror,
        })
    }
}

impl ComputeChannel for WorkerChannel {
    fn submit(&mut self, payload: &str) -> Result<PendingBuffer, ComputeError> {
        let mut slot = self.pending.borrow_mut();
        if slot.is_some() {
            return Err(ComputeError::Busy);
        }

        let (sender, pending) = PendingBuffer::channel();
        self.worker
            .post_message(&JsValue::from_str(payload))
            .map_err(|_| ComputeError::failed("could not post the document to the worker"))?;
        *slot = Some(sender);
        Ok(pending)
    }
}
