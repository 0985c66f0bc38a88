//! # JS Scene Backend
//!
//! The rendering host lives in JavaScript (scene graph, camera, renderer);
//! this backend forwards the slot's four operations to callbacks supplied
//! at startup. Mesh data crosses the boundary once, as the raw interleaved
//! `Float32Array`, so the host can address attributes by stride and offset.

use glam::Mat4;
use js_sys::Function;
use log::error;
use wasm_bindgen::JsValue;

use config::constants::MESH_OBJECT_NAME;
use step_codec::VertexAttributes;
use step_scene::SceneBackend;

/// Scene operations implemented by JavaScript callbacks.
///
/// `insert(interleaved, name) -> handle`, `remove(handle)`,
/// `set_transform(handle, matrix)` (column-major 16 floats),
/// `render()`. Handles are opaque JS values owned by the host.
pub struct JsScene {
    insert: Function,
    remove: Function,
    set_transform: Function,
    render: Function,
}

impl JsScene {
    pub fn new(insert: Function, remove: Function, set_transform: Function, render: Function) -> Self {
        Self {
            insert,
            remove,
            set_transform,
            render,
        }
    }
}

impl SceneBackend for JsScene {
    type Handle = JsValue;

    fn insert(&mut self, attributes: &VertexAttributes<'_>) -> JsValue {
        let interleaved = js_sys::Float32Array::from(attributes.interleaved());
        match self.insert.call2(
            &JsValue::NULL,
            &interleaved,
            &JsValue::from_str(MESH_OBJECT_NAME),
        ) {
            Ok(handle) => handle,
            Err(err) => {
                error!("scene insert callback failed: {err:?}");
                JsValue::NULL
            }
        }
    }

    fn remove(&mut self, handle: JsValue) {
        if let Err(err) = self.remove.call1(&JsValue::NULL, &handle) {
            error!("scene remove callback failed: {err:?}");
        }
    }

    fn set_transform(&mut self, handle: &JsValue, transform: Mat4) {
        let matrix = js_sys::Float32Array::from(transform.to_cols_array().as_slice());
        if let Err(err) = self.set_transform.call2(&JsValue::NULL, handle, &matrix) {
            error!("scene transform callback failed: {err:?}");
        }
    }

    fn request_render(&mut self) {
        if let Err(err) = self.render.call0(&JsValue::NULL) {
            error!("scene render callback failed: {err:?}");
        }
    }
}
