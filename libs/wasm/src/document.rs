//! # Document Futures
//!
//! The two ways a document payload arrives: a local file read and a network
//! fetch. Both normalize into `Result<String, IoError>` so the coordinator
//! sees one shape.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Response};

use step_pipeline::IoError;

/// Reads a user-chosen file as text.
pub async fn read_file_text(file: File) -> Result<String, IoError> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|_| IoError::unreadable("file read was rejected"))?;
    text.as_string()
        .ok_or_else(|| IoError::unreadable("file did not read as text"))
}

/// Fetches a URL as text, treating a non-2xx status as a failure.
pub async fn fetch_text(url: String) -> Result<String, IoError> {
    let window = web_sys::window().ok_or_else(|| IoError::network("no window object"))?;

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|_| IoError::network(format!("fetch of {url} failed")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| IoError::network("fetch yielded a non-response"))?;

    if !response.ok() {
        return Err(IoError::BadStatus(response.status()));
    }

    let text = JsFuture::from(
        response
            .text()
            .map_err(|_| IoError::network("response body was not readable"))?,
    )
    .await
    .map_err(|_| IoError::network("response body read failed"))?;

    text.as_string()
        .ok_or_else(|| IoError::network("response body was not text"))
}
