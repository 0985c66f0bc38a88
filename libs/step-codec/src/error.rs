//! # Codec Errors
//!
//! Error types for interleaved buffer decoding.

use config::constants::VERTEX_STRIDE;
use thiserror::Error;

/// The worker's buffer does not divide into whole vertex records.
///
/// Terminal for the load request that produced the buffer; the decoder
/// never attempts partial recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed mesh buffer: length {len} is not a multiple of {VERTEX_STRIDE}")]
pub struct MalformedBufferError {
    /// Length of the rejected buffer, in floats.
    pub len: usize,
}
