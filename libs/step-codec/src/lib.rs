//! # Step Codec
//!
//! Decoding of the binary mesh wire format produced by the background
//! triangulation worker.
//!
//! ## Wire format
//!
//! The worker returns one flat `f32` buffer. Each vertex occupies nine
//! consecutive floats:
//!
//! ```text
//! [ px py pz | nx ny nz | r g b ] [ px py pz | ... ]
//! ```
//!
//! Stride and offsets are a fixed contract with the worker (see the
//! `config` crate) and are not configurable.
//!
//! ## Usage
//!
//! ```rust
//! use step_codec::{decode, MeshBuffer};
//!
//! let buffer = MeshBuffer::new(vec![0.0; 18]);
//! let attributes = decode(&buffer).unwrap();
//! assert_eq!(attributes.vertex_count(), 2);
//! assert_eq!(attributes.position().len(), attributes.color().len());
//! ```

pub mod error;
pub mod views;

pub use error::MalformedBufferError;
pub use views::{AttributeView, VertexAttributes};

use config::constants::VERTEX_STRIDE;

/// An immutable flat buffer of interleaved vertex floats.
///
/// Produced once per successful worker round-trip and handed to [`decode`].
/// The buffer itself carries no layout validation; `decode` is where the
/// stride invariant is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer {
    data: Vec<f32>,
}

impl MeshBuffer {
    /// Wraps a raw float buffer received from the compute channel.
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Returns the number of floats in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no floats.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw interleaved floats.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl From<Vec<f32>> for MeshBuffer {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

/// Decodes an interleaved buffer into position, normal, and color views.
///
/// Pure and deterministic; the views borrow the buffer without copying.
///
/// # Errors
///
/// Returns [`MalformedBufferError`] when the buffer length is not a
/// multiple of the vertex stride.
///
/// # Example
///
/// ```rust
/// use step_codec::{decode, MeshBuffer};
///
/// let buffer = MeshBuffer::new(vec![1.0; 9]);
/// let attributes = decode(&buffer).unwrap();
/// assert_eq!(attributes.vertex_count(), 1);
///
/// assert!(decode(&MeshBuffer::new(vec![1.0; 10])).is_err());
/// ```
pub fn decode(buffer: &MeshBuffer) -> Result<VertexAttributes<'_>, MalformedBufferError> {
    if buffer.len() % VERTEX_STRIDE != 0 {
        return Err(MalformedBufferError { len: buffer.len() });
    }
    Ok(VertexAttributes::new(buffer.as_slice()))
}
