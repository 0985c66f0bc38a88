//! # Pipeline Errors
//!
//! Error taxonomy for the load pipeline. All variants are terminal for the
//! current load request: the coordinator never retries, it re-enables the
//! request sources and surfaces the message on the status line.

use step_codec::MalformedBufferError;
use thiserror::Error;

/// Failure to produce a document payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// The chosen local file could not be read as text.
    #[error("could not read file: {0}")]
    Unreadable(String),

    /// The catalog fetch failed before a response arrived.
    #[error("network failure: {0}")]
    Network(String),

    /// The catalog fetch completed with a non-2xx status.
    #[error("server responded with status {0}")]
    BadStatus(u16),

    /// The example catalog did not parse.
    #[error("malformed catalog: {0}")]
    Catalog(String),
}

impl IoError {
    /// Creates an unreadable-file error.
    pub fn unreadable(message: impl Into<String>) -> Self {
        Self::Unreadable(message.into())
    }

    /// Creates a network failure error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed-catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog(message.into())
    }
}

/// Failure of the background computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// A submission is already outstanding on the channel.
    ///
    /// The channel holds a single pending slot; overlap is rejected rather
    /// than queued.
    #[error("a computation is already in flight")]
    Busy,

    /// The worker reported a failure while processing the document.
    #[error("background computation failed: {0}")]
    Failed(String),

    /// The worker went away before responding.
    #[error("background worker closed the channel without responding")]
    ChannelClosed,
}

impl ComputeError {
    /// Creates a worker-reported failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Any terminal failure of one load request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Document acquisition failed.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// The background computation failed.
    #[error("compute error: {0}")]
    Compute(#[from] ComputeError),

    /// The worker's buffer violated the wire contract.
    #[error("decode error: {0}")]
    MalformedBuffer(#[from] MalformedBufferError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_wraps_each_layer() {
        let io: LoadError = IoError::network("offline").into();
        assert!(io.to_string().contains("offline"));

        let compute: LoadError = ComputeError::failed("panic in worker").into();
        assert!(compute.to_string().contains("panic in worker"));

        let decode: LoadError = MalformedBufferError { len: 10 }.into();
        assert!(decode.to_string().contains("10"));
    }

    #[test]
    fn bad_status_names_the_code() {
        assert!(IoError::BadStatus(404).to_string().contains("404"));
    }
}
