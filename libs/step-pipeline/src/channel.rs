//! # Compute Channel
//!
//! The asynchronous boundary to the background triangulation worker: one
//! document payload out, one binary buffer (or failure) back. The channel
//! holds a single pending slot; it does not queue, retry, time out, or
//! cancel. Dropping a [`PendingBuffer`] abandons the response but cannot
//! abort the worker.

use futures::channel::oneshot;
use step_codec::MeshBuffer;

use crate::error::ComputeError;

/// Outcome of one worker round-trip.
pub type ComputeResult = Result<MeshBuffer, ComputeError>;

/// A one-shot request/response channel to the triangulation worker.
///
/// Implementations keep at most one submission outstanding and reject an
/// overlapping `submit` with [`ComputeError::Busy`].
pub trait ComputeChannel {
    /// Sends the raw document text to the worker.
    ///
    /// Returns immediately with the pending response slot; the reply is
    /// awaited through [`PendingBuffer::wait`].
    ///
    /// # Errors
    ///
    /// [`ComputeError::Busy`] when a submission is already outstanding, or
    /// an implementation-specific failure to reach the worker.
    fn submit(&mut self, payload: &str) -> Result<PendingBuffer, ComputeError>;
}

/// The response side of one submission.
#[derive(Debug)]
pub struct PendingBuffer {
    receiver: oneshot::Receiver<ComputeResult>,
}

impl PendingBuffer {
    /// Creates a fulfilment pair: the sender side is resolved by the channel
    /// implementation when the worker replies.
    pub fn channel() -> (oneshot::Sender<ComputeResult>, PendingBuffer) {
        let (sender, receiver) = oneshot::channel();
        (sender, PendingBuffer { receiver })
    }

    /// Waits for the worker's reply.
    ///
    /// A dropped sender means the worker side disappeared; that surfaces as
    /// [`ComputeError::ChannelClosed`] rather than hanging.
    pub async fn wait(self) -> ComputeResult {
        match self.receiver.await {
            Ok(result) => result,
            Err(oneshot::Canceled) => Err(ComputeError::ChannelClosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn fulfilled_pending_yields_the_buffer() {
        let (sender, pending) = PendingBuffer::channel();
        sender
            .send(Ok(MeshBuffer::new(vec![0.0; 9])))
            .expect("receiver alive");

        let buffer = block_on(pending.wait()).expect("worker succeeded");
        assert_eq!(buffer.len(), 9);
    }

    #[test]
    fn worker_failure_passes_through() {
        let (sender, pending) = PendingBuffer::channel();
        sender
            .send(Err(ComputeError::failed("bad STEP entity")))
            .expect("receiver alive");

        let err = block_on(pending.wait()).unwrap_err();
        assert_eq!(err, ComputeError::failed("bad STEP entity"));
    }

    #[test]
    fn dropped_sender_is_a_closed_channel() {
        let (sender, pending) = PendingBuffer::channel();
        drop(sender);

        let err = block_on(pending.wait()).unwrap_err();
        assert_eq!(err, ComputeError::ChannelClosed);
    }
}
