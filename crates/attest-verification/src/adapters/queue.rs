//! # Channel-Backed Token Queue
//!
//! Implements the `TokenQueue` port over a `tokio::sync::mpsc` channel.
//! Suitable for single-process operation; distributed deployments would use
//! a different implementation (e.g., Redis).

use crate::domain::entities::QueuedToken;
use crate::ports::outbound::{QueueError, TokenQueue};
use tokio::sync::mpsc;
use tracing::debug;

/// A record as it lands on the queue: destination name plus the
/// JSON-encoded payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedRecord {
    /// Destination queue name.
    pub queue: String,
    /// JSON encoding of the pushed [`QueuedToken`].
    pub payload: String,
}

/// Token queue backed by an unbounded in-process channel.
///
/// The enqueue never blocks; consumers drain the paired receiver at their
/// own pace.
#[derive(Clone, Debug)]
pub struct ChannelTokenQueue {
    sender: mpsc::UnboundedSender<QueuedRecord>,
}

impl ChannelTokenQueue {
    /// Create a queue and the receiver a consumer drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<QueuedRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait::async_trait]
impl TokenQueue for ChannelTokenQueue {
    async fn push(&self, queue: &str, payload: QueuedToken) -> Result<(), QueueError> {
        let encoded =
            serde_json::to_string(&payload).map_err(|e| QueueError::Encoding(e.to_string()))?;

        debug!(queue, id = payload.id, "enqueueing verified token");

        self.sender
            .send(QueuedRecord {
                queue: queue.to_string(),
                payload: encoded,
            })
            .map_err(|_| QueueError::Closed)
    }
}
