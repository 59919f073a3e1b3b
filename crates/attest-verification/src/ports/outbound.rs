//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this subsystem needs: the build
//! directory, the token work queue, and the clock.

use crate::domain::entities::{BuildRecord, QueuedToken, CLIENT_HASH_LEN};
use thiserror::Error;

// =============================================================================
// BUILD DIRECTORY
// =============================================================================

/// Error from build directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The backing store could not be reached or timed out.
    #[error("build directory unavailable: {0}")]
    Unavailable(String),
}

/// Keyed lookup over ranking-eligible client builds.
///
/// This is the only blocking step of a token check; the service treats any
/// `Err` as equivalent to "no build found" so that storage-specific failure
/// types never leak to callers.
#[async_trait::async_trait]
pub trait BuildDirectory: Send + Sync {
    /// Find the ranking-eligible build with the given content hash.
    ///
    /// Returns `Ok(None)` when no eligible build matches. Builds that exist
    /// but are not ranking-eligible must not be returned.
    async fn find_rankable_by_hash(
        &self,
        hash: &[u8; CLIENT_HASH_LEN],
    ) -> Result<Option<BuildRecord>, DirectoryError>;
}

// =============================================================================
// TOKEN QUEUE
// =============================================================================

/// Error from queue operations.
#[derive(Debug, Error)]
pub enum QueueError {
    /// The queue no longer accepts records.
    #[error("queue is closed")]
    Closed,

    /// The payload could not be encoded.
    #[error("payload encoding failed: {0}")]
    Encoding(String),
}

/// Append-only work queue for verified tokens.
///
/// One-way enqueue with no acknowledgment awaited; ordering between
/// concurrently pushed records is not guaranteed and not required, since
/// each record carries its own id.
#[async_trait::async_trait]
pub trait TokenQueue: Send + Sync {
    /// Push one record onto the named queue.
    async fn push(&self, queue: &str, payload: QueuedToken) -> Result<(), QueueError>;
}

// =============================================================================
// CLOCK
// =============================================================================

/// Source of the current Unix time, injected for deterministic tests.
pub trait Clock: Send + Sync {
    /// Current time as seconds since the Unix epoch.
    fn now_epoch(&self) -> u64;
}
