//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::TokenCheckResult;
use crate::domain::errors::TokenError;

/// Primary client-check API.
///
/// This is the entry point a request handler calls once per request.
/// Implementations must be thread-safe (`Send + Sync`); each call operates
/// on independently-owned data and a read-only configuration snapshot, so no
/// caller-side coordination is needed.
#[async_trait::async_trait]
pub trait ClientCheckApi: Send + Sync {
    /// Verify the client token header value, if one was supplied.
    ///
    /// Soft mode (`check_version = false`): always returns `Ok`; on any
    /// failure the result simply carries no token, with `build_id`
    /// reflecting whatever was resolved before the failure.
    ///
    /// Hard mode (`check_version = true`): any failure is returned as the
    /// specific [`TokenError`], and the caller must reject the request
    /// (HTTP-422 class) with the error's reason string.
    async fn check_token(&self, raw: Option<&str>) -> Result<TokenCheckResult, TokenError>;

    /// Forward a verified token to the configured work queue.
    ///
    /// `id` is the externally-known identifier (e.g. a submission id) the
    /// queued record is associated with. A result without a token is a
    /// silent no-op; a queue failure is logged and swallowed. Fire-and-forget.
    async fn queue_token(&self, result: &TokenCheckResult, id: u64);
}
