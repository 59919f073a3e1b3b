//! # Client Check Service
//!
//! Application service layer that implements the `ClientCheckApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`ClientCheckApi`)
//! - Uses the outbound ports (`BuildDirectory`, `TokenQueue`, `Clock`)
//! - Delegates token decoding and MAC computation to the domain layer
//!
//! The check pipeline is decode -> build lookup -> MAC -> freshness. It
//! stops on the first failure; the soft/hard policy then decides whether
//! that failure degrades to a token-less result or is returned to the
//! caller.

use crate::config::ClientCheckConfig;
use crate::domain::entities::{QueuedToken, TokenCheckResult};
use crate::domain::errors::TokenError;
use crate::domain::{mac, token};
use crate::ports::inbound::ClientCheckApi;
use crate::ports::outbound::{BuildDirectory, Clock, TokenQueue};
use tracing::{debug, warn};

/// Maximum allowed difference between server time and the client-reported
/// timestamp, in seconds. Boundary inclusive: a skew of exactly this value
/// is still accepted.
pub const MAX_SKEW_SECS: u64 = 15 * 60;

/// Client check service.
///
/// Stateless per call: each invocation owns its decoded token and writes
/// into a fresh result, sharing only the immutable configuration snapshot.
/// Safe to call concurrently from any number of tasks.
pub struct ClientCheckService<D: BuildDirectory, Q: TokenQueue, C: Clock> {
    config: ClientCheckConfig,
    directory: D,
    queue: Q,
    clock: C,
}

impl<D: BuildDirectory, Q: TokenQueue, C: Clock> ClientCheckService<D, Q, C> {
    /// Create a new client check service.
    ///
    /// # Arguments
    /// * `config` - Immutable configuration snapshot
    /// * `directory` - Build lookup gateway
    /// * `queue` - Work queue gateway for verified tokens
    /// * `clock` - Time source for the freshness check
    pub fn new(config: ClientCheckConfig, directory: D, queue: Q, clock: C) -> Self {
        Self {
            config,
            directory,
            queue,
            clock,
        }
    }

    /// Run the check pipeline, recording progress into `result`.
    ///
    /// `result.build_id` is updated as soon as a candidate build is matched,
    /// BEFORE the MAC and freshness checks. A later failure leaves that id
    /// in place; diagnostics downstream rely on seeing which build the
    /// token claimed. `result.token` is only set on full success.
    async fn verify_into(
        &self,
        raw: Option<&str>,
        result: &mut TokenCheckResult,
    ) -> Result<(), TokenError> {
        let raw = raw.ok_or(TokenError::MissingToken)?;

        let input = token::split_token(raw)?;

        let build = match self.directory.find_rankable_by_hash(&input.client_hash).await {
            Ok(Some(build)) => build,
            Ok(None) => return Err(TokenError::UnknownBuild),
            Err(err) => {
                // Storage failures must not leak their own error type.
                warn!(error = %err, "build directory lookup failed");
                return Err(TokenError::UnknownBuild);
            }
        };

        result.build_id = build.id;

        let key = self.config.token_keys.key_for(&build.platform);
        if !mac::verify_mac(key, &input.client_data, &input.expected_mac) {
            return Err(TokenError::SignatureMismatch);
        }

        let now = self.clock.now_epoch();
        let skew = (now as i64 - i64::from(input.client_time)).unsigned_abs();
        if skew > MAX_SKEW_SECS {
            return Err(TokenError::ExpiredToken);
        }

        result.token = Some(raw.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl<D: BuildDirectory, Q: TokenQueue, C: Clock> ClientCheckApi for ClientCheckService<D, Q, C> {
    async fn check_token(&self, raw: Option<&str>) -> Result<TokenCheckResult, TokenError> {
        let mut result = TokenCheckResult::pending(self.config.default_build_id);

        match self.verify_into(raw, &mut result).await {
            Ok(()) => {
                debug!(build_id = result.build_id, "client token verified");
                Ok(result)
            }
            Err(err) if self.config.check_version => Err(err),
            Err(err) => {
                debug!(kind = ?err, build_id = result.build_id, "client token rejected");
                Ok(result)
            }
        }
    }

    async fn queue_token(&self, result: &TokenCheckResult, id: u64) {
        let Some(token) = &result.token else {
            return;
        };

        let payload = QueuedToken {
            id,
            token: token.clone(),
        };

        if let Err(err) = self.queue.push(&self.config.token_queue, payload).await {
            // Fire-and-forget: a lost record is a diagnostics gap, not a
            // request failure.
            warn!(error = %err, queue = %self.config.token_queue, "token forwarding failed");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
