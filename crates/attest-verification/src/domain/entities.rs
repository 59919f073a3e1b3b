//! # Domain Entities
//!
//! Core data structures for client attestation token verification.

use serde::{Deserialize, Serialize};

/// Identifier of a client build record.
pub type BuildId = u64;

/// Length of the raw HMAC message window (bytes of the token tail).
pub const CLIENT_DATA_LEN: usize = 40;

/// Length of the decoded build hash.
pub const CLIENT_HASH_LEN: usize = 16;

/// Length of an HMAC-SHA1 digest.
pub const MAC_LEN: usize = 20;

/// Maximum length of the reserved version field.
pub const VERSION_LEN: usize = 2;

// =============================================================================
// Token Types
// =============================================================================

/// Structural fields extracted from the tail of a raw token.
///
/// Owned by a single verification call; never stored.
///
/// Note the deliberate overlap: `client_hash` is hex-decoded from the same
/// leading window whose raw bytes form `client_data`. The hash is a
/// prefix-derived identifier of the signed payload, so the first 32 tail
/// bytes serve double duty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedToken {
    /// Tail bytes [0, 40): the HMAC message, used verbatim (NOT hex-decoded).
    pub client_data: [u8; CLIENT_DATA_LEN],
    /// Tail bytes [0, 32) hex-decoded: identifies the signing build.
    pub client_hash: [u8; CLIENT_HASH_LEN],
    /// Tail bytes [32, 40) hex-decoded, little-endian: client-reported Unix seconds.
    pub client_time: u32,
    /// Tail bytes [40, 80) hex-decoded: the client-supplied HMAC-SHA1 digest.
    pub expected_mac: [u8; MAC_LEN],
    /// Tail bytes [80, 82) raw, clamped to what exists (0-2 bytes).
    /// Reserved; carries no validation logic.
    pub version: Vec<u8>,
}

// =============================================================================
// Build Types
// =============================================================================

/// A client build record, as surfaced by the build directory.
///
/// The directory only ever returns ranking-eligible builds, so eligibility
/// is a property of the port contract rather than a field here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildRecord {
    /// Primary identifier of the build.
    pub id: BuildId,
    /// Content hash the client embeds in its tokens.
    pub hash: [u8; CLIENT_HASH_LEN],
    /// Platform classifier used to select the signing key.
    pub platform: String,
}

// =============================================================================
// Result Types
// =============================================================================

/// Outcome of a token check.
///
/// `token` is `Some` holding the exact, unmodified input string iff every
/// check passed; its absence is the sole failure signal downstream consumers
/// see. `build_id` carries the matched build's id even when a later check on
/// that build failed (interim-state exposure kept for diagnostics).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenCheckResult {
    /// Matched build id, or the configured default when no build matched.
    pub build_id: BuildId,
    /// The original token string, present only on full success.
    pub token: Option<String>,
}

impl TokenCheckResult {
    /// Create the initial result carrying the configured fallback build id.
    pub fn pending(default_build_id: BuildId) -> Self {
        Self {
            build_id: default_build_id,
            token: None,
        }
    }

    /// Whether every check passed and the token may be forwarded.
    pub fn is_verified(&self) -> bool {
        self.token.is_some()
    }
}

/// Record forwarded to the external work queue for a verified token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedToken {
    /// Externally-known identifier the token is associated with.
    pub id: u64,
    /// The verified token, verbatim.
    pub token: String,
}
