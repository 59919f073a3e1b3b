//! # Verifier Configuration
//!
//! Immutable configuration snapshot passed to the service at construction.
//! There is no process-wide state: callers build one of these and hand it
//! over; concurrent checks share it read-only.

use crate::domain::entities::BuildId;
use std::collections::HashMap;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Keyring entry every deployment must provide.
pub const DEFAULT_PLATFORM: &str = "default";

const EMPTY_KEY: &[u8] = &[];

// =============================================================================
// SIGNING KEYS
// =============================================================================

/// A shared signing secret that zeroizes on drop.
///
/// # Security
///
/// Key material must not linger in memory after the keyring is dropped and
/// must never appear in `Debug` output or logs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    inner: Vec<u8>,
}

impl SigningKey {
    /// Wrap raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: bytes.into(),
        }
    }

    /// Borrow the secret bytes for MAC computation.
    ///
    /// # Security
    ///
    /// Avoid keeping references to the returned slice. Use immediately.
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the actual secret
        f.write_str("SigningKey(***)")
    }
}

// =============================================================================
// KEYRING
// =============================================================================

/// Mapping of platform name to shared signing secret.
///
/// Resolution order is platform-specific key, then the `"default"` entry,
/// then the empty key. The empty key is a valid (weak) fallback and never an
/// error in itself: a token signed against anything else simply fails the
/// MAC comparison.
#[derive(Clone, Debug, Default)]
pub struct TokenKeyring {
    keys: HashMap<String, SigningKey>,
}

impl TokenKeyring {
    /// Create an empty keyring. Every lookup resolves to the empty key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a platform key.
    #[must_use]
    pub fn with_key(mut self, platform: impl Into<String>, secret: impl Into<Vec<u8>>) -> Self {
        self.keys.insert(platform.into(), SigningKey::new(secret));
        self
    }

    /// Resolve the signing key for a platform.
    pub fn key_for(&self, platform: &str) -> &[u8] {
        self.keys
            .get(platform)
            .or_else(|| self.keys.get(DEFAULT_PLATFORM))
            .map_or(EMPTY_KEY, SigningKey::as_bytes)
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Complete verifier configuration.
#[derive(Clone, Debug)]
pub struct ClientCheckConfig {
    /// Hard-fail policy: when true, any verification failure is returned to
    /// the caller as an error instead of degrading to a token-less result.
    pub check_version: bool,
    /// Fallback build id reported when no build was matched.
    pub default_build_id: BuildId,
    /// Per-platform signing secrets.
    pub token_keys: TokenKeyring,
    /// Destination queue name for verified tokens.
    pub token_queue: String,
}

impl Default for ClientCheckConfig {
    fn default() -> Self {
        Self {
            check_version: false,
            default_build_id: 0,
            token_keys: TokenKeyring::new(),
            token_queue: "client-tokens".to_string(),
        }
    }
}
