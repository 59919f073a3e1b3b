//! # Token Errors
//!
//! Failure taxonomy for token verification.
//!
//! Every variant is one verification-failure kind to the caller: in soft
//! mode all of them degrade to a result without a token, in hard mode all of
//! them become a request rejection carrying the `Display` string. The
//! variants stay distinct for diagnostics.

use thiserror::Error;

/// Errors that can occur while checking a client attestation token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// No token header was supplied with the request.
    #[error("missing token header")]
    MissingToken,

    /// The token tail could not be decoded (short input, malformed hex).
    ///
    /// User-facing this is indistinguishable from an unknown build; the
    /// variant exists so logs can tell a garbled token from a wrong hash.
    #[error("invalid client hash")]
    MalformedToken,

    /// No ranking-eligible build matches the token's client hash.
    ///
    /// Build directory I/O failures also land here; the storage error type
    /// must not leak to callers.
    #[error("invalid client hash")]
    UnknownBuild,

    /// The recomputed HMAC does not match the client-supplied digest.
    #[error("invalid verification hash")]
    SignatureMismatch,

    /// The client-reported timestamp is outside the allowed skew window.
    #[error("expired token")]
    ExpiredToken,
}
