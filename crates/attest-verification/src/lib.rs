//! # Client Attestation Token Verification
//!
//! Validates the signed, time-bound token a game client attaches to a
//! request to prove it is running an approved, unmodified build, and
//! forwards validated tokens to an external work queue.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure token decoding and MAC logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): In-process implementations of the outbound ports
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Pipeline
//!
//! ```text
//! header value ──→ [Token Decoder] ──→ [Build Directory] ──→ [MAC + Freshness]
//!                                                                    │
//!                                              ┌─────────────────────┴──────┐
//!                                              ↓                            ↓
//!                                        [token valid]               [token invalid]
//!                                              │                            │
//!                                              ↓                            ↓
//!                                        [Token Queue]        soft: token-less result
//!                                                             hard: typed rejection
//! ```
//!
//! ## Security Notes
//!
//! - **Constant-Time MAC Comparison**: digest equality uses `subtle`, so
//!   comparison cost is independent of the first mismatching byte
//! - **Key Hygiene**: signing secrets zeroize on drop and never appear in
//!   `Debug` output or logs

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::{ClientCheckConfig, SigningKey, TokenKeyring, DEFAULT_PLATFORM};
pub use domain::entities::{
    BuildId, BuildRecord, DecodedToken, QueuedToken, TokenCheckResult, CLIENT_DATA_LEN,
    CLIENT_HASH_LEN, MAC_LEN,
};
pub use domain::errors::TokenError;
pub use domain::mac::{compute_mac, macs_equal, verify_mac};
pub use domain::token::{split_token, TOKEN_TAIL_LEN};
pub use ports::inbound::ClientCheckApi;
pub use ports::outbound::{BuildDirectory, Clock, DirectoryError, QueueError, TokenQueue};
pub use service::{ClientCheckService, MAX_SKEW_SECS};
