//! # Client-Attest Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end token flows over the public API
//!     └── token_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p attest-tests
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
