//! # Integration Tests
//!
//! End-to-end flows exercising the verifier through its public API only:
//! decode, build lookup, MAC + freshness, policy, and queue forwarding.

pub mod token_flow;
