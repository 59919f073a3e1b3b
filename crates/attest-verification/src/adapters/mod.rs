//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports. Production
//! deployments substitute their own (database-backed directory, Redis-backed
//! queue); these are the in-process implementations used for single-node
//! operation and tests.

pub mod clock;
pub mod directory;
pub mod queue;
