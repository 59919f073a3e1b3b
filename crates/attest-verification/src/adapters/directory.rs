//! # In-Memory Build Directory
//!
//! Hash-keyed build store implementing the `BuildDirectory` port.

use crate::domain::entities::{BuildRecord, CLIENT_HASH_LEN};
use crate::ports::outbound::{BuildDirectory, DirectoryError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// In-memory implementation of the build directory.
///
/// Only ranking-eligible builds are stored: eligibility is checked at
/// insertion, mirroring the backing store's `allow_ranking` predicate, so
/// lookups never have to re-filter.
#[derive(Debug, Default)]
pub struct InMemoryBuildDirectory {
    /// Map of client hash -> build record.
    builds: RwLock<HashMap<[u8; CLIENT_HASH_LEN], BuildRecord>>,

    /// Total lookups served.
    lookups: AtomicU64,
}

impl InMemoryBuildDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a build.
    ///
    /// Builds with ranking disabled are dropped here so they can never be
    /// returned by a lookup.
    pub fn insert(&self, build: BuildRecord, allow_ranking: bool) {
        if !allow_ranking {
            return;
        }
        let mut builds = match self.builds.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        builds.insert(build.hash, build);
    }

    /// Number of lookups served so far.
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl BuildDirectory for InMemoryBuildDirectory {
    async fn find_rankable_by_hash(
        &self,
        hash: &[u8; CLIENT_HASH_LEN],
    ) -> Result<Option<BuildRecord>, DirectoryError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        let builds = match self.builds.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(builds.get(hash).cloned())
    }
}
