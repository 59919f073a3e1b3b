//! # Token Flow Integration Tests
//!
//! Drives `attest-verification` the way a request handler would: build a
//! token the client way, check it, then forward it to the queue, using only
//! the crate's public surface.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use attest_verification::adapters::clock::FixedClock;
    use attest_verification::adapters::directory::InMemoryBuildDirectory;
    use attest_verification::adapters::queue::{ChannelTokenQueue, QueuedRecord};
    use attest_verification::{
        compute_mac, BuildRecord, ClientCheckApi, ClientCheckConfig, ClientCheckService,
        QueuedToken, TokenError, TokenKeyring, CLIENT_HASH_LEN,
    };
    use tokio::sync::mpsc;

    const NOW: u64 = 1_700_000_000;
    const WINDOWS_KEY: &[u8] = b"windows shared secret";
    const DEFAULT_KEY: &[u8] = b"default shared secret";

    const WINDOWS_HASH: [u8; CLIENT_HASH_LEN] = [0xA1; CLIENT_HASH_LEN];
    const MACOS_HASH: [u8; CLIENT_HASH_LEN] = [0xB2; CLIENT_HASH_LEN];
    const DELISTED_HASH: [u8; CLIENT_HASH_LEN] = [0xC3; CLIENT_HASH_LEN];

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Construct a token exactly as a client does.
    fn make_token(hash: &[u8; CLIENT_HASH_LEN], time: u32, key: &[u8]) -> String {
        let mut data = hex::encode(hash);
        data.push_str(&hex::encode(time.to_le_bytes()));
        let digest = compute_mac(key, data.as_bytes());
        data.push_str(&hex::encode(digest));
        data.push_str("01");
        data
    }

    /// Directory with one build per platform plus a delisted one.
    fn seeded_directory() -> InMemoryBuildDirectory {
        let directory = InMemoryBuildDirectory::new();
        directory.insert(
            BuildRecord {
                id: 10,
                hash: WINDOWS_HASH,
                platform: "windows".to_string(),
            },
            true,
        );
        directory.insert(
            BuildRecord {
                id: 20,
                hash: MACOS_HASH,
                platform: "macos".to_string(),
            },
            true,
        );
        // Exists but ranking-disabled: must behave like it does not exist
        directory.insert(
            BuildRecord {
                id: 30,
                hash: DELISTED_HASH,
                platform: "windows".to_string(),
            },
            false,
        );
        directory
    }

    fn service(
        check_version: bool,
    ) -> (
        ClientCheckService<InMemoryBuildDirectory, ChannelTokenQueue, FixedClock>,
        mpsc::UnboundedReceiver<QueuedRecord>,
    ) {
        let (queue, receiver) = ChannelTokenQueue::new();
        let config = ClientCheckConfig {
            check_version,
            default_build_id: 1,
            // "windows" has its own key; "macos" falls back to "default"
            token_keys: TokenKeyring::new()
                .with_key("default", DEFAULT_KEY)
                .with_key("windows", WINDOWS_KEY),
            token_queue: "score-tokens".to_string(),
        };
        (
            ClientCheckService::new(config, seeded_directory(), queue, FixedClock(NOW)),
            receiver,
        )
    }

    // =========================================================================
    // Key selection across platforms
    // =========================================================================

    /// Platform with a dedicated keyring entry verifies against that key only.
    #[tokio::test]
    async fn test_platform_key_selected_for_windows_build() {
        let (service, _rx) = service(false);

        let good = make_token(&WINDOWS_HASH, NOW as u32, WINDOWS_KEY);
        let result = service.check_token(Some(&good)).await.unwrap();
        assert_eq!(result.build_id, 10);
        assert!(result.token.is_some());

        // Signed with the default key instead: must reject
        let bad = make_token(&WINDOWS_HASH, NOW as u32, DEFAULT_KEY);
        let result = service.check_token(Some(&bad)).await.unwrap();
        assert!(result.token.is_none());
        assert_eq!(result.build_id, 10);
    }

    /// Platform without its own entry resolves to the "default" key.
    #[tokio::test]
    async fn test_default_key_fallback_for_macos_build() {
        let (service, _rx) = service(false);

        let raw = make_token(&MACOS_HASH, NOW as u32, DEFAULT_KEY);
        let result = service.check_token(Some(&raw)).await.unwrap();

        assert_eq!(result.build_id, 20);
        assert_eq!(result.token.as_deref(), Some(raw.as_str()));
    }

    /// A ranking-disabled build is indistinguishable from an absent one.
    #[tokio::test]
    async fn test_delisted_build_rejects_as_unknown() {
        let (service, _rx) = service(true);

        let raw = make_token(&DELISTED_HASH, NOW as u32, WINDOWS_KEY);
        let err = service.check_token(Some(&raw)).await.unwrap_err();

        assert_eq!(err, TokenError::UnknownBuild);
    }

    // =========================================================================
    // Check-then-forward flow
    // =========================================================================

    /// The full request-handler sequence: check, then queue per submission.
    #[tokio::test]
    async fn test_check_then_queue_flow() {
        let (service, mut receiver) = service(false);

        for submission_id in [501u64, 502, 503] {
            let raw = make_token(&WINDOWS_HASH, NOW as u32, WINDOWS_KEY);
            let result = service.check_token(Some(&raw)).await.unwrap();
            service.queue_token(&result, submission_id).await;

            let record = receiver.recv().await.unwrap();
            assert_eq!(record.queue, "score-tokens");
            let decoded: QueuedToken = serde_json::from_str(&record.payload).unwrap();
            assert_eq!(decoded.id, submission_id);
            assert_eq!(decoded.token, raw);
        }

        // Rejected submissions contribute nothing to the queue
        let rejected = service.check_token(Some("garbage")).await.unwrap();
        service.queue_token(&rejected, 504).await;
        assert!(receiver.try_recv().is_err());
    }

    /// Concurrent checks share the service with no coordination.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_checks_are_independent() {
        let (service, _rx) = service(false);
        let service = Arc::new(service);

        let handles: Vec<_> = (0..32u64)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    if i % 2 == 0 {
                        let raw = make_token(&WINDOWS_HASH, NOW as u32, WINDOWS_KEY);
                        let result = service.check_token(Some(&raw)).await.unwrap();
                        assert_eq!(result.build_id, 10);
                        assert!(result.token.is_some());
                    } else {
                        let result = service.check_token(Some("junk")).await.unwrap();
                        assert_eq!(result.build_id, 1);
                        assert!(result.token.is_none());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }
    }

    // =========================================================================
    // Robustness
    // =========================================================================

    /// Arbitrary header garbage never panics and never verifies.
    #[tokio::test]
    async fn test_random_inputs_soft_reject() {
        use rand::distributions::{Alphanumeric, DistString};
        use rand::Rng;

        let (service, _rx) = service(false);
        let mut rng = rand::thread_rng();

        for _ in 0..64 {
            let len = rng.gen_range(0..200);
            let raw = Alphanumeric.sample_string(&mut rng, len);

            let result = service.check_token(Some(&raw)).await.unwrap();
            assert!(result.token.is_none());
            assert_eq!(result.build_id, 1);
        }
    }

    /// Hard mode surfaces the reason string a handler would send back.
    #[tokio::test]
    async fn test_hard_mode_reason_strings() {
        let (service, _rx) = service(true);

        let stale = make_token(&WINDOWS_HASH, (NOW - 10_000) as u32, WINDOWS_KEY);
        let err = service.check_token(Some(&stale)).await.unwrap_err();

        assert_eq!(err, TokenError::ExpiredToken);
        assert_eq!(err.to_string(), "expired token");
    }
}
