//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 合约快照测试（线格式字段名）
//! - 限流端到端场景（窗口释放、FIFO、失败隔离）

#[cfg(test)]
mod contract_tests {
    use contracts::ThrottleConfig;

    #[test]
    fn test_contracts_compile() {
        // 验证 contracts crate 可编译
        let _ = ThrottleConfig::default();
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use chrono::NaiveDate;
    use contracts::{Description, Document, Product, RegistryError, ThrottleConfig, Transport};
    use throttler::RegistrarClient;
    use tokio::time::sleep;

    /// Recording transport shared by the e2e scenarios
    struct RecordingTransport {
        attempts: AtomicU64,
        calls: Mutex<Vec<(String, String)>>,
        payloads: Mutex<Vec<Vec<u8>>>,
        fail_ids: Vec<String>,
        hang: bool,
        delay: Option<Duration>,
    }

    impl RecordingTransport {
        fn base() -> Self {
            Self {
                attempts: AtomicU64::new(0),
                calls: Mutex::new(Vec::new()),
                payloads: Mutex::new(Vec::new()),
                fail_ids: Vec::new(),
                hang: false,
                delay: None,
            }
        }

        fn new() -> Arc<Self> {
            Arc::new(Self::base())
        }

        fn failing_on(ids: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                fail_ids: ids.iter().map(|s| s.to_string()).collect(),
                ..Self::base()
            })
        }

        fn hanging() -> Arc<Self> {
            Arc::new(Self {
                hang: true,
                ..Self::base()
            })
        }

        fn slow(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                delay: Some(delay),
                ..Self::base()
            })
        }

        fn attempts(&self) -> u64 {
            self.attempts.load(Ordering::SeqCst)
        }

        fn seen_doc_ids(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(id, _)| id.clone())
                .collect()
        }
    }

    impl RecordingTransport {
        async fn record_send(&self, payload: &[u8], signature: &str) -> Result<(), RegistryError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.hang {
                std::future::pending::<()>().await;
            }
            if let Some(delay) = self.delay {
                sleep(delay).await;
            }

            let document: Document = serde_json::from_slice(payload)
                .map_err(|e| RegistryError::serialization("unknown", e.to_string()))?;
            self.calls
                .lock()
                .unwrap()
                .push((document.doc_id.clone(), signature.to_string()));
            self.payloads.lock().unwrap().push(payload.to_vec());

            if self.fail_ids.contains(&document.doc_id) {
                return Err(RegistryError::transport_send("recording", "simulated"));
            }
            Ok(())
        }
    }

    /// Handle given to the client; tests keep the `Arc` for assertions.
    ///
    /// `Transport` is foreign here, so the impl lives on a local newtype
    /// rather than on `Arc<RecordingTransport>` directly.
    #[derive(Clone)]
    struct RecordingHandle(Arc<RecordingTransport>);

    impl Transport for RecordingHandle {
        fn name(&self) -> &str {
            "recording"
        }

        async fn send(&self, payload: &[u8], signature: &str) -> Result<(), RegistryError> {
            self.0.record_send(payload, signature).await
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn document(doc_id: &str) -> Document {
        Document {
            description: Description::new("7700000000"),
            doc_id: doc_id.to_string(),
            doc_status: "DRAFT".to_string(),
            doc_type: "LP_INTRODUCE_GOODS".to_string(),
            import_request: true,
            owner_inn: "7700000001".to_string(),
            participant_inn: "7700000000".to_string(),
            producer_inn: "7700000002".to_string(),
            production_date: date(),
            production_type: "OWN_PRODUCTION".to_string(),
            products: vec![Product {
                certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
                certificate_document_date: date(),
                certificate_document_number: "cert-1".to_string(),
                owner_inn: "7700000001".to_string(),
                producer_inn: "7700000002".to_string(),
                production_date: date(),
                tnved_code: "6401".to_string(),
                uit_code: "uit".to_string(),
                uitu_code: "uitu".to_string(),
            }],
            reg_date: date(),
            reg_number: "reg".to_string(),
        }
    }

    /// Twelve instant submissions through a (1 s, 5) throttle must release
    /// as 5 / 5 / 2 across the first three windows, each attempted once.
    #[tokio::test(start_paused = true)]
    async fn test_e2e_twelve_submissions_three_windows() {
        let transport = RecordingTransport::new();
        let config = ThrottleConfig::new(Duration::from_secs(1), 5);
        let client = RegistrarClient::new(config, RecordingHandle(Arc::clone(&transport))).unwrap();

        for i in 0..12 {
            client.submit(document(&format!("doc-{i:02}")), "sig");
        }

        sleep(Duration::from_millis(100)).await;
        assert_eq!(transport.attempts(), 5);

        sleep(Duration::from_secs(1)).await;
        assert_eq!(transport.attempts(), 10);

        sleep(Duration::from_secs(1)).await;
        assert_eq!(transport.attempts(), 12);

        // Exactly once each
        let mut ids = transport.seen_doc_ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);

        client.shutdown().await;
    }

    /// With limit 1 each window releases a single submission, exposing the
    /// queue's FIFO order end to end.
    #[tokio::test(start_paused = true)]
    async fn test_e2e_fifo_release_order() {
        let transport = RecordingTransport::new();
        let config = ThrottleConfig::new(Duration::from_millis(100), 1);
        let client = RegistrarClient::new(config, RecordingHandle(Arc::clone(&transport))).unwrap();

        for i in 0..5 {
            client.submit(document(&format!("doc-{i}")), "sig");
        }

        sleep(Duration::from_millis(600)).await;
        assert_eq!(
            transport.seen_doc_ids(),
            ["doc-0", "doc-1", "doc-2", "doc-3", "doc-4"]
        );

        client.shutdown().await;
    }

    /// A transport that never completes must not block `submit` or the
    /// release of later windows.
    #[tokio::test(start_paused = true)]
    async fn test_e2e_hanging_transport_keeps_timer_alive() {
        let transport = RecordingTransport::hanging();
        let config = ThrottleConfig::new(Duration::from_secs(1), 1);
        let client = RegistrarClient::new(config, RecordingHandle(Arc::clone(&transport))).unwrap();

        client.submit(document("a"), "sig");
        client.submit(document("b"), "sig");
        client.submit(document("c"), "sig");

        sleep(Duration::from_millis(100)).await;
        assert_eq!(transport.attempts(), 1);

        sleep(Duration::from_secs(2)).await;
        assert_eq!(transport.attempts(), 3);
        assert_eq!(client.metrics().completed_count(), 0);

        // In-flight units hang forever; drop instead of graceful shutdown.
        drop(client);
    }

    /// One failing submission affects neither its window siblings nor
    /// later windows.
    #[tokio::test(start_paused = true)]
    async fn test_e2e_failure_isolation() {
        let transport = RecordingTransport::failing_on(&["doc-1"]);
        let config = ThrottleConfig::new(Duration::from_secs(1), 3);
        let client = RegistrarClient::new(config, RecordingHandle(Arc::clone(&transport))).unwrap();

        for i in 0..5 {
            client.submit(document(&format!("doc-{i}")), "sig");
        }

        sleep(Duration::from_millis(100)).await;
        assert_eq!(transport.attempts(), 3);
        assert_eq!(client.metrics().failed_count(), 1);

        sleep(Duration::from_secs(1)).await;
        assert_eq!(transport.attempts(), 5);
        assert_eq!(client.metrics().completed_count(), 4);
        assert_eq!(client.metrics().failed_count(), 1);

        client.shutdown().await;
    }

    /// The transport sees the documented wire format: snake_case names,
    /// the two camelCase exceptions, ISO dates, and the caller's signature.
    #[tokio::test(start_paused = true)]
    async fn test_e2e_wire_format_reaches_transport() {
        let transport = RecordingTransport::new();
        let config = ThrottleConfig::per_second(5);
        let client = RegistrarClient::new(config, RecordingHandle(Arc::clone(&transport))).unwrap();

        client.submit(document("wire-1"), "detached-signature");
        sleep(Duration::from_millis(100)).await;

        let payloads = transport.payloads.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        let value: serde_json::Value = serde_json::from_slice(&payloads[0]).unwrap();

        assert_eq!(value["doc_id"], "wire-1");
        assert_eq!(value["importRequest"], true);
        assert_eq!(value["description"]["participantInn"], "7700000000");
        assert_eq!(value["production_date"], "2024-06-01");
        assert_eq!(value["products"][0]["tnved_code"], "6401");
        drop(payloads);

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls[0].1, "detached-signature");
        drop(calls);

        client.shutdown().await;
    }

    /// Shutdown waits for in-flight dispatch units before returning.
    #[tokio::test(start_paused = true)]
    async fn test_e2e_shutdown_waits_for_in_flight() {
        let transport = RecordingTransport::slow(Duration::from_millis(300));
        let config = ThrottleConfig::per_second(5);
        let client = RegistrarClient::new(config, RecordingHandle(Arc::clone(&transport))).unwrap();

        client.submit(document("slow-1"), "sig");
        sleep(Duration::from_millis(50)).await;
        assert_eq!(transport.attempts(), 1);
        assert_eq!(client.metrics().completed_count(), 0);

        client.shutdown().await;
        assert_eq!(transport.seen_doc_ids(), ["slow-1"]);
    }
}
