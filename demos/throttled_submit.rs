//! Throttled Submit Demo
//!
//! Demonstrates the rate-limited client with a log-only transport: a burst
//! of submissions drains at the configured window rate. No network access
//! is required.
//!
//! Run with: cargo run --bin throttled_submit

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use contracts::{Description, Document, Product, ThrottleConfig};
use observability::{
    record_dispatch_outcome, record_queue_depth, record_submission_enqueued,
    record_window_released,
};
use throttler::{LogTransport, RegistrarClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; Prometheus disabled for the demo
    observability::init_with_config(observability::ObservabilityConfig {
        log_format: observability::LogFormat::Pretty,
        metrics_port: None,
        default_log_level: "debug".to_string(),
    })?;

    tracing::info!("Starting Throttled Submit Demo");

    // ==== Stage 1: Build the client (5 dispatches per second) ====
    let config = ThrottleConfig::new(Duration::from_secs(1), 5);
    let client = RegistrarClient::new(config, LogTransport::new("demo"))?;

    // ==== Stage 2: Burst of 12 submissions ====
    for i in 0..12 {
        client.submit(sample_document(i), format!("signature-{i}"));
        record_submission_enqueued();
    }
    record_queue_depth(client.queue_depth());
    tracing::info!(pending = client.queue_depth(), "Burst enqueued");

    // ==== Stage 3: Watch the windows drain ====
    let mut reported: u64 = 0;
    let mut released: u64 = 0;
    for second in 0..4u32 {
        tokio::time::sleep(Duration::from_secs(1)).await;

        let snapshot = client.metrics().snapshot();
        record_queue_depth(snapshot.queue_depth);
        record_window_released((snapshot.started_count - released) as usize);
        released = snapshot.started_count;
        for _ in reported..snapshot.completed_count {
            record_dispatch_outcome("demo", true);
        }
        reported = snapshot.completed_count;

        tracing::info!(
            second,
            started = snapshot.started_count,
            completed = snapshot.completed_count,
            failed = snapshot.failed_count,
            pending = snapshot.queue_depth,
            "Window progress"
        );
    }

    // ==== Stage 4: Shutdown ====
    client.shutdown().await;
    tracing::info!("Demo complete");

    Ok(())
}

fn sample_document(index: u32) -> Document {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    Document {
        description: Description::new("7700000000"),
        doc_id: format!("demo-doc-{index:02}"),
        doc_status: "DRAFT".to_string(),
        doc_type: "LP_INTRODUCE_GOODS".to_string(),
        import_request: false,
        owner_inn: "7700000001".to_string(),
        participant_inn: "7700000000".to_string(),
        producer_inn: "7700000002".to_string(),
        production_date: date,
        production_type: "OWN_PRODUCTION".to_string(),
        products: vec![Product {
            certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
            certificate_document_date: date,
            certificate_document_number: format!("cert-{index}"),
            owner_inn: "7700000001".to_string(),
            producer_inn: "7700000002".to_string(),
            production_date: date,
            tnved_code: "6401".to_string(),
            uit_code: format!("uit-{index}"),
            uitu_code: format!("uitu-{index}"),
        }],
        reg_date: date,
        reg_number: format!("reg-{index}"),
    }
}
