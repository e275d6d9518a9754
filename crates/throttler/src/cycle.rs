//! ReleaseCycle - periodic window drain and dispatch fan-out

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, instrument};

use contracts::{Submission, ThrottleConfig, Transport};

use crate::metrics::ThrottleMetrics;
use crate::queue::SubmissionQueue;

/// Periodic release loop: once per window, drain up to the configured limit
/// from the queue and start one independent dispatch task per submission.
///
/// The first tick fires immediately at startup; the limit is enforced per
/// window from that fixed zero point, not from the first enqueue. Unused
/// capacity in a window is not carried over.
pub struct ReleaseCycle<T> {
    config: ThrottleConfig,
    queue: Arc<SubmissionQueue>,
    transport: Arc<T>,
    metrics: Arc<ThrottleMetrics>,
    shutdown_rx: watch::Receiver<bool>,
}

impl<T: Transport + Send + Sync + 'static> ReleaseCycle<T> {
    /// Create a new release cycle
    pub fn new(
        config: ThrottleConfig,
        queue: Arc<SubmissionQueue>,
        transport: Arc<T>,
        metrics: Arc<ThrottleMetrics>,
        shutdown_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            queue,
            transport,
            metrics,
            shutdown_rx,
        }
    }

    /// Run the release loop until shutdown is signalled.
    ///
    /// Dispatch tasks run concurrently with the timer; a slow or hanging
    /// call never delays the next window. On shutdown the loop stops
    /// draining, then waits for in-flight dispatch tasks to settle.
    #[instrument(
        name = "release_cycle_run",
        skip(self),
        fields(window_ms = self.config.window.as_millis() as u64, limit = self.config.limit)
    )]
    pub async fn run(self) {
        info!(
            window_ms = self.config.window.as_millis() as u64,
            limit = self.config.limit,
            "Release cycle started"
        );

        let mut shutdown_rx = self.shutdown_rx.clone();
        let mut ticker = interval(self.config.window);
        // A stalled runtime must not burst extra windows when it catches up.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut in_flight: JoinSet<()> = JoinSet::new();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.release_window(&mut in_flight);
                    // Reap finished dispatch tasks without blocking the timer.
                    while in_flight.try_join_next().is_some() {}
                }
                // Covers both an explicit shutdown signal and the client
                // being dropped (sender closed).
                _ = shutdown_rx.changed() => break,
            }
        }

        let remaining = in_flight.len();
        if remaining > 0 {
            debug!(in_flight = remaining, "Waiting for in-flight dispatches");
        }
        while in_flight.join_next().await.is_some() {}

        info!("Release cycle stopped");
    }

    /// Spawn the release cycle as a background task
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    fn release_window(&self, in_flight: &mut JoinSet<()>) {
        let batch = self.queue.drain_up_to(self.config.limit);
        self.metrics.set_queue_depth(self.queue.len());

        if batch.is_empty() {
            return;
        }

        debug!(
            released = batch.len(),
            pending = self.queue.len(),
            "Window released"
        );

        for submission in batch {
            self.metrics.inc_started_count();
            let transport = Arc::clone(&self.transport);
            let metrics = Arc::clone(&self.metrics);
            in_flight.spawn(dispatch_one(transport, submission, metrics));
        }
    }
}

/// One dispatch unit: serialize the payload, hand it to the transport,
/// record the outcome.
///
/// Failures are logged and discarded. A failing unit never affects its
/// siblings in the same window or any later window, and nothing is retried.
async fn dispatch_one<T: Transport>(
    transport: Arc<T>,
    submission: Submission,
    metrics: Arc<ThrottleMetrics>,
) {
    let payload = match serde_json::to_vec(&submission.document) {
        Ok(payload) => payload,
        Err(e) => {
            metrics.inc_failed_count();
            error!(
                doc_id = %submission.document.doc_id,
                error = %e,
                "Payload serialization failed"
            );
            return;
        }
    };

    match transport.send(&payload, &submission.signature).await {
        Ok(()) => {
            metrics.inc_completed_count();
            debug!(
                doc_id = %submission.document.doc_id,
                transport = transport.name(),
                bytes = payload.len(),
                "Dispatch complete"
            );
        }
        Err(e) => {
            metrics.inc_failed_count();
            error!(
                doc_id = %submission.document.doc_id,
                transport = transport.name(),
                error = %e,
                "Dispatch failed"
            );
        }
    }
}
