//! RegistrarClient - public entry point for throttled document submission

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument};

use contracts::{Document, Submission, ThrottleConfig, Transport};

use crate::cycle::ReleaseCycle;
use crate::error::ThrottlerError;
use crate::metrics::ThrottleMetrics;
use crate::queue::SubmissionQueue;
use crate::transports::HttpTransport;

/// Client facade over the throttled dispatch pipeline.
///
/// [`submit`](Self::submit) is fire-and-forget: it enqueues and returns
/// immediately, regardless of queue depth or network latency. Callers
/// cannot observe the fate of an individual submission; aggregate outcomes
/// are available through [`metrics`](Self::metrics).
pub struct RegistrarClient {
    queue: Arc<SubmissionQueue>,
    metrics: Arc<ThrottleMetrics>,
    shutdown_tx: watch::Sender<bool>,
    worker: JoinHandle<()>,
}

impl RegistrarClient {
    /// Create a client and start its release cycle immediately.
    ///
    /// The cycle's first window opens at construction time, so the request
    /// limit is enforced from a fixed zero point rather than from the first
    /// submission.
    ///
    /// # Errors
    /// Returns a config error if the limit is zero or the window is empty.
    #[instrument(name = "registrar_client_new", skip(transport), fields(transport = transport.name()))]
    pub fn new<T>(config: ThrottleConfig, transport: T) -> Result<Self, ThrottlerError>
    where
        T: Transport + Send + Sync + 'static,
    {
        config.validate().map_err(ThrottlerError::Config)?;

        let queue = Arc::new(SubmissionQueue::new());
        let metrics = Arc::new(ThrottleMetrics::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let cycle = ReleaseCycle::new(
            config,
            Arc::clone(&queue),
            Arc::new(transport),
            Arc::clone(&metrics),
            shutdown_rx,
        );
        let worker = cycle.spawn();

        Ok(Self {
            queue,
            metrics,
            shutdown_tx,
            worker,
        })
    }

    /// Create a client that POSTs to the production registration endpoint,
    /// constructing the HTTP transport internally.
    ///
    /// # Errors
    /// Returns a config error for an invalid throttle configuration, or a
    /// contract error if the HTTP transport cannot be built.
    pub fn with_http(config: ThrottleConfig) -> Result<Self, ThrottlerError> {
        let transport = HttpTransport::new("http")?;
        Self::new(config, transport)
    }

    /// Submit a document for registration (fire-and-forget).
    ///
    /// Never blocks and never fails; the submission waits in the queue
    /// until a release window has capacity for it.
    pub fn submit(&self, document: Document, signature: impl Into<String>) {
        let submission = Submission::new(document, signature);
        debug!(doc_id = %submission.document.doc_id, "Submission enqueued");

        self.queue.enqueue(submission);
        self.metrics.inc_enqueued_count();
        self.metrics.set_queue_depth(self.queue.len());
    }

    /// Number of submissions currently waiting for a release window
    pub fn queue_depth(&self) -> usize {
        self.queue.len()
    }

    /// Aggregate dispatch metrics
    pub fn metrics(&self) -> &Arc<ThrottleMetrics> {
        &self.metrics
    }

    /// Stop the release cycle and wait for in-flight dispatches to settle.
    ///
    /// Submissions still queued at shutdown are dropped, not flushed.
    #[instrument(name = "registrar_client_shutdown", skip(self))]
    pub async fn shutdown(self) {
        // Ignore send errors: the cycle also stops when the sender closes.
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.worker.await {
            error!(error = ?e, "Release cycle task panicked");
        }
        debug!("RegistrarClient shutdown complete");
    }
}
