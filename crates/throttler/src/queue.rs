//! SubmissionQueue - unbounded FIFO shared by producers and the release cycle

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use contracts::Submission;

/// Unbounded FIFO of submissions awaiting release.
///
/// Many producers append concurrently via [`enqueue`](Self::enqueue); the
/// release cycle is the single consumer and drains at most the window limit
/// per tick via [`drain_up_to`](Self::drain_up_to). Both operations hold the
/// lock for their whole step, so no element is ever dropped, duplicated, or
/// returned by two overlapping drains.
#[derive(Debug, Default)]
pub struct SubmissionQueue {
    pending: Mutex<VecDeque<Submission>>,
}

impl SubmissionQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Submission>> {
        // A producer panicking mid-push cannot leave the deque in a torn
        // state, so poison is recoverable.
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a submission to the tail.
    ///
    /// Never blocks on capacity and never fails; the queue is unbounded.
    pub fn enqueue(&self, submission: Submission) {
        self.lock().push_back(submission);
    }

    /// Atomically remove and return the first `min(n, len)` submissions
    /// in FIFO order. Returns an empty vec if the queue is empty.
    pub fn drain_up_to(&self, n: usize) -> Vec<Submission> {
        let mut pending = self.lock();
        let take = n.min(pending.len());
        pending.drain(..take).collect()
    }

    /// Current number of pending submissions
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
