//! # Events emitted by a worker loop.
//!
//! ```text
//! WorkerStarting ──► [TaskFailed]* ──► WorkerStopped
//! ```
//!
//! `WorkerStarting` and `WorkerStopped` are emitted exactly once per loop.
//! `TaskFailed` is emitted once per failed invocation, in invocation order.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically
//! across all workers of the process.
//!
//! ## Example
//! ```rust
//! use hive::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::TaskFailed, "indexer")
//!     .with_attempt(3)
//!     .with_reason("connection refused");
//!
//! assert_eq!(ev.kind, EventKind::TaskFailed);
//! assert_eq!(&*ev.worker, "indexer");
//! assert_eq!(ev.reason.as_deref(), Some("connection refused"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of worker events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Loop entered the running state.
    ///
    /// Sets:
    /// - `worker`: worker name
    WorkerStarting,

    /// One invocation returned an error. The loop continues regardless.
    ///
    /// Sets:
    /// - `worker`: worker name
    /// - `attempt`: invocation number (1-based)
    /// - `reason`: error message
    TaskFailed,

    /// Loop observed cancellation and stopped.
    ///
    /// Sets:
    /// - `worker`: worker name
    /// - `attempt`: total number of invocations performed
    WorkerStopped,
}

/// Worker event with optional metadata.
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the emitting worker.
    pub worker: Arc<str>,
    /// Invocation number or count, depending on `kind`.
    pub attempt: Option<u64>,
    /// Human-readable reason (error message).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event with current timestamp and next sequence number.
    pub fn new(kind: EventKind, worker: impl Into<Arc<str>>) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            worker: worker.into(),
            attempt: None,
            reason: None,
        }
    }

    /// Attaches an invocation number.
    #[inline]
    pub fn with_attempt(mut self, n: u64) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let a = Event::new(EventKind::WorkerStarting, "w");
        let b = Event::new(EventKind::WorkerStopped, "w");
        assert!(b.seq > a.seq);
    }
}
