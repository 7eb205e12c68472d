//! # LogWriter — forwards worker events to `tracing`
//!
//! ## Example output (fmt subscriber)
//! ```text
//! INFO hive::subscribers::log: worker starting worker="indexer"
//! WARN hive::subscribers::log: task failed worker="indexer" attempt=4 err="connection refused"
//! INFO hive::subscribers::log: worker stopped worker="indexer" invocations=12
//! ```

use async_trait::async_trait;
use tracing::{info, warn};

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::WorkerStarting => {
                info!(worker = %e.worker, "worker starting");
            }
            EventKind::TaskFailed => {
                warn!(
                    worker = %e.worker,
                    attempt = e.attempt,
                    err = e.reason.as_deref().unwrap_or("unknown"),
                    "task failed"
                );
            }
            EventKind::WorkerStopped => {
                info!(worker = %e.worker, invocations = e.attempt, "worker stopped");
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handles_every_kind() {
        let writer = LogWriter::new();
        for kind in [
            EventKind::WorkerStarting,
            EventKind::TaskFailed,
            EventKind::WorkerStopped,
        ] {
            writer.on_event(&Event::new(kind, "w").with_attempt(1)).await;
        }
        assert_eq!(writer.name(), "LogWriter");
    }
}
