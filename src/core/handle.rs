//! # Handle to a launched worker.
//!
//! Dropping a [`WorkerHandle`] detaches the loop: it keeps running until its token is
//! cancelled. Keeping the handle lets the caller wait for the loop to stop.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::runner::LoopSummary;
use crate::error::WorkerError;

/// Handle returned by [`start_background_worker`](crate::start_background_worker).
#[derive(Debug)]
pub struct WorkerHandle {
    pub(crate) name: Arc<str>,
    pub(crate) join: JoinHandle<LoopSummary>,
}

impl WorkerHandle {
    /// Returns the worker name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` once the loop has stopped.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the loop to stop.
    ///
    /// Only returns after the token passed at launch is cancelled and the in-flight
    /// invocation (if any) has returned.
    pub async fn join(self) -> Result<LoopSummary, WorkerError> {
        self.join.await.map_err(|e| WorkerError::Join {
            reason: e.to_string(),
        })
    }
}
