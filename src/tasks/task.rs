//! # Task abstraction.
//!
//! A [`Task`] is the unit of work a [`Worker`](crate::Worker) invokes over and over.
//! It receives a [`CancellationToken`] on every invocation and may use it to cut a
//! long invocation short; the worker loop itself never interrupts a running invocation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;

/// Shared handle to a task, as stored by [`Worker`](crate::Worker).
pub type TaskRef = Arc<dyn Task>;

/// # Asynchronous, cancelable unit of work.
///
/// A single invocation is one call to [`run`](Task::run). The worker loop discards the
/// returned result, so implementations own their error handling (logging, metrics, ...).
///
/// # Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use async_trait::async_trait;
/// use hive::{Task, TaskError};
///
/// struct Flush;
///
/// #[async_trait]
/// impl Task for Flush {
///     fn name(&self) -> &str { "flush" }
///
///     async fn run(&self, ctx: CancellationToken) -> Result<(), TaskError> {
///         if ctx.is_cancelled() {
///             return Err(TaskError::Canceled);
///         }
///         // flush buffers...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Task: Send + Sync + 'static {
    /// Returns a stable, human-readable task name.
    fn name(&self) -> &str;

    /// Performs one invocation.
    async fn run(&self, ctx: CancellationToken) -> Result<(), TaskError>;
}
