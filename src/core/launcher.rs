//! # Launching a worker.
//!
//! [`start_background_worker`] is the only entry point: it validates synchronously and
//! either returns an error (nothing spawned) or spawns exactly one loop and returns at once.
//!
//! ```text
//! start_background_worker(ctx, worker)
//!   ├─► worker is None         ─► Err(MissingWorker)
//!   ├─► worker.task is None    ─► Err(MissingTask)
//!   ├─► no tokio runtime       ─► Err(NoRuntime)
//!   └─► spawn WorkerLoop::run(ctx.child_token()) ─► Ok(WorkerHandle)
//! ```

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug_span};

use super::{handle::WorkerHandle, runner::WorkerLoop, worker::Worker};
use crate::error::WorkerError;

/// Validates `worker` and starts its loop on the current tokio runtime.
///
/// The loop runs until `ctx` is cancelled. It receives a child token of `ctx`, so
/// cancelling `ctx` stops the loop while nothing the loop does can cancel `ctx`.
///
/// ### Errors
/// - [`WorkerError::MissingWorker`] if `worker` is `None`
/// - [`WorkerError::MissingTask`] if the worker was built without a task
/// - [`WorkerError::NoRuntime`] if called outside a tokio runtime
///
/// On error nothing is spawned.
///
/// # Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use hive::{start_background_worker, Worker, WorkerError};
///
/// let ctx = CancellationToken::new();
/// let err = start_background_worker(&ctx, Some(Worker::builder().build())).unwrap_err();
/// assert!(matches!(err, WorkerError::MissingTask));
/// ```
pub fn start_background_worker(
    ctx: &CancellationToken,
    worker: Option<Worker>,
) -> Result<WorkerHandle, WorkerError> {
    let worker = worker.ok_or(WorkerError::MissingWorker)?;
    let name: Arc<str> = Arc::from(worker.name());

    let Worker {
        task, subscribers, ..
    } = worker;
    let task = task.ok_or(WorkerError::MissingTask)?;
    let runtime = Handle::try_current().map_err(|_| WorkerError::NoRuntime)?;

    let span = debug_span!("worker", name = %name);
    let worker_loop = WorkerLoop {
        name: Arc::clone(&name),
        task,
        subscribers,
    };
    let join = runtime.spawn(worker_loop.run(ctx.child_token()).instrument(span));

    Ok(WorkerHandle { name, join })
}
