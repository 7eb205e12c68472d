//! Error types used by background workers and their tasks.
//!
//! This module defines two error enums:
//!
//! - [`WorkerError`] — configuration errors returned by
//!   [`start_background_worker`](crate::start_background_worker), and join failures.
//! - [`TaskError`] — errors returned by individual task invocations.
//!
//! Both types provide `as_label` for logs, and [`TaskError`] also has `as_message`.
//!
//! ## Propagation
//! ```text
//! start_background_worker ──► Err(WorkerError)   (synchronous, nothing spawned)
//!                         └─► Ok(WorkerHandle)   (loop running)
//!
//! loop ──► task.run() ──► Err(TaskError) ──► dropped (or forwarded to subscribers)
//! ```

use thiserror::Error;

/// # Errors produced when launching or joining a worker.
///
/// `MissingWorker`, `MissingTask` and `NoRuntime` are returned synchronously at launch,
/// before anything is spawned. `Join` only comes out of [`WorkerHandle::join`](crate::WorkerHandle::join).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum WorkerError {
    /// No worker was passed to the launcher.
    #[error("worker must not be none")]
    MissingWorker,

    /// The worker was built without a task.
    #[error("task must not be none")]
    MissingTask,

    /// The launcher was called outside of a tokio runtime.
    #[error("no tokio runtime available to spawn the worker loop")]
    NoRuntime,

    /// The loop did not finish normally (panicked inside a task, or the runtime shut down).
    #[error("worker loop did not complete: {reason}")]
    Join {
        /// Description reported by the runtime.
        reason: String,
    },
}

impl WorkerError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use hive::WorkerError;
    ///
    /// assert_eq!(WorkerError::MissingTask.as_label(), "worker_missing_task");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            WorkerError::MissingWorker => "worker_missing",
            WorkerError::MissingTask => "worker_missing_task",
            WorkerError::NoRuntime => "worker_no_runtime",
            WorkerError::Join { .. } => "worker_join_failed",
        }
    }
}

/// # Errors produced by a task invocation.
///
/// The worker loop never acts on these: a failed invocation is followed by the next one
/// exactly like a successful invocation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// Invocation failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Task observed cancellation and returned early.
    #[error("context cancelled")]
    Canceled,
}

impl TaskError {
    /// Shorthand for [`TaskError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use hive::TaskError;
    ///
    /// assert_eq!(TaskError::fail("boom").as_label(), "task_failed");
    /// assert_eq!(TaskError::Canceled.as_label(), "task_canceled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Canceled => "task_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TaskError::Fail { error } => format!("error: {error}"),
            TaskError::Canceled => "context cancelled".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(WorkerError::MissingWorker.as_label(), "worker_missing");
        assert_eq!(WorkerError::NoRuntime.as_label(), "worker_no_runtime");
    }

    #[test]
    fn messages_name_the_missing_part() {
        assert_eq!(WorkerError::MissingWorker.to_string(), "worker must not be none");
        assert_eq!(WorkerError::MissingTask.to_string(), "task must not be none");
        assert_eq!(
            TaskError::fail("disk full").to_string(),
            "execution failed: disk full"
        );
        assert_eq!(TaskError::fail("disk full").as_message(), "error: disk full");
    }
}
