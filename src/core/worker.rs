//! # Worker configuration.
//!
//! A [`Worker`] is the immutable output of [`WorkerBuilder`](crate::WorkerBuilder).
//! It may be built without a task; that is only rejected when it is launched.

use std::fmt;
use std::sync::Arc;

use crate::{subscribers::Subscribe, tasks::TaskRef};

/// Name used when neither an explicit name nor a task is configured.
pub(crate) const DEFAULT_WORKER_NAME: &str = "worker";

/// Configuration bundle for one background loop.
///
/// Constructed only via [`Worker::builder`] / [`WorkerBuilder`](crate::WorkerBuilder).
/// Fields are private and there are no setters: once built, the task never changes.
pub struct Worker {
    pub(crate) name: Option<Arc<str>>,
    pub(crate) task: Option<TaskRef>,
    pub(crate) subscribers: Vec<Arc<dyn Subscribe>>,
}

impl Worker {
    /// Shorthand for [`WorkerBuilder::new`](crate::WorkerBuilder::new).
    pub fn builder() -> super::WorkerBuilder {
        super::WorkerBuilder::new()
    }

    /// Returns the configured task, if any.
    pub fn task(&self) -> Option<&TaskRef> {
        self.task.as_ref()
    }

    /// Returns the worker name.
    ///
    /// Falls back to the task name, then to `"worker"`.
    pub fn name(&self) -> &str {
        match (&self.name, &self.task) {
            (Some(name), _) => &**name,
            (None, Some(task)) => task.name(),
            (None, None) => DEFAULT_WORKER_NAME,
        }
    }

    /// Returns the registered subscribers.
    pub fn subscribers(&self) -> &[Arc<dyn Subscribe>] {
        &self.subscribers
    }
}

impl fmt::Debug for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Worker")
            .field("name", &self.name())
            .field("task", &self.task.as_ref().map(|t| t.name()))
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
