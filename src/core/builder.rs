use std::sync::Arc;

use crate::{subscribers::Subscribe, tasks::TaskRef};

use super::worker::Worker;

/// Fluent builder for [`Worker`].
///
/// Nothing is validated here: a builder without a task still builds. The check happens in
/// [`start_background_worker`](crate::start_background_worker).
#[derive(Default)]
pub struct WorkerBuilder {
    name: Option<Arc<str>>,
    task: Option<TaskRef>,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl WorkerBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the task to run, or clears it with `None`.
    ///
    /// Only the last value passed before [`build`](Self::build) is kept.
    pub fn task(mut self, task: Option<TaskRef>) -> Self {
        self.task = task;
        self
    }

    /// Sets the worker name used in logs and events.
    pub fn name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets event subscribers.
    ///
    /// Without subscribers, errors returned by the task are dropped silently.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Snapshots the current configuration into a [`Worker`]. Never fails.
    pub fn build(self) -> Worker {
        Worker {
            name: self.name,
            task: self.task,
            subscribers: self.subscribers,
        }
    }
}
