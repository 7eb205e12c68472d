//! # Function-backed task (`TaskFn`)
//!
//! [`TaskFn`] wraps a closure `F: Fn(CancellationToken) -> Fut`, producing a fresh
//! future per invocation. State shared between invocations has to live in the closure
//! explicitly (`Arc<AtomicU64>`, `Arc<Mutex<_>>`, ...).
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use hive::{TaskFn, TaskRef, TaskError};
//!
//! let t: TaskRef = TaskFn::arc("poller", |ctx: CancellationToken| async move {
//!     if ctx.is_cancelled() {
//!         return Ok(());
//!     }
//!     // poll something...
//!     Ok::<_, TaskError>(())
//! });
//!
//! assert_eq!(t.name(), "poller");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;
use crate::tasks::task::Task;

/// Function-backed task implementation.
#[derive(Debug)]
pub struct TaskFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> TaskFn<F> {
    /// Creates a new function-backed task.
    ///
    /// Prefer [`TaskFn::arc`] when you immediately need a [`TaskRef`](crate::TaskRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the task and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Task for TaskFn<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, ctx: CancellationToken) -> Result<(), TaskError> {
        (self.f)(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::tasks::TaskRef;

    #[tokio::test]
    async fn each_invocation_builds_a_fresh_future() {
        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);
        let task: TaskRef = TaskFn::arc("count", move |_ctx: CancellationToken| {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok::<(), TaskError>(())
            }
        });

        let ctx = CancellationToken::new();
        for _ in 0..3 {
            task.run(ctx.clone()).await.unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(task.name(), "count");
    }

    #[tokio::test]
    async fn token_reaches_the_closure() {
        let task = TaskFn::new("observe", |ctx: CancellationToken| async move {
            if ctx.is_cancelled() {
                Err(TaskError::Canceled)
            } else {
                Ok(())
            }
        });

        let ctx = CancellationToken::new();
        assert!(task.run(ctx.clone()).await.is_ok());
        ctx.cancel();
        assert!(matches!(task.run(ctx).await, Err(TaskError::Canceled)));
    }
}
