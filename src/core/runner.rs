//! # Worker execution loop.
//!
//! Invokes one task over and over until the cancellation token fires.
//!
//! ## Architecture
//! ```text
//! start_background_worker ──► spawn(run_loop)
//!
//! emit WorkerStarting
//! loop {
//!   ├─► token cancelled? ──► yes: break
//!   ├─► invocations += 1
//!   ├─► task.run(token) ──► Ok  ──► (ignored)
//!   │                   └─► Err ──► failures += 1, emit TaskFailed
//!   └─► yield to the scheduler
//! }
//! emit WorkerStopped
//! ```
//!
//! ## Rules
//! - Cancellation is checked **before every** invocation, never during one
//! - Invocations run **sequentially** (never concurrent for one worker)
//! - No delay between invocations; the task outcome never changes control flow
//! - Events are only built when at least one subscriber is registered
//! - A panicking subscriber is logged and skipped; it never ends the loop

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::{
    events::{Event, EventKind},
    subscribers::Subscribe,
    tasks::TaskRef,
};

/// Counters collected by a finished loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Number of task invocations performed.
    pub invocations: u64,
    /// How many of those returned an error.
    pub failures: u64,
}

/// Everything the loop needs, moved out of the [`Worker`](crate::Worker) at launch.
pub(crate) struct WorkerLoop {
    pub(crate) name: Arc<str>,
    pub(crate) task: TaskRef,
    pub(crate) subscribers: Vec<Arc<dyn Subscribe>>,
}

impl WorkerLoop {
    /// Runs until `token` is cancelled.
    ///
    /// A task invocation that never returns keeps the loop in the running state forever:
    /// the token is passed to the task but the loop does not abort it.
    pub(crate) async fn run(self, token: CancellationToken) -> LoopSummary {
        let mut summary = LoopSummary::default();

        debug!("worker loop started");
        self.emit(EventKind::WorkerStarting, |ev| ev).await;

        loop {
            if token.is_cancelled() {
                break;
            }

            summary.invocations += 1;
            let attempt = summary.invocations;
            trace!(attempt, "invoking task");

            if let Err(err) = self.task.run(token.clone()).await {
                summary.failures += 1;
                self.emit(EventKind::TaskFailed, |ev| {
                    ev.with_attempt(attempt).with_reason(err.to_string())
                })
                .await;
            }

            // Tasks that never suspend must not starve the runtime.
            tokio::task::yield_now().await;
        }

        self.emit(EventKind::WorkerStopped, |ev| {
            ev.with_attempt(summary.invocations)
        })
        .await;
        debug!(
            invocations = summary.invocations,
            failures = summary.failures,
            "worker loop stopped"
        );
        summary
    }

    /// Delivers one event to every subscriber, in registration order.
    async fn emit(&self, kind: EventKind, fill: impl FnOnce(Event) -> Event) {
        if self.subscribers.is_empty() {
            return;
        }
        let ev = fill(Event::new(kind, Arc::clone(&self.name)));
        for sub in &self.subscribers {
            let fut = sub.on_event(&ev);
            if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
                warn!(
                    subscriber = sub.name(),
                    panic = panic_message(panic_err.as_ref()),
                    "subscriber panicked"
                );
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::{TaskError, TaskFn};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Event>>);

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, event: &Event) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    struct PanicOnFailure;

    #[async_trait]
    impl Subscribe for PanicOnFailure {
        async fn on_event(&self, event: &Event) {
            if event.kind == EventKind::TaskFailed {
                panic!("subscriber bug");
            }
        }
    }

    /// Task that fails on every odd invocation and cancels `token` on invocation `stop_at`.
    fn flaky(token: CancellationToken, stop_at: u64) -> TaskRef {
        let calls = Arc::new(AtomicU64::new(0));
        TaskFn::arc("flaky", move |_ctx: CancellationToken| {
            let calls = Arc::clone(&calls);
            let token = token.clone();
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n == stop_at {
                    token.cancel();
                }
                if n % 2 == 1 {
                    Err(TaskError::fail(format!("odd call {n}")))
                } else {
                    Ok(())
                }
            }
        })
    }

    #[tokio::test]
    async fn failures_do_not_stop_the_loop() {
        let token = CancellationToken::new();
        let lp = WorkerLoop {
            name: "flaky".into(),
            task: flaky(token.clone(), 6),
            subscribers: Vec::new(),
        };

        let summary = lp.run(token).await;
        assert_eq!(
            summary,
            LoopSummary {
                invocations: 6,
                failures: 3
            }
        );
    }

    #[tokio::test]
    async fn cancelled_token_means_zero_invocations() {
        let token = CancellationToken::new();
        token.cancel();
        let recorder = Arc::new(Recorder::default());
        let lp = WorkerLoop {
            name: "idle".into(),
            task: flaky(CancellationToken::new(), 1),
            subscribers: vec![recorder.clone() as Arc<dyn Subscribe>],
        };

        let summary = lp.run(token).await;
        assert_eq!(summary.invocations, 0);

        let kinds: Vec<EventKind> = recorder.0.lock().unwrap().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::WorkerStarting, EventKind::WorkerStopped]);
    }

    #[tokio::test]
    async fn subscribers_see_failures_in_order() {
        let token = CancellationToken::new();
        let recorder = Arc::new(Recorder::default());
        let lp = WorkerLoop {
            name: "flaky".into(),
            task: flaky(token.clone(), 4),
            subscribers: vec![recorder.clone() as Arc<dyn Subscribe>],
        };

        lp.run(token).await;

        let events = recorder.0.lock().unwrap().clone();
        let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::WorkerStarting,
                EventKind::TaskFailed,
                EventKind::TaskFailed,
                EventKind::WorkerStopped,
            ]
        );
        assert_eq!(events[1].attempt, Some(1));
        assert_eq!(events[2].attempt, Some(3));
        assert_eq!(
            events[2].reason.as_deref(),
            Some("execution failed: odd call 3")
        );
        assert_eq!(events[3].attempt, Some(4));
        assert!(events.windows(2).all(|w| w[0].seq < w[1].seq));
        assert!(events.iter().all(|e| &*e.worker == "flaky"));
    }

    #[tokio::test]
    async fn panicking_subscriber_does_not_end_the_loop() {
        let token = CancellationToken::new();
        let recorder = Arc::new(Recorder::default());
        let lp = WorkerLoop {
            name: "flaky".into(),
            task: flaky(token.clone(), 5),
            subscribers: vec![
                Arc::new(PanicOnFailure) as Arc<dyn Subscribe>,
                recorder.clone() as Arc<dyn Subscribe>,
            ],
        };

        let summary = lp.run(token).await;
        assert_eq!(
            summary,
            LoopSummary {
                invocations: 5,
                failures: 3
            }
        );

        let kinds: Vec<EventKind> = recorder.0.lock().unwrap().iter().map(|e| e.kind).collect();
        assert_eq!(kinds.first(), Some(&EventKind::WorkerStarting));
        assert_eq!(kinds.last(), Some(&EventKind::WorkerStopped));
        assert_eq!(kinds.iter().filter(|k| **k == EventKind::TaskFailed).count(), 3);
    }
}
