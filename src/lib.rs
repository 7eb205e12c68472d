//! # hive
//!
//! **hive** is a minimal background-worker primitive for tokio services.
//!
//! Give it a task and a [`CancellationToken`](tokio_util::sync::CancellationToken); it invokes
//! the task again and again on its own tokio task until the token is cancelled. There is no
//! rate limiting, no retry or backoff policy and no scheduling: the next invocation starts as
//! soon as the previous one returns, whatever it returned.
//!
//! ## Architecture
//! ```text
//!   WorkerBuilder ──build()──► Worker ──► start_background_worker(ctx, Some(worker))
//!                                               │
//!                        ┌──────────────────────┴───────────────────────┐
//!                        ▼ (synchronous)                                ▼ (spawned)
//!              Err(WorkerError)                                   worker loop
//!              nothing started                      ┌──► ctx cancelled? ── yes ──► stop
//!                                                   │          │ no
//!                                                   │          ▼
//!                                                   └── task.run(ctx) (result dropped,
//!                                                                      or sent to subscribers)
//! ```
//!
//! ## Features
//! | Area              | Description                                             | Key types / traits                     |
//! |-------------------|---------------------------------------------------------|----------------------------------------|
//! | **Tasks**         | Define the unit of work as a trait impl or closure.     | [`Task`], [`TaskFn`], [`TaskRef`]      |
//! | **Workers**       | Configure and launch a loop.                            | [`WorkerBuilder`], [`Worker`], [`start_background_worker`] |
//! | **Handles**       | Wait for a loop to stop and read its counters.          | [`WorkerHandle`], [`LoopSummary`]      |
//! | **Subscriber API**| Observe starts, failed invocations and stops.           | [`Subscribe`], [`Event`], [`EventKind`]|
//! | **Errors**        | Typed launch and task errors.                           | [`WorkerError`], [`TaskError`]         |
//!
//! ## Optional features
//! - `logging`: exports [`LogWriter`], a subscriber forwarding events to `tracing`.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use hive::{start_background_worker, TaskError, TaskFn, TaskRef, Worker};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let heartbeat: TaskRef = TaskFn::arc("heartbeat", |_ctx: CancellationToken| async move {
//!         tokio::time::sleep(Duration::from_millis(10)).await;
//!         Ok::<(), TaskError>(())
//!     });
//!
//!     let ctx = CancellationToken::new();
//!     let worker = Worker::builder().task(Some(heartbeat)).build();
//!     let handle = start_background_worker(&ctx, Some(worker))?;
//!
//!     tokio::time::sleep(Duration::from_millis(50)).await;
//!     ctx.cancel();
//!
//!     let summary = handle.join().await?;
//!     assert!(summary.invocations >= 1);
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod subscribers;
mod tasks;

// ---- Public re-exports ----

pub use crate::core::{LoopSummary, Worker, WorkerBuilder, WorkerHandle, start_background_worker};
pub use error::{TaskError, WorkerError};
pub use events::{Event, EventKind};
pub use subscribers::Subscribe;
pub use tasks::{Task, TaskFn, TaskRef};

// Optional: expose a built-in subscriber that writes events through `tracing`.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
