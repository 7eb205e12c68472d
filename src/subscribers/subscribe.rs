//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for observing a worker: the loop itself never
//! reports task errors anywhere, so a subscriber is the only way to see them.
//!
//! ## Contract
//! - `on_event` is awaited on the worker loop and should return quickly: a slow
//!   subscriber delays the next invocation of the task by the same amount.
//! - Subscribers cannot influence the loop: there is no return value, and a panic
//!   inside `on_event` is caught, logged with `tracing::warn!` and skipped.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use async_trait::async_trait;
//! use hive::{Event, EventKind, Subscribe};
//!
//! #[derive(Default)]
//! struct FailureCounter(AtomicU64);
//!
//! #[async_trait]
//! impl Subscribe for FailureCounter {
//!     async fn on_event(&self, ev: &Event) {
//!         if ev.kind == EventKind::TaskFailed {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "failure-counter" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single event.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
