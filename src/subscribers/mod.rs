//! # Event subscribers.
//!
//! A worker built with [`WorkerBuilder::with_subscribers`](crate::WorkerBuilder::with_subscribers)
//! hands every [`Event`](crate::Event) to each subscriber, in registration order, on the loop itself.
//!
//! ```text
//! loop ── Event ──► sub1.on_event() ──► sub2.on_event() ──► ... ──► next invocation
//! ```

mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
