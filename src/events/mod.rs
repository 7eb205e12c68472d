//! Worker events: what a running loop reports to its subscribers.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! Events are only built when the worker has at least one
//! [`Subscribe`](crate::Subscribe) registered; otherwise the loop reports nothing.

mod event;

pub use event::{Event, EventKind};
