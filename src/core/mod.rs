//! Worker core: configuration, launch and the execution loop.
//!
//! Internal modules:
//! - [`worker`]: the immutable [`Worker`] bundle;
//! - [`builder`]: [`WorkerBuilder`], the only way to make a [`Worker`];
//! - [`launcher`]: [`start_background_worker`], synchronous validation and spawn;
//! - [`runner`]: the loop that invokes the task until cancellation;
//! - [`handle`]: [`WorkerHandle`] returned by a successful launch.

mod builder;
mod handle;
mod launcher;
mod runner;
mod worker;

pub use builder::WorkerBuilder;
pub use handle::WorkerHandle;
pub use launcher::start_background_worker;
pub use runner::LoopSummary;
pub use worker::Worker;
