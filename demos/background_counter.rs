//! # Example: background_counter
//!
//! Runs a worker whose task fails every third invocation, with [`LogWriter`] reporting
//! the failures, then cancels it after half a second.
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example background_counter --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use hive::{LogWriter, Subscribe, TaskError, TaskFn, TaskRef, Worker, start_background_worker};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let ticks = Arc::new(AtomicU64::new(0));
    let seen = Arc::clone(&ticks);
    let task: TaskRef = TaskFn::arc("ticker", move |_ctx: CancellationToken| {
        let seen = Arc::clone(&seen);
        async move {
            let n = seen.fetch_add(1, Ordering::Relaxed) + 1;
            tokio::time::sleep(Duration::from_millis(50)).await;
            if n % 3 == 0 {
                return Err(TaskError::fail(format!("tick {n} rejected")));
            }
            Ok(())
        }
    });

    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];
    let worker = Worker::builder()
        .name("ticker")
        .task(Some(task))
        .with_subscribers(subs)
        .build();

    let ctx = CancellationToken::new();
    let handle = start_background_worker(&ctx, Some(worker))?;

    tokio::time::sleep(Duration::from_millis(500)).await;
    ctx.cancel();

    let summary = handle.join().await?;
    println!(
        "ticker stopped: invocations={} failures={} counter={}",
        summary.invocations,
        summary.failures,
        ticks.load(Ordering::Relaxed)
    );
    Ok(())
}
