//! Demonstrates the log output of instrumented tasks and brackets
//!
//! Run with: cargo run --example tracing_demo

use confluence::prelude::*;
use confluence::task;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting tracing demo");

    let result = task::bracket(
        open_session(),
        |session| fetch_totals(session.clone()),
        |session, _outcome| close_session(session),
    )
    .instrument(tracing::info_span!("report", kind = "daily"))
    .run()
    .await;

    match result {
        Ok(totals) => tracing::info!(?totals, "Report completed"),
        Err(e) => tracing::error!("Report failed: {}", e),
    }

    tracing::info!("Running a failing release");
    let shadowed = task::bracket(
        open_session(),
        |_| task::fail::<i32, _>("query timed out".to_string()),
        |_, _| task::fail("session already closed".to_string()),
    )
    .run()
    .await;
    tracing::info!(?shadowed, "Bracket result");
}

fn open_session() -> impl Task<Output = String, Error = String> {
    task::from_fn(|| {
        tracing::debug!("opening session");
        Ok("session-1".to_string())
    })
}

fn fetch_totals(session: String) -> impl Task<Output = Vec<u64>, Error = String> {
    let day = |n: u64| task::from_fn(move || Ok::<_, String>(n * 10));
    task::traverse(Parallel, 1..=3, day)
        .instrument(tracing::debug_span!("fetch_totals", %session))
}

fn close_session(session: String) -> impl Task<Output = (), Error = String> {
    task::from_fn(move || {
        tracing::debug!(%session, "closing session");
        Ok(())
    })
}
