//! adr-watch - live Argentine ADR and peso exchange rate monitor.
//!
//! Logs go to a daily-rolling file so they never interleave with the
//! console table.

use adr_watch::{App, Config};
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; keep the guard alive so buffered lines get flushed
    let _guard = init_logging()?;

    // Load configuration
    let config = Config::load_or_default().context("failed to load configuration")?;

    // Run the monitor
    let mut app = App::new(config).context("failed to create quote client")?;
    app.run().await?;

    Ok(())
}

fn init_logging() -> anyhow::Result<WorkerGuard> {
    let log_dir = adr_watch::config::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, "adr-watch.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adr_watch=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(guard)
}
