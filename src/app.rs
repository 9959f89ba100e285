//! Main application module.
//!
//! This module contains the `App` struct that drives the poll loop:
//! fetch forex, fetch equities at the current peso rate, render, sleep.

use crate::api::{ApiClientBuilder, QuoteClient, QuoteProvider};
use crate::config::{Catalog, Config};
use crate::error::Result;
use crate::fetch::{fetch_equities, fetch_forex_rates, official_rate};
use crate::state::DisplayTable;
use crate::ui::Ui;

use std::future::Future;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Poll loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Running,
    Stopped,
}

/// The main application.
pub struct App<W: io::Write> {
    /// Configuration.
    config: Config,
    /// Instruments to poll.
    catalog: Catalog,
    /// Shared quote lookups.
    client: QuoteClient,
    /// Console renderer.
    ui: Ui<W>,
    /// Loop state.
    state: PollState,
}

impl App<Stdout> {
    /// Create the application against Yahoo Finance, drawing to stdout.
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClientBuilder::new()
            .config(config.provider.clone())
            .build()?;
        Ok(Self::with_provider(
            config,
            Catalog::default(),
            Arc::new(api),
            io::stdout(),
        ))
    }
}

impl<W: io::Write> App<W> {
    /// Create the application with an explicit provider and output.
    pub fn with_provider(
        config: Config,
        catalog: Catalog,
        provider: Arc<dyn QuoteProvider>,
        out: W,
    ) -> Self {
        let ui = Ui::new(out, &config.display);
        Self {
            config,
            catalog,
            client: QuoteClient::new(provider),
            ui,
            state: PollState::Running,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Consume the app, returning its output writer.
    pub fn into_writer(self) -> W {
        self.ui.into_writer()
    }

    /// Run until Ctrl+C.
    pub async fn run(&mut self) -> Result<()> {
        self.run_until(ctrl_c()).await
    }

    /// Run until `shutdown` resolves.
    ///
    /// Shutdown wins over whatever the loop is doing at that moment;
    /// in-flight requests are dropped.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        info!("Starting monitor");
        self.ui
            .notice("Starting Argentine market and exchange rate monitor...")?;

        tokio::pin!(shutdown);
        while self.state == PollState::Running {
            let stop = tokio::select! {
                _ = &mut shutdown => true,
                _ = self.tick() => false,
            };
            if stop {
                self.state = PollState::Stopped;
            }
        }

        info!("Monitor stopped");
        self.ui.notice("\nMonitoring stopped.")?;
        Ok(())
    }

    /// One cycle followed by the matching wait.
    async fn tick(&mut self) {
        let delay = match self.run_cycle().await {
            Ok(_) => self.config.poll.interval(),
            Err(e) => {
                error!("Poll cycle failed: {}", e);
                let delay = self.config.poll.retry_delay();
                let _ = self.ui.error_notice(&format!(
                    "\nUnexpected error: {}\nRetrying in {} seconds...",
                    e,
                    delay.as_secs()
                ));
                delay
            }
        };
        sleep(delay).await;
    }

    /// Fetch, convert and render a single cycle.
    pub async fn run_cycle(&mut self) -> Result<DisplayTable> {
        let forex = fetch_forex_rates(&self.client, &self.catalog.forex).await;
        let rate = official_rate(&forex, &self.catalog.conversion_symbol);
        if rate.is_none() {
            debug!("No official dollar rate this cycle, showing NYSE prices in dollars");
        }

        let equities = fetch_equities(
            &self.client,
            &self.catalog.equities,
            rate,
            self.config.fetch.max_concurrency,
        )
        .await;

        debug!(
            "Cycle fetched {}/{} forex, {}/{} equities",
            forex.len(),
            self.catalog.forex.len(),
            equities.len(),
            self.catalog.equities.len()
        );

        let table = DisplayTable::new(forex, equities);
        self.ui.render(&table)?;
        Ok(table)
    }
}

async fn sleep(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Resolves on Ctrl+C. Never resolves if the handler can't be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::fetch::test_support::TableProvider;
    use rust_decimal_macros::dec;

    fn test_config() -> Config {
        Config {
            display: DisplayConfig {
                color: false,
                clear_screen: false,
                ..DisplayConfig::default()
            },
            ..Config::default()
        }
    }

    fn app(provider: TableProvider) -> App<Vec<u8>> {
        App::with_provider(
            test_config(),
            Catalog::default(),
            Arc::new(provider),
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn test_cycle_converts_with_official_rate() {
        let mut app = app(
            TableProvider::default()
                .with("ARS=X", dec!(1000.0), dec!(990.0))
                .with("GGAL", dec!(10.0), dec!(9.5)),
        );

        let table = app.run_cycle().await.unwrap();

        assert_eq!(table.forex.len(), 1);
        assert_eq!(table.equities.len(), 1);
        assert_eq!(table.equities[0].price, dec!(10000.0));
        assert_eq!(table.equities[0].change, dec!(500.0));
    }

    #[tokio::test]
    async fn test_cycle_without_rate_keeps_dollars() {
        let mut app = app(TableProvider::default().with("GGAL", dec!(10.0), dec!(9.5)));

        let table = app.run_cycle().await.unwrap();

        assert!(table.forex.is_empty());
        assert_eq!(table.equities[0].price, dec!(10.0));
        let output = String::from_utf8(app.into_writer()).unwrap();
        assert!(output.contains("No exchange rate data available"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_shutdown() {
        let mut app = app(TableProvider::default().with("ARS=X", dec!(1000), dec!(1000)));

        app.run_until(tokio::time::sleep(Duration::from_secs(12)))
            .await
            .unwrap();

        assert_eq!(app.state(), PollState::Stopped);
        let output = String::from_utf8(app.into_writer()).unwrap();
        // Cycles at t=0, 5 and 10
        assert_eq!(output.matches("=== EXCHANGE RATES ===").count(), 3);
        assert!(output.trim_end().ends_with("Monitoring stopped."));
    }

    /// Writer that fails on every write.
    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_cycle_does_not_end_loop() {
        let provider = Arc::new(TableProvider::default());
        let mut app = App::with_provider(
            test_config(),
            Catalog::default(),
            provider.clone(),
            BrokenPipe,
        );

        assert!(app.run_cycle().await.is_err());

        // Startup notice fails on a broken writer, so drive ticks directly.
        let shutdown = tokio::time::sleep(Duration::from_secs(11));
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = app.tick() => {}
            }
        }

        // One direct cycle plus retries at t=0, 5 and 10
        let forex_calls = provider
            .calls
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.as_str() == "ARS=X")
            .count();
        assert_eq!(forex_calls, 4);
    }
}
