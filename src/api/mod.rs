//! Quote provider integration.
//!
//! [`ApiClient`] talks HTTP to Yahoo Finance and retries transient
//! failures. [`QuoteClient`] sits on top of any [`QuoteProvider`] and turns
//! every failure into "no data for this symbol", so one bad ticker never
//! takes down a whole batch.

mod client;
mod converter;
mod quote;
mod retry;

pub use client::{ApiClient, ApiClientBuilder};
pub use converter::DataConverter;
pub use quote::QuoteInfo;
pub use retry::RetryPolicy;

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Source of current quote information.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch current quote info for `symbol`.
    async fn quote_info(&self, symbol: &str) -> Result<QuoteInfo>;
}

/// Failure-absorbing quote lookups shared by the fetchers.
#[derive(Clone)]
pub struct QuoteClient {
    provider: Arc<dyn QuoteProvider>,
}

impl QuoteClient {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    /// Fetch a usable quote for `symbol`.
    ///
    /// Returns `None`, after logging why, if the provider fails or the quote
    /// has no current price.
    pub async fn fetch_quote(&self, symbol: &str) -> Option<QuoteInfo> {
        match self.provider.quote_info(symbol).await {
            Ok(info) if info.regular_market_price.is_some() => Some(info),
            Ok(_) => {
                warn!("Quote for {} has no regularMarketPrice", symbol);
                None
            }
            Err(e) => {
                warn!("Failed to fetch quote for {}: {}", symbol, e);
                None
            }
        }
    }
}
