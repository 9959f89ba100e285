//! Provider quote payloads.

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Current quote information for one symbol, as reported by the provider.
///
/// Everything is optional on the wire. A quote without
/// `regular_market_price` is unusable and gets dropped by the client.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInfo {
    pub regular_market_price: Option<Decimal>,
    pub regular_market_previous_close: Option<Decimal>,
    pub previous_close: Option<Decimal>,
    pub chart_previous_close: Option<Decimal>,
    pub regular_market_volume: Option<u64>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

impl QuoteInfo {
    /// Quote with only a current price set.
    pub fn with_price(price: Decimal) -> Self {
        Self {
            regular_market_price: Some(price),
            ..Self::default()
        }
    }

    /// Best available previous close, or `fallback` when none was reported.
    pub fn previous_close_or(&self, fallback: Decimal) -> Decimal {
        self.regular_market_previous_close
            .or(self.previous_close)
            .or(self.chart_previous_close)
            .unwrap_or(fallback)
    }

    /// Short name, else long name, else empty.
    pub fn company_name(&self) -> &str {
        [&self.short_name, &self.long_name]
            .into_iter()
            .flatten()
            .map(|name| name.trim())
            .find(|name| !name.is_empty())
            .unwrap_or("")
    }

    /// Extract the quote from a `v8/finance/chart` response body.
    pub fn from_chart_json(body: &str) -> Result<Self> {
        let response: ChartResponse = serde_json::from_str(body)?;
        let chart = response.chart;

        if let Some(meta) = chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(|result| result.meta)
        {
            return Ok(meta);
        }

        Err(match chart.error {
            Some(err) => Error::missing_data(format!(
                "{}: {}",
                err.code.unwrap_or_default(),
                err.description.unwrap_or_default()
            )),
            None => Error::missing_data("chart response has no result"),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: QuoteInfo,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}
