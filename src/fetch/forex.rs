//! Exchange rate fetching.

use crate::api::{DataConverter, QuoteClient};
use crate::state::{ExchangeRate, QuoteRequest, QuoteResult};
use rust_decimal::Decimal;

/// Fetch every pair in order, skipping the ones that fail.
pub async fn fetch_forex_rates(client: &QuoteClient, pairs: &[QuoteRequest]) -> Vec<QuoteResult> {
    let mut rates = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let Some(info) = client.fetch_quote(&pair.symbol).await else {
            continue;
        };
        if let Some(rate) = DataConverter::convert_quote(pair, &info) {
            rates.push(rate);
        }
    }

    rates
}

/// Conversion rate from the pair named `symbol`, if it was fetched.
///
/// A non-positive price is treated as no rate.
pub fn official_rate(rates: &[QuoteResult], symbol: &str) -> Option<ExchangeRate> {
    rates
        .iter()
        .find(|rate| rate.symbol == symbol)
        .map(|rate| rate.price)
        .filter(|price| *price > Decimal::ZERO)
        .map(ExchangeRate)
}
