//! Data conversion from provider quotes to display records.

use super::QuoteInfo;
use crate::state::{ExchangeRate, Market, QuoteRequest, QuoteResult};
use tracing::warn;

/// Converts provider responses to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a provider quote for `request` into a [`QuoteResult`].
    ///
    /// Returns `None` when the quote carries no current price, or when its
    /// change cannot be represented. A missing previous close means no
    /// change; a missing volume means zero.
    pub fn convert_quote(request: &QuoteRequest, info: &QuoteInfo) -> Option<QuoteResult> {
        let price = info.regular_market_price?;
        let previous_close = info.previous_close_or(price);

        let display_name = if request.display_name.is_empty() {
            info.company_name().to_string()
        } else {
            request.display_name.clone()
        };

        let quote = QuoteResult::new(
            request.symbol.clone(),
            display_name,
            price,
            previous_close,
            info.regular_market_volume.unwrap_or(0),
            request.market,
        );
        if quote.is_none() {
            warn!(
                "Dropping {}: change from {} to {} overflows",
                request.symbol, previous_close, price
            );
        }
        quote
    }

    /// Convert, then express NYSE prices in local currency when a rate is known.
    pub fn convert_equity(
        request: &QuoteRequest,
        info: &QuoteInfo,
        rate: Option<ExchangeRate>,
    ) -> Option<QuoteResult> {
        let quote = Self::convert_quote(request, info)?;
        match (request.market, rate) {
            (Market::Nyse, Some(rate)) => {
                let price = quote.price;
                let converted = rate.convert(quote);
                if converted.is_none() {
                    warn!(
                        "Dropping {}: price {} at rate {} overflows",
                        request.symbol, price, rate.0
                    );
                }
                converted
            }
            _ => Some(quote),
        }
    }
}
