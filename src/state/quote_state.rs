//! Quote-related state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Listing venue of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Market {
    /// New York Stock Exchange; prices are quoted in dollars.
    Nyse,
    #[default]
    Other,
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nyse => write!(f, "NYSE"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

/// An instrument to poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Provider ticker symbol.
    pub symbol: String,
    /// Name shown instead of the provider's company name (may be empty).
    pub display_name: String,
    /// Listing market.
    pub market: Market,
}

impl QuoteRequest {
    pub fn new(symbol: impl Into<String>, display_name: impl Into<String>, market: Market) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            market,
        }
    }
}

/// A fetched quote with derived change fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub symbol: String,
    pub display_name: String,
    pub price: Decimal,
    pub previous_close: Decimal,
    /// `price - previous_close`.
    pub change: Decimal,
    /// Change relative to the previous close, in percent. Zero when the
    /// previous close is zero.
    pub change_percent: Decimal,
    pub volume: u64,
    pub market: Market,
}

impl QuoteResult {
    /// Build a result, deriving `change` and `change_percent`.
    ///
    /// Returns `None` if the change does not fit in a [`Decimal`].
    pub fn new(
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        price: Decimal,
        previous_close: Decimal,
        volume: u64,
        market: Market,
    ) -> Option<Self> {
        let change = price.checked_sub(previous_close)?;
        Some(Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            price,
            previous_close,
            change,
            change_percent: change_percent(change, previous_close),
            volume,
            market,
        })
    }
}

/// Percent change, or zero when there is no previous close to compare with.
pub fn change_percent(change: Decimal, previous_close: Decimal) -> Decimal {
    if previous_close.is_zero() {
        return Decimal::ZERO;
    }
    change
        .checked_div(previous_close)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Pesos per dollar for the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate(pub Decimal);

impl ExchangeRate {
    /// Express a dollar-quoted result in local currency.
    ///
    /// Only absolute amounts are scaled; `change_percent` is a ratio and
    /// stays as fetched. Returns `None` if a scaled amount overflows.
    pub fn convert(&self, mut quote: QuoteResult) -> Option<QuoteResult> {
        quote.price = quote.price.checked_mul(self.0)?;
        quote.previous_close = quote.previous_close.checked_mul(self.0)?;
        quote.change = quote.change.checked_mul(self.0)?;
        Some(quote)
    }
}

/// One cycle's worth of results, ready for display.
#[derive(Debug, Clone, Default)]
pub struct DisplayTable {
    pub forex: Vec<QuoteResult>,
    pub equities: Vec<QuoteResult>,
}

impl DisplayTable {
    pub fn new(forex: Vec<QuoteResult>, equities: Vec<QuoteResult>) -> Self {
        Self { forex, equities }
    }

    /// NYSE equities in ascending symbol order.
    pub fn nyse_equities(&self) -> Vec<&QuoteResult> {
        let mut rows: Vec<&QuoteResult> = self
            .equities
            .iter()
            .filter(|q| q.market == Market::Nyse)
            .collect();
        rows.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_change_fields() {
        let quote = QuoteResult::new(
            "ARS=X",
            "Dólar Oficial",
            dec!(1000.0),
            dec!(990.0),
            0,
            Market::Other,
        )
        .unwrap();
        assert_eq!(quote.change, dec!(10.0));
        assert_eq!(quote.change_percent.round_dp(4), dec!(1.0101));
    }

    #[test]
    fn test_zero_previous_close_has_zero_percent() {
        let quote = QuoteResult::new("X", "", dec!(12.5), Decimal::ZERO, 0, Market::Nyse).unwrap();
        assert_eq!(quote.change, dec!(12.5));
        assert_eq!(quote.change_percent, Decimal::ZERO);
    }

    #[test]
    fn test_negative_change() {
        let quote = QuoteResult::new("YPF", "", dec!(19.0), dec!(20.0), 0, Market::Nyse).unwrap();
        assert_eq!(quote.change, dec!(-1.0));
        assert_eq!(quote.change_percent, dec!(-5));
    }

    #[test]
    fn test_conversion_keeps_percent() {
        // GGAL 10.0 vs 9.5 converted at 1000 pesos per dollar
        let quote =
            QuoteResult::new("GGAL", "", dec!(10.0), dec!(9.5), 1_000, Market::Nyse).unwrap();
        let converted = ExchangeRate(dec!(1000.0)).convert(quote.clone()).unwrap();

        assert_eq!(converted.price, dec!(10000.0));
        assert_eq!(converted.change, dec!(500.0));
        assert_eq!(converted.previous_close, dec!(9500.0));
        assert_eq!(converted.change_percent, quote.change_percent);
        assert_eq!(converted.change_percent.round_dp(3), dec!(5.263));
        assert_eq!(converted.volume, 1_000);
    }

    #[test]
    fn test_change_overflow_is_none() {
        assert!(QuoteResult::new("X", "", Decimal::MAX, Decimal::MIN, 0, Market::Nyse).is_none());
    }

    #[test]
    fn test_conversion_overflow_is_none() {
        // 1e20 dollars at 1e10 pesos each is past Decimal::MAX
        let price = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
        let quote = QuoteResult::new("GGAL", "", price, Decimal::ONE, 0, Market::Nyse).unwrap();
        assert!(ExchangeRate(dec!(10000000000)).convert(quote).is_none());
    }

    #[test]
    fn test_nyse_equities_sorted_and_filtered() {
        let table = DisplayTable::new(
            Vec::new(),
            vec![
                QuoteResult::new("YPF", "", dec!(1), dec!(1), 0, Market::Nyse).unwrap(),
                QuoteResult::new("BMA", "", dec!(1), dec!(1), 0, Market::Nyse).unwrap(),
                QuoteResult::new("AAA", "", dec!(1), dec!(1), 0, Market::Other).unwrap(),
                QuoteResult::new("GGAL", "", dec!(1), dec!(1), 0, Market::Nyse).unwrap(),
            ],
        );

        let symbols: Vec<&str> = table
            .nyse_equities()
            .iter()
            .map(|q| q.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["BMA", "GGAL", "YPF"]);
    }
}
