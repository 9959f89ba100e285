//! Fixed symbol catalog.
//!
//! The tracked instruments are compiled in. A [`Catalog`] is built once at
//! startup and only ever read afterwards.

use crate::state::{Market, QuoteRequest};

/// Forex pairs: (symbol, display name).
const FOREX_PAIRS: &[(&str, &str)] = &[("ARS=X", "Dólar Oficial"), ("EURARS=X", "Euro")];

/// Symbol of the pair whose price converts NYSE prices into pesos.
pub const OFFICIAL_DOLLAR: &str = "ARS=X";

/// Argentine ADRs listed on the NYSE.
const EQUITIES: &[&str] = &[
    // Banks and financials
    "GGAL",
    "BMA",
    "BBAR",
    "SUPV",
    "BSMX",
    // Energy and oil
    "YPF",
    "PAM",
    "EDN",
    // Tech and telecom
    "TEO",
    "GLOB",
    "MELI",
    // Industry and materials
    "TS",
    "TX",
    // Real estate
    "IRS",
    "IRCP",
    // Agriculture
    "CRESY",
    // Infrastructure
    "TGS",
    "VSH",
];

/// The immutable set of instruments polled every cycle.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Currency pairs, fetched sequentially.
    pub forex: Vec<QuoteRequest>,
    /// Equities, fetched concurrently.
    pub equities: Vec<QuoteRequest>,
    /// Forex symbol used as the peso conversion rate.
    pub conversion_symbol: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            forex: FOREX_PAIRS
                .iter()
                .map(|(symbol, name)| QuoteRequest::new(*symbol, *name, Market::Other))
                .collect(),
            equities: EQUITIES
                .iter()
                .map(|symbol| QuoteRequest::new(*symbol, "", Market::Nyse))
                .collect(),
            conversion_symbol: OFFICIAL_DOLLAR.to_string(),
        }
    }
}
