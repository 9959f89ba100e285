//! Data model shared by the fetchers and the renderer.
//!
//! Every poll cycle builds fresh values of these types; nothing here
//! outlives a cycle except the catalog's [`QuoteRequest`]s.

mod quote_state;

pub use quote_state::{
    DisplayTable, ExchangeRate, Market, QuoteRequest, QuoteResult, change_percent,
};
