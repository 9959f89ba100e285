//! Per-cycle quote fetching.
//!
//! Forex pairs are fetched one after another; equities fan out over a
//! bounded number of concurrent requests. Both return only the quotes that
//! came back usable, so an empty list is a normal outcome.

mod equity;
mod forex;

pub use equity::fetch_equities;
pub use forex::{fetch_forex_rates, official_rate};
