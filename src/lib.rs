//! # adr-watch - Argentine ADR & Exchange Rate Monitor
//!
//! A console monitor that polls Yahoo Finance for the peso exchange rates
//! and the Argentine companies listed on the NYSE, converts their prices to
//! pesos, and redraws a table every few seconds.
//!
//! ## Architecture
//!
//! Data flows one way, from provider to screen:
//!
//! - **API**: Yahoo Finance client with retry/backoff, plus a
//!   failure-absorbing quote client
//! - **Fetch**: sequential forex fetch and bounded-concurrency equity fetch
//! - **State**: quote records and the per-cycle display table
//! - **UI**: formatting, coloring and full-screen rendering
//! - **App**: the poll loop
//! - **Config**: tunables and the fixed symbol catalog

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod state;
pub mod ui;

pub use app::{App, PollState};
pub use config::{Catalog, Config};
pub use error::{Error, Result};
