//! Holdfolio Core - Holdings model, portfolio aggregation and display formatting.
//!
//! This crate turns the raw records delivered by `holdfolio-holdings-api`
//! into domain [`Holding`]s, derives a [`PortfolioSummary`] from them and
//! formats monetary values for display. It knows nothing about terminals or
//! HTTP beyond the [`HoldingsApi`](holdfolio_holdings_api::HoldingsApi) trait.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolio;
pub mod utils;

// Re-export common types from holdings and portfolio modules
pub use holdings::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
