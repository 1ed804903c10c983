//! Holdfolio Holdings API Crate
//!
//! This crate fetches a user's stock holdings from the remote holdings
//! endpoint and decodes them into wire-level records.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  UserHoldingsApi | --> |  NetworkClient   | --> |    Endpoint      |
//! +------------------+     +------------------+     +------------------+
//!          |                        |
//!          v                        v
//! +------------------+     +------------------+
//! | HoldingsResponse |     |    ApiError      |
//! +------------------+     +------------------+
//! ```
//!
//! A fetch is a single GET request. There is no retry, caching or
//! pagination; failures are surfaced as an [`ApiError`] which can be
//! classified with [`ApiError::category`].

pub mod client;
pub mod endpoint;
pub mod errors;
pub mod holdings;
pub mod models;

pub use client::{HttpNetworkClient, NetworkClient, DEFAULT_TIMEOUT};
pub use endpoint::{Endpoint, HttpMethod};
pub use errors::{ApiError, ErrorCategory};
pub use holdings::{HoldingsApi, HoldingsEndpoint, UserHoldingsApi, DEFAULT_HOLDINGS_URL};
pub use models::{HoldingRecord, HoldingsData, HoldingsResponse};
