//! Trackfolio Market Data Crate
//!
//! This crate provides market data fetching for the trackfolio API.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Latest quotes for valuation snapshots
//! - Historical daily quotes for performance series
//! - Stock profiles (name, sector, industry, market cap)
//!
//! Providers implement the [`MarketDataProvider`] trait; the shipped
//! implementation is [`YahooProvider`], which uses the Yahoo Finance chart
//! API for quotes and the quoteSummary API for profiles.
//!
//! # Core Types
//!
//! - [`Quote`] - A single price observation (timestamp + closing price)
//! - [`StockProfile`] - Provider-sourced profile data (name, sector, etc.)
//! - [`MarketDataError`] - Error taxonomy with retry classification

pub mod errors;
pub mod models;
pub mod provider;

// Re-export the public surface
pub use errors::{MarketDataError, RetryClass};
pub use models::{Quote, StockProfile};
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
