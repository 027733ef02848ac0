//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `quote` - A single daily price observation (Quote)
//! - `profile` - Stock profile data (StockProfile)

mod profile;
mod quote;

pub use profile::StockProfile;
pub use quote::Quote;
