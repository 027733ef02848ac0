//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;
use crate::models::{Quote, StockProfile};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source. The
/// quote service treats providers as unreliable: any error or timeout
/// degrades the affected ticker instead of failing the request.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and for
    /// tagging quotes with their source.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    ///
    /// Returns the most recent quote on success, or a `MarketDataError`
    /// on failure.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch historical daily quotes for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The ticker symbol
    /// * `start` - Start of the date range (inclusive)
    /// * `end` - End of the date range (inclusive)
    ///
    /// # Returns
    ///
    /// A vector of daily quotes ordered by timestamp ascending, or a
    /// `MarketDataError` on failure. An empty range yields
    /// `MarketDataError::NoDataForRange` rather than an empty vector.
    async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError>;

    /// Fetch profile information for a symbol.
    ///
    /// Returns the stock profile (name, sector, industry, market cap,
    /// current price), or a `MarketDataError` on failure.
    async fn get_profile(&self, symbol: &str) -> Result<StockProfile, MarketDataError>;
}
