use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use trackfolio_market_data::{MarketDataError, Quote, StockProfile};

/// Price lookup contract consumed by the valuators.
///
/// Quote and history lookups degrade: failures and timeouts come back as
/// `None` or an empty series so a single bad ticker never aborts an
/// aggregate computation. Profile lookups propagate their error because the
/// single-stock endpoint needs to distinguish "unknown symbol" from
/// "provider down".
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Latest price for a ticker, or `None` when the lookup fails.
    async fn get_current_price(&self, ticker: &str) -> Option<Decimal>;

    /// Daily closing quotes covering `[start, end]`, ascending; empty when
    /// the lookup fails or the range has no data.
    async fn get_daily_history(&self, ticker: &str, start: NaiveDate, end: NaiveDate)
        -> Vec<Quote>;

    /// Profile for a ticker (name, sector, market cap, current price).
    async fn get_profile(&self, ticker: &str) -> Result<StockProfile, MarketDataError>;
}
