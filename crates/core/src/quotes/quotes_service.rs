//! Quote service - bounded, degrading access to the market data provider.
//!
//! Every provider call runs under a timeout, and transient failures get one
//! retry after a short backoff. Anything that still fails degrades according
//! to the trait contract instead of blocking or failing the request.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;

use trackfolio_market_data::{
    MarketDataError, MarketDataProvider, Quote, RetryClass, StockProfile,
};

use super::quotes_traits::QuoteServiceTrait;

/// Delay before the single retry of a transient provider failure.
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Quote access with per-call timeout and bounded retry.
pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
    timeout: Duration,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Run a provider call under the configured timeout.
    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, MarketDataError>>,
    ) -> Result<T, MarketDataError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(MarketDataError::Timeout {
                provider: self.provider.id().to_string(),
            }),
        }
    }

    /// Run a provider call, retrying once on transient errors.
    async fn with_retry<T, F, Fut>(&self, ticker: &str, op: F) -> Result<T, MarketDataError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, MarketDataError>>,
    {
        match self.bounded(op()).await {
            Err(e) if e.retry_class() == RetryClass::WithBackoff => {
                debug!("Retrying lookup for {} after transient error: {}", ticker, e);
                tokio::time::sleep(RETRY_BACKOFF).await;
                self.bounded(op()).await
            }
            other => other,
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_current_price(&self, ticker: &str) -> Option<Decimal> {
        match self
            .with_retry(ticker, || self.provider.get_latest_quote(ticker))
            .await
        {
            Ok(quote) => Some(quote.close),
            Err(e) => {
                warn!("Current price lookup failed for {}: {}", ticker, e);
                None
            }
        }
    }

    async fn get_daily_history(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Quote> {
        let start_dt = Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0).unwrap_or_default());
        let end_dt = Utc.from_utc_datetime(&end.and_hms_opt(23, 59, 59).unwrap_or_default());

        match self
            .with_retry(ticker, || {
                self.provider.get_historical_quotes(ticker, start_dt, end_dt)
            })
            .await
        {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!(
                    "History lookup failed for {} ({} to {}): {}",
                    ticker, start, end, e
                );
                Vec::new()
            }
        }
    }

    async fn get_profile(&self, ticker: &str) -> Result<StockProfile, MarketDataError> {
        self.with_retry(ticker, || self.provider.get_profile(ticker))
            .await
    }
}
