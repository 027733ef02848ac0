use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market data quote.
///
/// The valuation engine only consumes closing prices, so a quote carries a
/// timestamp and a close rather than full OHLCV bars.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// Timestamp of the quote
    pub timestamp: DateTime<Utc>,

    /// Closing/current price
    pub close: Decimal,

    /// Quote currency
    pub currency: String,

    /// Source of the quote (YAHOO, etc.)
    pub source: String,
}

impl Quote {
    /// Create a new quote.
    pub fn new(timestamp: DateTime<Utc>, close: Decimal, currency: String, source: String) -> Self {
        Self {
            timestamp,
            close,
            currency,
            source,
        }
    }

    /// The calendar date of this observation, in UTC.
    ///
    /// Daily valuation compares quotes by naive calendar date.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
