//! Holding domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accumulated shares and cost basis for one ticker within a portfolio.
///
/// Holdings are ephemeral: built fresh from the transaction log on every
/// valuation call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: String,
    pub shares: Decimal,
    pub total_cost: Decimal,
}

impl Holding {
    /// An empty holding for a ticker.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            shares: Decimal::ZERO,
            total_cost: Decimal::ZERO,
        }
    }

    /// Fold one bought lot into the holding.
    pub fn add_lot(&mut self, shares: Decimal, price_per_share: Decimal) {
        self.shares += shares;
        self.total_cost += shares * price_per_share;
    }

    /// Cost basis per share; 0 when no shares are held.
    pub fn average_cost(&self) -> Decimal {
        if self.shares.is_zero() {
            Decimal::ZERO
        } else {
            self.total_cost / self.shares
        }
    }
}
