//! Snapshot valuation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ticker's valued position within a portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub ticker: String,
    pub shares: Decimal,
    /// Cost basis per share
    pub avg_cost: Decimal,
    /// Total amount paid for the position
    pub cost_amount: Decimal,
    /// Latest price, 0 when the lookup degraded
    pub current_price: Decimal,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
    /// Share of total portfolio value, 0-100
    pub weight: Decimal,
}

/// Point-in-time portfolio valuation: totals plus every valued position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_return: Decimal,
    pub total_return_percent: Decimal,
    pub num_positions: usize,
    pub positions: Vec<Position>,
}
