//! Sector allocation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate current value of every position sharing one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSlice {
    pub name: String,
    pub value: Decimal,
    /// Share of total portfolio value, 0-100
    pub percent: Decimal,
}

/// Current portfolio value grouped by profile sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub by_sector: Vec<SectorSlice>,
    pub total_value: Decimal,
}
