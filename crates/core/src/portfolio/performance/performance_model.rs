//! Daily performance series model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio value for each calendar day of an inclusive date range.
///
/// `dates` and `values` are parallel arrays in ascending date order, one
/// entry per day. The split shape serializes straight into the charting
/// payload the frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Decimal>,
}

impl PerformanceSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
