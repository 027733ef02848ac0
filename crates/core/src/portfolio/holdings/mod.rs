//! Holdings module - pure aggregation of the transaction log.

mod holdings_calculator;
mod holdings_model;

#[cfg(test)]
mod holdings_calculator_tests;

pub use holdings_calculator::aggregate_holdings;
pub use holdings_model::Holding;
