//! Summary module - point-in-time portfolio valuation at current prices.

mod summary_model;
mod summary_service;

#[cfg(test)]
mod summary_service_tests;

pub use summary_model::{PortfolioSummary, Position};
pub use summary_service::SummaryService;
