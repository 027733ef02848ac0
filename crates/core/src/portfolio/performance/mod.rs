//! Performance module - daily portfolio value over a date range.

mod performance_model;
mod performance_service;


pub use performance_model::PerformanceSeries;
pub use performance_service::PerformanceService;
