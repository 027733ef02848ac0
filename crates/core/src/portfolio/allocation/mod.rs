//! Allocation module - portfolio value grouped by sector.

mod allocation_model;
mod allocation_service;


pub use allocation_model::{PortfolioAllocation, SectorSlice};
pub use allocation_service::AllocationService;
