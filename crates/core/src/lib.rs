//! Trackfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the portfolio valuation engine: the append-only
//! transaction log and its ingestion service, quote access with
//! degrade-to-zero semantics, and the valuators (snapshot summary, sector
//! allocation, daily performance series). It is storage-agnostic; the
//! transaction store is a trait with an in-memory implementation.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod quotes;
pub mod transactions;

// Re-export common types from the portfolio modules
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
