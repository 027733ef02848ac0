//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance provider implementation
//!
//! Providers receive plain ticker symbols; there is no cross-provider
//! symbol resolution because the API tracks US-listed equities under their
//! native symbols.

mod traits;

pub mod yahoo;

// Re-exports
pub use traits::MarketDataProvider;
