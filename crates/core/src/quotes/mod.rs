//! Quotes module - bounded price lookup over the market data provider.

mod quotes_service;
mod quotes_traits;


pub use quotes_service::QuoteService;
pub use quotes_traits::QuoteServiceTrait;
