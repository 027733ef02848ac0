use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use trackfolio_core::portfolio::{AllocationService, PerformanceService, SummaryService};
use trackfolio_core::quotes::{QuoteService, QuoteServiceTrait};
use trackfolio_core::transactions::{
    InMemoryTransactionStore, TransactionService, TransactionServiceTrait,
};
use trackfolio_market_data::{MarketDataProvider, YahooProvider};

use crate::config::Config;

pub struct AppState {
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub summary_service: Arc<SummaryService>,
    pub performance_service: Arc<PerformanceService>,
    pub allocation_service: Arc<AllocationService>,
    pub started_at: Instant,
}

pub fn init_tracing() {
    let log_format = std::env::var("TF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(YahooProvider::new()?);
    Ok(build_state_with(config, provider))
}

/// Assemble the service graph around the given market data provider.
///
/// Split from [`build_state`] so tests can swap in a scripted provider.
pub fn build_state_with(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
) -> Arc<AppState> {
    let store = Arc::new(InMemoryTransactionStore::new());
    let transaction_service: Arc<dyn TransactionServiceTrait> =
        Arc::new(TransactionService::new(store));

    let quote_service: Arc<dyn QuoteServiceTrait> =
        Arc::new(QuoteService::new(provider, config.quote_timeout));

    Arc::new(AppState {
        transaction_service,
        summary_service: Arc::new(SummaryService::new(quote_service.clone())),
        performance_service: Arc::new(PerformanceService::new(quote_service.clone())),
        allocation_service: Arc::new(AllocationService::new(quote_service.clone())),
        quote_service,
        started_at: Instant::now(),
    })
}
