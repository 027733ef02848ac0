//! Sector allocation valuator - current value bucketed by profile sector.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use log::debug;
use rust_decimal::Decimal;

use super::allocation_model::{PortfolioAllocation, SectorSlice};
use crate::constants::UNKNOWN_SECTOR;
use crate::portfolio::holdings::aggregate_holdings;
use crate::portfolio::percent_of;
use crate::quotes::QuoteServiceTrait;
use crate::transactions::Transaction;

/// Groups the portfolio's current value by the sector each ticker's
/// profile reports.
pub struct AllocationService {
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl AllocationService {
    pub fn new(quote_service: Arc<dyn QuoteServiceTrait>) -> Self {
        Self { quote_service }
    }

    /// Current portfolio value grouped by sector.
    ///
    /// Price and profile lookups run concurrently per ticker. A failed
    /// price values the position at zero, same as the snapshot valuator;
    /// a failed or sector-less profile buckets it under "Unknown". Slices
    /// come back sorted by value, largest first.
    pub async fn calculate_allocation(
        &self,
        transactions: &[Transaction],
    ) -> PortfolioAllocation {
        let holdings = aggregate_holdings(transactions);
        debug!("Computing sector allocation for {} tickers", holdings.len());

        let lookups = holdings.values().map(|holding| async move {
            let (price, profile) = tokio::join!(
                self.quote_service.get_current_price(&holding.ticker),
                self.quote_service.get_profile(&holding.ticker),
            );

            let sector = match profile {
                Ok(profile) => profile
                    .sector
                    .unwrap_or_else(|| UNKNOWN_SECTOR.to_string()),
                Err(e) => {
                    debug!(
                        "Profile lookup failed for {}: {}; bucketing under {}",
                        holding.ticker, e, UNKNOWN_SECTOR
                    );
                    UNKNOWN_SECTOR.to_string()
                }
            };
            let value = holding.shares * price.unwrap_or(Decimal::ZERO);
            (sector, value)
        });

        let mut by_sector: HashMap<String, Decimal> = HashMap::new();
        for (sector, value) in join_all(lookups).await {
            *by_sector.entry(sector).or_default() += value;
        }

        let total_value: Decimal = by_sector.values().copied().sum();

        let mut slices: Vec<SectorSlice> = by_sector
            .into_iter()
            .map(|(name, value)| SectorSlice {
                name,
                value,
                percent: percent_of(value, total_value),
            })
            .collect();
        slices.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));

        PortfolioAllocation {
            by_sector: slices,
            total_value,
        }
    }
}
