//! Snapshot valuator - holdings priced at the latest quote.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::summary_model::{PortfolioSummary, Position};
use crate::portfolio::holdings::{aggregate_holdings, Holding};
use crate::portfolio::percent_of;
use crate::quotes::QuoteServiceTrait;
use crate::transactions::Transaction;

/// Values the current holdings of a portfolio at latest market prices.
pub struct SummaryService {
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl SummaryService {
    pub fn new(quote_service: Arc<dyn QuoteServiceTrait>) -> Self {
        Self { quote_service }
    }

    /// Value the portfolio at current prices.
    ///
    /// Runs one price lookup per distinct ticker concurrently. A failed
    /// lookup prices that ticker at zero; the summary itself never fails.
    /// Positions come back sorted by current value, largest first.
    pub async fn calculate_summary(&self, transactions: &[Transaction]) -> PortfolioSummary {
        let holdings = aggregate_holdings(transactions);
        debug!(
            "Valuing snapshot: {} transactions across {} tickers",
            transactions.len(),
            holdings.len()
        );

        let lookups = holdings.values().map(|holding| async move {
            let price = self.quote_service.get_current_price(&holding.ticker).await;
            (holding, price)
        });

        let mut positions: Vec<Position> = join_all(lookups)
            .await
            .into_iter()
            .map(|(holding, price)| value_position(holding, price))
            .collect();

        let total_value: Decimal = positions.iter().map(|p| p.current_value).sum();
        let total_cost: Decimal = positions.iter().map(|p| p.cost_amount).sum();
        let total_return = total_value - total_cost;

        // Weights need the grand total, so they get a second pass.
        for position in &mut positions {
            position.weight = percent_of(position.current_value, total_value);
        }

        positions.sort_by(|a, b| {
            b.current_value
                .cmp(&a.current_value)
                .then_with(|| a.ticker.cmp(&b.ticker))
        });

        PortfolioSummary {
            total_value,
            total_cost,
            total_return,
            total_return_percent: percent_of(total_return, total_cost),
            num_positions: positions.len(),
            positions,
        }
    }
}

fn value_position(holding: &Holding, price: Option<Decimal>) -> Position {
    let current_price = price.unwrap_or_else(|| {
        warn!(
            "No usable price for {}; valuing position at zero",
            holding.ticker
        );
        Decimal::ZERO
    });
    let current_value = holding.shares * current_price;
    let gain_loss = current_value - holding.total_cost;

    Position {
        ticker: holding.ticker.clone(),
        shares: holding.shares,
        avg_cost: holding.average_cost(),
        cost_amount: holding.total_cost,
        current_price,
        current_value,
        gain_loss,
        gain_loss_percent: percent_of(gain_loss, holding.total_cost),
        // Filled in once the grand total is known
        weight: Decimal::ZERO,
    }
}
