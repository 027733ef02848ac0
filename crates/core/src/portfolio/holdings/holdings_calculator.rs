//! Pure aggregation of transactions into per-ticker holdings.

use std::collections::HashMap;

use super::holdings_model::Holding;
use crate::transactions::Transaction;

/// Fold a transaction list into per-ticker holdings.
///
/// Sums shares and cost per ticker. Order-independent and side-effect-free;
/// an empty input yields an empty map.
pub fn aggregate_holdings(transactions: &[Transaction]) -> HashMap<String, Holding> {
    let mut holdings: HashMap<String, Holding> = HashMap::new();

    for transaction in transactions {
        holdings
            .entry(transaction.ticker.clone())
            .or_insert_with(|| Holding::new(transaction.ticker.clone()))
            .add_lot(transaction.shares, transaction.purchase_price);
    }

    holdings
}
