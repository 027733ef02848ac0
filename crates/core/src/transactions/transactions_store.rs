//! In-memory transaction store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::transactions_model::Transaction;
use super::transactions_traits::TransactionStoreTrait;
use crate::Result;

/// Process-lifetime transaction store keyed by portfolio id.
///
/// The write lock serializes appends; reads take the shared lock and clone
/// the portfolio's log, so valuation works on a private snapshot.
#[derive(Default)]
pub struct InMemoryTransactionStore {
    transactions: RwLock<HashMap<String, Vec<Transaction>>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStoreTrait for InMemoryTransactionStore {
    async fn append(&self, transaction: Transaction) -> Result<Transaction> {
        let mut transactions = self
            .transactions
            .write()
            .unwrap_or_else(|e| e.into_inner());
        transactions
            .entry(transaction.portfolio_id.clone())
            .or_default()
            .push(transaction.clone());
        Ok(transaction)
    }

    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().unwrap_or_else(|e| e.into_inner());
        Ok(transactions
            .get(portfolio_id)
            .cloned()
            .unwrap_or_default())
    }
}
