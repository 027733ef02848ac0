use super::transactions_model::{NewTransaction, Transaction};
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for transaction storage backends.
///
/// The log is append-only: implementations must serialize concurrent
/// appends and must never drop or reorder records within a portfolio.
/// Reads return owned snapshots so valuation never holds a lock.
#[async_trait]
pub trait TransactionStoreTrait: Send + Sync {
    /// Append a transaction to its portfolio's log.
    async fn append(&self, transaction: Transaction) -> Result<Transaction>;

    /// All transactions recorded for a portfolio, in append order.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Validate raw input and append the resulting transaction.
    async fn record_transaction(
        &self,
        portfolio_id: &str,
        input: NewTransaction,
    ) -> Result<Transaction>;

    /// Transactions for a portfolio, most recently recorded first.
    fn get_transactions(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;
}
