//! Transactions module - the append-only transaction log and its ingestion
//! service.

mod transactions_model;
mod transactions_service;
mod transactions_store;
mod transactions_traits;



#[cfg(test)]
mod transactions_store_tests;

pub use transactions_model::{NewTransaction, Transaction};
pub use transactions_service::TransactionService;
pub use transactions_store::InMemoryTransactionStore;
pub use transactions_traits::{TransactionServiceTrait, TransactionStoreTrait};
