//! Transaction ingestion service.
//!
//! All validation of client-supplied transaction data happens here, at the
//! ingestion boundary. The valuators downstream can therefore assume every
//! stored transaction is well formed.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionServiceTrait, TransactionStoreTrait};
use crate::constants::DATE_FORMAT;
use crate::errors::ValidationError;
use crate::Result;

/// Service for recording and listing transactions.
pub struct TransactionService {
    store: Arc<dyn TransactionStoreTrait>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn TransactionStoreTrait>) -> Self {
        Self { store }
    }

    /// Check the raw input and produce the validated field values.
    fn validate(input: &NewTransaction) -> Result<(String, Decimal, NaiveDate, Decimal)> {
        let ticker = input
            .ticker
            .as_deref()
            .ok_or_else(|| ValidationError::MissingField("ticker".to_string()))?
            .trim()
            .to_uppercase();
        if ticker.is_empty() {
            return Err(ValidationError::InvalidInput("ticker must not be empty".to_string()).into());
        }

        let shares = input
            .shares
            .ok_or_else(|| ValidationError::MissingField("shares".to_string()))?;
        if shares <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "shares must be a positive number, got {}",
                shares
            ))
            .into());
        }

        let purchase_price = input
            .purchase_price
            .ok_or_else(|| ValidationError::MissingField("purchase_price".to_string()))?;
        if purchase_price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "purchase_price must be a positive number, got {}",
                purchase_price
            ))
            .into());
        }

        let purchase_date = input
            .purchase_date
            .as_deref()
            .ok_or_else(|| ValidationError::MissingField("purchase_date".to_string()))?;
        let purchase_date = NaiveDate::parse_from_str(purchase_date.trim(), DATE_FORMAT)?;

        Ok((ticker, shares, purchase_date, purchase_price))
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn record_transaction(
        &self,
        portfolio_id: &str,
        input: NewTransaction,
    ) -> Result<Transaction> {
        let (ticker, shares, purchase_date, purchase_price) = Self::validate(&input)?;

        debug!(
            "Recording transaction for portfolio {}: {} x {} @ {}",
            portfolio_id, shares, ticker, purchase_price
        );

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            portfolio_id: portfolio_id.to_string(),
            ticker,
            shares,
            purchase_date,
            purchase_price,
            recorded_at: Utc::now(),
        };

        self.store.append(transaction).await
    }

    fn get_transactions(&self, portfolio_id: &str) -> Result<Vec<Transaction>> {
        let mut transactions = self.store.list_by_portfolio(portfolio_id)?;
        // The store keeps append order; dashboards want the newest first.
        transactions.reverse();
        Ok(transactions)
    }
}
