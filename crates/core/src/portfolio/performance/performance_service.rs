//! Time-series valuator - the portfolio's daily value over a date range.
//!
//! Walks the range one calendar day at a time, folding transactions into
//! the held share counts as their purchase dates pass and carrying each
//! ticker's last observed closing price forward across days with no
//! observation (weekends, holidays, provider gaps).

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use log::debug;
use rust_decimal::Decimal;

use super::performance_model::PerformanceSeries;
use crate::errors::ValidationError;
use crate::quotes::QuoteServiceTrait;
use crate::transactions::Transaction;
use crate::Result;

/// Computes the daily portfolio value series from the transaction log and
/// historical quotes.
pub struct PerformanceService {
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl PerformanceService {
    pub fn new(quote_service: Arc<dyn QuoteServiceTrait>) -> Self {
        Self { quote_service }
    }

    /// Portfolio value for every day in `[start, end]`, inclusive.
    ///
    /// A transaction starts contributing on its purchase date. Days before
    /// a ticker's first price observation, and tickers with no data at all,
    /// contribute zero.
    pub async fn calculate_performance(
        &self,
        transactions: &[Transaction],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PerformanceSeries> {
        if start > end {
            return Err(ValidationError::InvalidInput(format!(
                "start_date {} is after end_date {}",
                start, end
            ))
            .into());
        }

        let price_series = self.fetch_price_series(transactions, start, end).await;

        // Purchase-date order drives the incremental holdings walk.
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by_key(|t| t.purchase_date);

        let mut dates = Vec::new();
        let mut values = Vec::new();
        let mut shares_held: HashMap<&str, Decimal> = HashMap::new();
        let mut last_close: HashMap<&str, Decimal> = HashMap::new();
        let mut next_transaction = 0;

        // Purchases dated before the range already count on its first day.
        let mut day = start;
        loop {
            while next_transaction < ordered.len()
                && ordered[next_transaction].purchase_date <= day
            {
                let transaction = ordered[next_transaction];
                *shares_held
                    .entry(transaction.ticker.as_str())
                    .or_default() += transaction.shares;
                next_transaction += 1;
            }

            for (ticker, closes) in &price_series {
                if let Some(close) = closes.get(&day) {
                    last_close.insert(ticker.as_str(), *close);
                }
            }

            let value: Decimal = shares_held
                .iter()
                .map(|(ticker, shares)| {
                    *shares * last_close.get(ticker).copied().unwrap_or(Decimal::ZERO)
                })
                .sum();

            dates.push(day);
            values.push(value);

            if day >= end {
                break;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }

        Ok(PerformanceSeries { dates, values })
    }

    /// One historical lookup per distinct ticker, fanned out concurrently.
    ///
    /// Quotes come back ascending, so inserting in order leaves the last
    /// close of each calendar day in the map.
    async fn fetch_price_series(
        &self,
        transactions: &[Transaction],
        start: NaiveDate,
        end: NaiveDate,
    ) -> HashMap<String, HashMap<NaiveDate, Decimal>> {
        let tickers: HashSet<&str> = transactions.iter().map(|t| t.ticker.as_str()).collect();
        debug!(
            "Fetching daily history for {} tickers over {} to {}",
            tickers.len(),
            start,
            end
        );

        let lookups = tickers.into_iter().map(|ticker| async move {
            let quotes = self.quote_service.get_daily_history(ticker, start, end).await;
            let mut closes = HashMap::new();
            for quote in quotes {
                closes.insert(quote.date(), quote.close);
            }
            (ticker.to_string(), closes)
        });

        join_all(lookups).await.into_iter().collect()
    }
}
