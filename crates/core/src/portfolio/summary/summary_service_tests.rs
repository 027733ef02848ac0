#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::portfolio::summary::SummaryService;
    use crate::quotes::QuoteServiceTrait;
    use crate::transactions::Transaction;
    use trackfolio_market_data::{MarketDataError, Quote, StockProfile};

    /// Quote service stub with a fixed price per ticker; unknown tickers
    /// degrade to `None` like the real service does.
    struct FixedQuotes {
        prices: HashMap<&'static str, Decimal>,
    }

    impl FixedQuotes {
        fn new(prices: &[(&'static str, Decimal)]) -> Arc<Self> {
            Arc::new(Self {
                prices: prices.iter().copied().collect(),
            })
        }
    }

    #[async_trait]
    impl QuoteServiceTrait for FixedQuotes {
        async fn get_current_price(&self, ticker: &str) -> Option<Decimal> {
            self.prices.get(ticker).copied()
        }

        async fn get_daily_history(
            &self,
            _ticker: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Vec<Quote> {
            Vec::new()
        }

        async fn get_profile(&self, ticker: &str) -> Result<StockProfile, MarketDataError> {
            Err(MarketDataError::SymbolNotFound(ticker.to_string()))
        }
    }

    fn buy(ticker: &str, shares: Decimal, price: Decimal) -> Transaction {
        Transaction {
            id: format!("t-{}-{}", ticker, shares),
            portfolio_id: "portfolio_123".to_string(),
            ticker: ticker.to_string(),
            shares,
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            purchase_price: price,
            recorded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_single_position_metrics() {
        let service = SummaryService::new(FixedQuotes::new(&[("AAPL", dec!(150))]));

        let summary = service
            .calculate_summary(&[buy("AAPL", dec!(10), dec!(100))])
            .await;

        assert_eq!(summary.num_positions, 1);
        assert_eq!(summary.total_value, dec!(1500));
        assert_eq!(summary.total_cost, dec!(1000));
        assert_eq!(summary.total_return, dec!(500));
        assert_eq!(summary.total_return_percent, dec!(50));

        let position = &summary.positions[0];
        assert_eq!(position.ticker, "AAPL");
        assert_eq!(position.shares, dec!(10));
        assert_eq!(position.avg_cost, dec!(100));
        assert_eq!(position.current_price, dec!(150));
        assert_eq!(position.current_value, dec!(1500));
        assert_eq!(position.gain_loss, dec!(500));
        assert_eq!(position.gain_loss_percent, dec!(50));
        assert_eq!(position.weight, dec!(100));
    }

    #[tokio::test]
    async fn test_lots_merge_before_valuation() {
        let service = SummaryService::new(FixedQuotes::new(&[("AAPL", dec!(200))]));

        let summary = service
            .calculate_summary(&[
                buy("AAPL", dec!(10), dec!(100)),
                buy("AAPL", dec!(10), dec!(150)),
            ])
            .await;

        assert_eq!(summary.num_positions, 1);
        let position = &summary.positions[0];
        assert_eq!(position.shares, dec!(20));
        assert_eq!(position.avg_cost, dec!(125));
        assert_eq!(position.current_value, dec!(4000));
        assert_eq!(position.gain_loss, dec!(1500));
        assert_eq!(position.gain_loss_percent, dec!(60));
    }

    #[tokio::test]
    async fn test_positions_sorted_by_value_descending() {
        let service = SummaryService::new(FixedQuotes::new(&[
            ("AAPL", dec!(10)),
            ("MSFT", dec!(300)),
            ("KO", dec!(60)),
        ]));

        let summary = service
            .calculate_summary(&[
                buy("AAPL", dec!(1), dec!(10)),
                buy("MSFT", dec!(2), dec!(200)),
                buy("KO", dec!(3), dec!(50)),
            ])
            .await;

        let tickers: Vec<&str> = summary
            .positions
            .iter()
            .map(|p| p.ticker.as_str())
            .collect();
        assert_eq!(tickers, vec!["MSFT", "KO", "AAPL"]);
    }

    #[tokio::test]
    async fn test_weights_sum_to_one_hundred() {
        let service = SummaryService::new(FixedQuotes::new(&[
            ("AAPL", dec!(150)),
            ("MSFT", dec!(300)),
            ("KO", dec!(60)),
        ]));

        let summary = service
            .calculate_summary(&[
                buy("AAPL", dec!(7), dec!(100)),
                buy("MSFT", dec!(3), dec!(200)),
                buy("KO", dec!(11), dec!(50)),
            ])
            .await;

        let weight_sum: Decimal = summary.positions.iter().map(|p| p.weight).sum();
        assert!((weight_sum - dec!(100)).abs() < dec!(0.01), "{}", weight_sum);
    }

    #[tokio::test]
    async fn test_failed_lookup_prices_position_at_zero() {
        // Only AAPL has a price; GHOST degrades.
        let service = SummaryService::new(FixedQuotes::new(&[("AAPL", dec!(150))]));

        let summary = service
            .calculate_summary(&[
                buy("AAPL", dec!(10), dec!(100)),
                buy("GHOST", dec!(5), dec!(20)),
            ])
            .await;

        assert_eq!(summary.num_positions, 2);
        assert_eq!(summary.total_value, dec!(1500));
        // Cost still counts the degraded position.
        assert_eq!(summary.total_cost, dec!(1100));

        let ghost = summary
            .positions
            .iter()
            .find(|p| p.ticker == "GHOST")
            .unwrap();
        assert_eq!(ghost.current_price, Decimal::ZERO);
        assert_eq!(ghost.current_value, Decimal::ZERO);
        assert_eq!(ghost.gain_loss, dec!(-100));
        assert_eq!(ghost.gain_loss_percent, dec!(-100));
        assert_eq!(ghost.weight, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_all_lookups_failing_yields_zero_totals() {
        let service = SummaryService::new(FixedQuotes::new(&[]));

        let summary = service
            .calculate_summary(&[buy("AAPL", dec!(10), dec!(100))])
            .await;

        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.total_cost, dec!(1000));
        assert_eq!(summary.total_return, dec!(-1000));
        assert_eq!(summary.total_return_percent, dec!(-100));
        // Zero total value means zero weights, not a division error.
        assert_eq!(summary.positions[0].weight, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_empty_transactions_yield_empty_summary() {
        let service = SummaryService::new(FixedQuotes::new(&[("AAPL", dec!(150))]));

        let summary = service.calculate_summary(&[]).await;

        assert_eq!(summary.num_positions, 0);
        assert!(summary.positions.is_empty());
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.total_cost, Decimal::ZERO);
        assert_eq!(summary.total_return_percent, Decimal::ZERO);
    }

    #[test]
    fn test_summary_serializes_metrics_as_numbers() {
        let summary = crate::portfolio::summary::PortfolioSummary {
            total_value: dec!(1500),
            total_cost: dec!(1000),
            total_return: dec!(500),
            total_return_percent: dec!(50),
            num_positions: 0,
            positions: Vec::new(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["total_value"].is_number());
        assert!(json["total_return_percent"].is_number());
        assert_eq!(json["num_positions"], 0);
    }
}
