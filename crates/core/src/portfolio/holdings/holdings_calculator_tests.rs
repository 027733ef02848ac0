#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::{aggregate_holdings, Holding};
    use crate::transactions::Transaction;
    use chrono::{NaiveDate, Utc};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn make_transaction(ticker: &str, shares: Decimal, price: Decimal) -> Transaction {
        Transaction {
            id: format!("t-{}-{}", ticker, shares),
            portfolio_id: "portfolio_123".to_string(),
            ticker: ticker.to_string(),
            shares,
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            purchase_price: price,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        assert!(aggregate_holdings(&[]).is_empty());
    }

    #[test]
    fn test_single_transaction() {
        let holdings = aggregate_holdings(&[make_transaction("AAPL", dec!(10), dec!(150))]);

        assert_eq!(holdings.len(), 1);
        let holding = &holdings["AAPL"];
        assert_eq!(holding.shares, dec!(10));
        assert_eq!(holding.total_cost, dec!(1500));
    }

    #[test]
    fn test_same_ticker_accumulates() {
        let holdings = aggregate_holdings(&[
            make_transaction("AAPL", dec!(10), dec!(100)),
            make_transaction("AAPL", dec!(5), dec!(200)),
        ]);

        let holding = &holdings["AAPL"];
        assert_eq!(holding.shares, dec!(15));
        assert_eq!(holding.total_cost, dec!(2000));
        assert_eq!(holding.average_cost(), dec!(2000) / dec!(15));
    }

    #[test]
    fn test_distinct_tickers_stay_separate() {
        let holdings = aggregate_holdings(&[
            make_transaction("AAPL", dec!(10), dec!(100)),
            make_transaction("MSFT", dec!(2), dec!(300)),
        ]);

        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings["AAPL"].shares, dec!(10));
        assert_eq!(holdings["MSFT"].total_cost, dec!(600));
    }

    #[test]
    fn test_fractional_shares() {
        let holdings = aggregate_holdings(&[
            make_transaction("AAPL", dec!(0.5), dec!(100)),
            make_transaction("AAPL", dec!(0.25), dec!(100)),
        ]);

        assert_eq!(holdings["AAPL"].shares, dec!(0.75));
        assert_eq!(holdings["AAPL"].total_cost, dec!(75));
    }

    #[test]
    fn test_empty_holding_average_cost_is_zero() {
        let holding = Holding::new("AAPL");
        assert_eq!(holding.average_cost(), Decimal::ZERO);
    }

    // Strategy: small transaction lists over a handful of tickers.
    fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
        prop::collection::vec(
            (0usize..3, 1u32..1_000, 1u32..10_000),
            0..20,
        )
        .prop_map(|entries| {
            let tickers = ["AAA", "BBB", "CCC"];
            entries
                .into_iter()
                .map(|(ticker_index, shares, cents)| {
                    make_transaction(
                        tickers[ticker_index],
                        Decimal::from(shares),
                        Decimal::from(cents) / dec!(100),
                    )
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_aggregation_is_order_independent(transactions in transactions_strategy()) {
            let mut reversed = transactions.clone();
            reversed.reverse();
            prop_assert_eq!(aggregate_holdings(&transactions), aggregate_holdings(&reversed));
        }

        #[test]
        fn prop_shares_equal_per_ticker_sum(transactions in transactions_strategy()) {
            let holdings = aggregate_holdings(&transactions);
            for ticker in ["AAA", "BBB", "CCC"] {
                let expected: Decimal = transactions
                    .iter()
                    .filter(|t| t.ticker == ticker)
                    .map(|t| t.shares)
                    .sum();
                let actual = holdings.get(ticker).map(|h| h.shares).unwrap_or(Decimal::ZERO);
                prop_assert_eq!(actual, expected);
            }
        }

        #[test]
        fn prop_cost_equals_sum_of_lot_costs(transactions in transactions_strategy()) {
            let holdings = aggregate_holdings(&transactions);
            let total: Decimal = holdings.values().map(|h| h.total_cost).sum();
            let expected: Decimal = transactions.iter().map(|t| t.cost()).sum();
            prop_assert_eq!(total, expected);
        }
    }
}
