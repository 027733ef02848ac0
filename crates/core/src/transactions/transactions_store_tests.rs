#[cfg(test)]
mod tests {
    use crate::transactions::{InMemoryTransactionStore, Transaction, TransactionStoreTrait};
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn make_transaction(id: &str, portfolio_id: &str, ticker: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            portfolio_id: portfolio_id.to_string(),
            ticker: ticker.to_string(),
            shares: dec!(1),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            purchase_price: dec!(100),
            recorded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_and_list_preserves_order() {
        let store = InMemoryTransactionStore::new();
        store
            .append(make_transaction("t1", "portfolio_123", "AAPL"))
            .await
            .unwrap();
        store
            .append(make_transaction("t2", "portfolio_123", "MSFT"))
            .await
            .unwrap();

        let listed = store.list_by_portfolio("portfolio_123").unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "t1");
        assert_eq!(listed[1].id, "t2");
    }

    #[tokio::test]
    async fn test_portfolios_are_isolated() {
        let store = InMemoryTransactionStore::new();
        store
            .append(make_transaction("t1", "portfolio_a", "AAPL"))
            .await
            .unwrap();
        store
            .append(make_transaction("t2", "portfolio_b", "MSFT"))
            .await
            .unwrap();

        let a = store.list_by_portfolio("portfolio_a").unwrap();
        let b = store.list_by_portfolio("portfolio_b").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(a[0].ticker, "AAPL");
        assert_eq!(b[0].ticker, "MSFT");
    }

    #[tokio::test]
    async fn test_unknown_portfolio_lists_empty() {
        let store = InMemoryTransactionStore::new();
        assert!(store.list_by_portfolio("nope").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_all_land() {
        let store = Arc::new(InMemoryTransactionStore::new());

        let mut handles = Vec::new();
        for i in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .append(make_transaction(&format!("t{}", i), "portfolio_123", "AAPL"))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let listed = store.list_by_portfolio("portfolio_123").unwrap();
        assert_eq!(listed.len(), 50);
    }
}
