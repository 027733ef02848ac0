//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recorded buy transaction.
///
/// Transactions are immutable once recorded: nothing in the API mutates or
/// deletes one. All derived state (holdings, summaries, series) is computed
/// fresh from the log on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction id (UUID v4)
    pub id: String,
    /// The portfolio this transaction belongs to
    pub portfolio_id: String,
    /// Ticker symbol, normalized to uppercase at ingestion
    pub ticker: String,
    /// Number of shares bought (positive)
    pub shares: Decimal,
    /// Calendar date of the purchase
    pub purchase_date: NaiveDate,
    /// Price paid per share (positive)
    pub purchase_price: Decimal,
    /// When the transaction was recorded by the API
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Total amount paid for this lot.
    pub fn cost(&self) -> Decimal {
        self.shares * self.purchase_price
    }
}

/// Unvalidated transaction input from the HTTP boundary.
///
/// Every field is optional so the service can report which one is missing;
/// decimals accept both JSON numbers and strings since spreadsheet-shaped
/// clients send either.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default, deserialize_with = "decimal_input::deserialize_option_decimal")]
    pub shares: Option<Decimal>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "decimal_input::deserialize_option_decimal"
    )]
    pub purchase_price: Option<Decimal>,
}

// Custom deserialization for Decimal inputs to support strings, numbers,
// nulls, and scientific notation
mod decimal_input {
    use rust_decimal::Decimal;
    use serde::{self, Deserialize, Deserializer};
    use serde_json::Number;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DecimalInput {
        String(String),
        Number(Number),
        Null,
    }

    fn parse_decimal_value(value: &str) -> Result<Decimal, String> {
        let trimmed = value.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| format!("Invalid decimal value '{}': {}", value, e))
    }

    pub fn deserialize_option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<DecimalInput>::deserialize(deserializer)?;
        match raw {
            None | Some(DecimalInput::Null) => Ok(None),
            Some(DecimalInput::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                parse_decimal_value(trimmed)
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
            Some(DecimalInput::Number(n)) => parse_decimal_value(&n.to_string())
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
