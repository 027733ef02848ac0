use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock profile data from market data providers.
///
/// Populated from the Yahoo quoteSummary API; every field except the symbol
/// is optional because providers routinely omit pieces of it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StockProfile {
    /// The symbol this profile describes (e.g., "AAPL")
    pub symbol: String,

    /// Company/asset name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Latest traded price at the time the profile was fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,

    /// Market capitalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,

    /// Business sector (e.g., "Technology")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Industry within sector (e.g., "Consumer Electronics")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Quote currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Provider that supplied this profile (e.g., "YAHOO")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl StockProfile {
    /// Create an empty profile for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Whether the profile carries enough data to be worth returning:
    /// a usable price is the minimum bar.
    pub fn has_usable_price(&self) -> bool {
        matches!(self.current_price, Some(p) if !p.is_zero())
    }
}
