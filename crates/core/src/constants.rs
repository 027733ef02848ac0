/// Calendar date format used across the HTTP boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default performance lookback window in days
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// Sector bucket for tickers whose profile lookup fails
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Decimal places for percentage metrics
pub const PERCENT_PRECISION: u32 = 4;
