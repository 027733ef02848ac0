//! Yahoo Finance API response models.
//!
//! These models parse the quoteSummary API responses, which carry the
//! profile data (and a price fallback) that the chart endpoints lack.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    pub result: Vec<YahooQuoteSummaryResult>,
    // Note: error field exists in API but we handle errors via HTTP status/empty results
}

/// Individual result from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_profile: Option<YahooSummaryProfile>,
    pub summary_detail: Option<YahooSummaryDetail>,
}

/// Price data from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub currency: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<YahooPriceDetail>,
    pub regular_market_time: Option<i64>,
}

/// Price detail with raw and formatted values
#[derive(Debug, Deserialize, Clone)]
pub struct YahooPriceDetail {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

/// Summary profile data (company info)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
}

/// Summary detail data (financial metrics).
/// Yahoo returns these as nested objects like {"raw": 123.45, "fmt": "123.45"}
/// or empty objects {} when no data is available.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    pub market_cap: Option<YahooPriceDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_detail() {
        let json = r#"{"raw": 150.25, "fmt": "150.25"}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, Some(150.25));
    }

    #[test]
    fn test_deserialize_price_detail_null() {
        let json = r#"{"raw": null, "fmt": null}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, None);
    }

    #[test]
    fn test_deserialize_summary_profile() {
        let json = r#"{
            "sector": "Technology",
            "industry": "Consumer Electronics",
            "website": "https://www.apple.com"
        }"#;
        let profile: YahooSummaryProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sector, Some("Technology".to_string()));
        assert_eq!(profile.industry, Some("Consumer Electronics".to_string()));
    }

    #[test]
    fn test_deserialize_summary_detail_empty_market_cap() {
        // Yahoo returns empty objects {} for fields with no data
        let json = r#"{"marketCap": {}}"#;
        let detail: YahooSummaryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.market_cap.as_ref().and_then(|d| d.raw), None);
    }

    #[test]
    fn test_deserialize_quote_summary_response() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {
                        "currency": "USD",
                        "shortName": "Apple Inc.",
                        "longName": "Apple Inc.",
                        "regularMarketPrice": {"raw": 189.87, "fmt": "189.87"},
                        "regularMarketTime": 1718308800
                    },
                    "summaryProfile": {
                        "sector": "Technology",
                        "industry": "Consumer Electronics"
                    },
                    "summaryDetail": {
                        "marketCap": {"raw": 2900000000000.0, "fmt": "2.9T"}
                    }
                }]
            }
        }"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let result = response.quote_summary.result.first().unwrap();
        let price = result.price.as_ref().unwrap();
        assert_eq!(price.currency, Some("USD".to_string()));
        assert_eq!(
            price.regular_market_price.as_ref().and_then(|p| p.raw),
            Some(189.87)
        );
        let detail = result.summary_detail.as_ref().unwrap();
        assert_eq!(
            detail.market_cap.as_ref().and_then(|d| d.raw),
            Some(2900000000000.0)
        );
    }
}
