use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use trackfolio_core::constants::UNKNOWN_SECTOR;
use trackfolio_market_data::MarketDataError;

/// Profile payload for the stock endpoint. Field names follow the upstream
/// provider's vocabulary, hence camelCase rather than this API's snake_case.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StockResponse {
    symbol: String,
    long_name: String,
    current_price: Decimal,
    market_cap: Decimal,
    sector: String,
    industry: String,
    currency: String,
}

/// Look up a ticker's profile and latest price.
async fn get_stock(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let ticker = ticker.trim().to_uppercase();

    match state.quote_service.get_profile(&ticker).await {
        Ok(profile) if profile.has_usable_price() => {
            let payload = StockResponse {
                symbol: profile.symbol,
                long_name: profile.name.unwrap_or_else(|| "unknown".to_string()),
                current_price: profile.current_price.unwrap_or_default(),
                market_cap: profile.market_cap.unwrap_or_default(),
                sector: profile.sector.unwrap_or_else(|| UNKNOWN_SECTOR.to_string()),
                industry: profile
                    .industry
                    .unwrap_or_else(|| UNKNOWN_SECTOR.to_string()),
                currency: profile.currency.unwrap_or_else(|| "USD".to_string()),
            };
            (StatusCode::OK, Json(payload)).into_response()
        }
        // A profile with no usable price and an unknown symbol get the same
        // answer: nothing here worth tracking.
        Ok(_) | Err(MarketDataError::SymbolNotFound(_)) => not_trackable(&ticker),
        Err(e) => {
            tracing::error!("Stock lookup failed for {}: {}", ticker, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string(), "ticker": ticker })),
            )
                .into_response()
        }
    }
}

fn not_trackable(ticker: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "symbol": "active", "data": "trackable", "ticker": ticker })),
    )
        .into_response()
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stock/{ticker}", get(get_stock))
}
