use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use trackfolio_core::constants::{DATE_FORMAT, DEFAULT_LOOKBACK_DAYS};
use trackfolio_core::portfolio::PortfolioAllocation;
use trackfolio_core::transactions::{NewTransaction, Transaction};

#[derive(Serialize)]
struct TransactionList {
    transactions: Vec<Transaction>,
    count: usize,
    portfolio_id: String,
}

/// Record a buy transaction against a portfolio.
async fn record_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewTransaction>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    // Undeserializable bodies are client errors, not unprocessable entities.
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let transaction = state
        .transaction_service
        .record_transaction(&id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// List a portfolio's transactions, most recently recorded first.
async fn list_transactions(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TransactionList>> {
    let transactions = state.transaction_service.get_transactions(&id)?;
    Ok(Json(TransactionList {
        count: transactions.len(),
        transactions,
        portfolio_id: id,
    }))
}

/// Current portfolio valuation snapshot.
async fn get_summary(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let transactions = state.transaction_service.get_transactions(&id)?;
    if transactions.is_empty() {
        return Ok(Json(no_data()).into_response());
    }

    let summary = state.summary_service.calculate_summary(&transactions).await;
    Ok(Json(summary).into_response())
}

#[derive(Deserialize)]
struct PerformanceQuery {
    start_date: Option<String>,
    end_date: Option<String>,
}

/// Daily portfolio value series over a date range; defaults to the past
/// year through today.
async fn get_performance(
    Path(id): Path<String>,
    Query(query): Query<PerformanceQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Response> {
    let end = parse_query_date(query.end_date.as_deref(), "end_date")?
        .unwrap_or_else(|| Utc::now().date_naive());
    let start = parse_query_date(query.start_date.as_deref(), "start_date")?
        .unwrap_or_else(|| end - Duration::days(DEFAULT_LOOKBACK_DAYS));

    let transactions = state.transaction_service.get_transactions(&id)?;
    if transactions.is_empty() {
        return Ok(Json(no_data()).into_response());
    }

    let series = state
        .performance_service
        .calculate_performance(&transactions, start, end)
        .await?;
    Ok(Json(series).into_response())
}

/// Current portfolio value grouped by sector.
async fn get_allocation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioAllocation>> {
    let transactions = state.transaction_service.get_transactions(&id)?;
    let allocation = state
        .allocation_service
        .calculate_allocation(&transactions)
        .await;
    Ok(Json(allocation))
}

fn parse_query_date(raw: Option<&str>, field: &str) -> Result<Option<NaiveDate>, ApiError> {
    raw.map(|value| {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|e| ApiError::BadRequest(format!("Invalid {}: {}", field, e)))
    })
    .transpose()
}

/// Body served when a portfolio has nothing to value.
fn no_data() -> serde_json::Value {
    json!({ "Result": "no data" })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/{id}/transaction", post(record_transaction))
        .route("/portfolio/{id}/transactions", get(list_transactions))
        .route("/portfolio/{id}/summary", get(get_summary))
        .route("/portfolio/{id}/performance", get(get_performance))
        .route("/portfolio/{id}/allocation", get(get_allocation))
}
