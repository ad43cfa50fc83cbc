//! Quote analysis and comparison handlers
//!
//! Scoring is synchronous and grows with the batch, so analysis runs on the
//! blocking pool. Comparison is a single linear pass and stays inline.

use axum::{
    Extension,
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use std::sync::Arc;
use tenderscore_core::compare_quotes as compare_batch;

use crate::runtime::{
    HttpEvaluationRuntime,
    error::{ErrorResponse, RequestIdExtension, RuntimeError, RuntimeResult},
    types::{
        ANALYSIS_TYPE, AnalyzeQuotesRequest, AnalyzeQuotesResponse, CompareQuotesRequest,
        CompareQuotesResponse,
    },
};

/// POST /api/ai/analyze-quotes - Score, rank and annotate a batch of quotes
#[utoipa::path(
    post,
    path = "/api/ai/analyze-quotes",
    tag = "quotes",
    request_body(
        content = serde_json::Value,
        description = "`{ quotes: Quote[], rfp: { budget, deadline } }`"
    ),
    responses(
        (status = 200, description = "Ranked analysis of every quote", body = serde_json::Value),
        (status = 400, description = "Missing or empty quote list, or malformed JSON", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse)
    )
)]
pub async fn analyze_quotes(
    State(runtime): State<HttpEvaluationRuntime>,
    Extension(RequestIdExtension(request_id)): Extension<RequestIdExtension>,
    payload: Result<Json<AnalyzeQuotesRequest>, JsonRejection>,
) -> RuntimeResult<Json<AnalyzeQuotesResponse>> {
    let Json(request) =
        payload.map_err(|e| RuntimeError::from_json_rejection(e, request_id.clone()))?;

    let quotes = request.quotes.unwrap_or_default();
    let rfp = request.rfp.unwrap_or_default();
    let now = runtime.now();
    let quote_count = quotes.len();

    let evaluator = Arc::clone(&runtime.evaluator);
    let analysis = tokio::task::spawn_blocking(move || evaluator.evaluate(&quotes, &rfp, now))
        .await
        .map_err(|e| RuntimeError::internal_error(e.to_string(), request_id.clone()))?
        .map_err(|e| RuntimeError::from_evaluation(e, request_id.clone()))?;

    tracing::debug!(
        request_id = %request_id,
        quotes = quote_count,
        "Quote analysis completed"
    );

    Ok(Json(AnalyzeQuotesResponse {
        success: true,
        analysis,
        timestamp: now,
        analysis_type: ANALYSIS_TYPE,
    }))
}

/// POST /api/ai/compare-quotes - Cheapest/fastest picks and value summaries
#[utoipa::path(
    post,
    path = "/api/ai/compare-quotes",
    tag = "quotes",
    request_body(content = serde_json::Value, description = "`{ quotes: Quote[] }`"),
    responses(
        (status = 200, description = "Side-by-side comparison", body = serde_json::Value),
        (status = 400, description = "Missing or empty quote list, or malformed JSON", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse)
    )
)]
pub async fn compare_quotes(
    State(runtime): State<HttpEvaluationRuntime>,
    Extension(RequestIdExtension(request_id)): Extension<RequestIdExtension>,
    payload: Result<Json<CompareQuotesRequest>, JsonRejection>,
) -> RuntimeResult<Json<CompareQuotesResponse>> {
    let Json(request) =
        payload.map_err(|e| RuntimeError::from_json_rejection(e, request_id.clone()))?;

    let quotes = request.quotes.unwrap_or_default();
    let comparison =
        compare_batch(&quotes).map_err(|e| RuntimeError::from_evaluation(e, request_id.clone()))?;

    Ok(Json(CompareQuotesResponse {
        success: true,
        comparison,
        timestamp: runtime.now(),
    }))
}
