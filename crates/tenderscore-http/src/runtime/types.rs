//! Request and response bodies for the REST API
//!
//! Quote and RFP payloads are deserialized straight into the engine's model
//! types, which already default missing fields and preserve unknown ones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tenderscore_core::{Comparison, EvaluationResult, Quote, Rfp};
use utoipa::ToSchema;

/// Label attached to every analysis response.
pub const ANALYSIS_TYPE: &str = "Price & Delivery Optimization";

/// Body of `POST /api/ai/analyze-quotes`
///
/// Both fields may be absent or `null`; an absent quote list is rejected by
/// the engine as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeQuotesRequest {
    #[serde(default)]
    pub quotes: Option<Vec<Quote>>,
    #[serde(default)]
    pub rfp: Option<Rfp>,
}

/// Body of `POST /api/ai/compare-quotes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareQuotesRequest {
    #[serde(default)]
    pub quotes: Option<Vec<Quote>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeQuotesResponse {
    pub success: bool,
    pub analysis: EvaluationResult,
    pub timestamp: DateTime<Utc>,
    pub analysis_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareQuotesResponse {
    pub success: bool,
    pub comparison: Comparison,
    pub timestamp: DateTime<Utc>,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "tenderscore")]
    pub service: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: u64,
}
