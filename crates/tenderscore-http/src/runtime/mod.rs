//! # Runtime Module
//!
//! Axum runtime exposing the quote evaluation engine:
//!
//! - `POST /api/ai/analyze-quotes` scores and ranks a batch of quotes
//! - `POST /api/ai/compare-quotes` picks cheapest/fastest without scoring
//! - `GET /health` liveness with version and uptime
//! - `GET /api-docs/openapi.json` OpenAPI document (optional)
//!
//! ```no_run
//! use tenderscore_http::runtime::{HttpEvaluationRuntime, HttpRuntimeConfigBuilder};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpRuntimeConfigBuilder::from_env()?.build()?;
//! HttpEvaluationRuntime::default().serve(config).await?;
//! # Ok(())
//! # }
//! ```

/// Environment-based configuration loading.
pub mod config;
/// API documentation endpoint.
pub mod docs;
/// Unified error handling and request-id middleware.
pub mod error;
/// HTTP request handlers organized by functionality.
pub mod handlers;
/// Runtime state, configuration and the serve loop.
pub mod http;
/// HTTP router configuration and route registration.
pub mod router;
/// Graceful shutdown signal handling.
pub mod shutdown;
/// Request and response bodies.
pub mod types;

pub use config::{ConfigError, HttpRuntimeConfigBuilder};
pub use error::{
    ErrorCode, ErrorResponse, REQUEST_ID_HEADER, RequestId, RequestIdExtension, RuntimeError,
    RuntimeErrorKind, RuntimeResult,
};
pub use http::{Clock, HttpEvaluationRuntime, HttpRuntimeConfig, ServeError};
pub use shutdown::shutdown_signal;
pub use types::{ANALYSIS_TYPE, HealthResponse};
