//! Unified error handling for the HTTP runtime
//!
//! Maps engine and transport failures onto HTTP status codes and a single
//! sanitized JSON error shape. Full causes are logged server-side together
//! with the request id so clients only ever see generic messages.

use axum::{
    extract::{Request, rejection::JsonRejection},
    http::{
        StatusCode,
        header::{self, HeaderValue},
    },
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tenderscore_core::EvaluationError;
use utoipa::ToSchema;

pub use tenderscore_core::RequestId;

/// Header carrying the correlation id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

tokio::task_local! {
    /// Id of the request currently being served, for code that cannot see
    /// the request extensions (the panic handler).
    static CURRENT_REQUEST_ID: RequestId;
}

/// Extension for storing the RequestId in Axum request extensions
#[derive(Debug, Clone)]
pub struct RequestIdExtension(pub RequestId);

/// Middleware that extracts or generates a request id for every request
///
/// A client-supplied `X-Request-ID` is kept only if it passes
/// [`RequestId::parse`]; anything else is replaced by a fresh UUID v4. The id
/// is stored in the request extensions and echoed on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| RequestId::parse(s).ok())
        .unwrap_or_else(RequestId::generate);

    request
        .extensions_mut()
        .insert(RequestIdExtension(request_id.clone()));

    let mut response = CURRENT_REQUEST_ID
        .scope(request_id.clone(), next.run(request))
        .await;

    if let Ok(header_value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header_value,
        );
    }

    response
}

/// Machine-readable error codes returned in the `error` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Request was well-formed JSON but semantically unusable
    InvalidInput,
    /// Body could not be parsed as the expected JSON document
    InvalidJson,
    /// Body exceeded the configured size limit
    PayloadTooLarge,
    /// Anything unexpected
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::InvalidJson => "invalid_json",
            Self::PayloadTooLarge => "payload_too_large",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured error response for HTTP APIs
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[schema(example = "invalid_input")]
    pub error: String,
    /// Human-readable error message
    #[schema(example = "Invalid value provided for field 'quotes'.")]
    pub message: String,
    /// Optional additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Request ID for correlating with server logs
    #[schema(value_type = String)]
    pub request_id: RequestId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, request_id: RequestId) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            request_id,
            timestamp: Some(chrono::Utc::now()),
        }
    }

    /// Add additional details to the error
    pub fn with_details<T: Serialize>(mut self, details: T) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }
}

/// Specific error information for each failure category
#[derive(Debug, Clone)]
pub enum RuntimeErrorKind {
    /// Invalid input field
    InvalidInput { field: String, reason: String },

    /// Invalid JSON
    InvalidJson { reason: String },

    /// Request body over the configured limit
    PayloadTooLarge { reason: String },

    /// Internal server error
    InternalError { reason: String },
}

/// Runtime error carrying the request id alongside the failure kind
#[derive(Debug)]
pub struct RuntimeError {
    pub request_id: RequestId,
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, request_id: RequestId) -> Self {
        Self { request_id, kind }
    }

    pub fn invalid_input(
        field: impl Into<String>,
        reason: impl Into<String>,
        request_id: RequestId,
    ) -> Self {
        Self::new(
            RuntimeErrorKind::InvalidInput {
                field: field.into(),
                reason: reason.into(),
            },
            request_id,
        )
    }

    pub fn invalid_json(reason: impl Into<String>, request_id: RequestId) -> Self {
        Self::new(
            RuntimeErrorKind::InvalidJson {
                reason: reason.into(),
            },
            request_id,
        )
    }

    pub fn payload_too_large(reason: impl Into<String>, request_id: RequestId) -> Self {
        Self::new(
            RuntimeErrorKind::PayloadTooLarge {
                reason: reason.into(),
            },
            request_id,
        )
    }

    pub fn internal_error(reason: impl Into<String>, request_id: RequestId) -> Self {
        Self::new(
            RuntimeErrorKind::InternalError {
                reason: reason.into(),
            },
            request_id,
        )
    }

    /// Convert a rejected JSON body into the matching runtime error
    ///
    /// Size-limit rejections keep their 413 status; every other rejection is
    /// reported as `invalid_json`.
    pub fn from_json_rejection(rejection: JsonRejection, request_id: RequestId) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::payload_too_large(rejection.body_text(), request_id)
        } else {
            Self::invalid_json(rejection.body_text(), request_id)
        }
    }

    /// Convert an engine failure into a runtime error
    pub fn from_evaluation(error: EvaluationError, request_id: RequestId) -> Self {
        Self::invalid_input(error.field(), error.to_string(), request_id)
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn kind(&self) -> &RuntimeErrorKind {
        &self.kind
    }

    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.kind {
            RuntimeErrorKind::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            RuntimeErrorKind::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            RuntimeErrorKind::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RuntimeErrorKind::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match &self.kind {
            RuntimeErrorKind::InvalidInput { .. } => ErrorCode::InvalidInput,
            RuntimeErrorKind::InvalidJson { .. } => ErrorCode::InvalidJson,
            RuntimeErrorKind::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            RuntimeErrorKind::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Convert this error into a structured error response
    ///
    /// Only the offending field name and the engine's own reason are exposed
    /// for input errors. Parser output and internal causes stay in the logs.
    pub fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(
            self.error_code().as_str(),
            &self.user_facing_message(),
            self.request_id.clone(),
        );

        match &self.kind {
            RuntimeErrorKind::InvalidInput { field, reason } => {
                response.with_details(serde_json::json!({
                    "field": field,
                    "reason": reason
                }))
            }
            _ => response,
        }
    }

    fn user_facing_message(&self) -> String {
        match &self.kind {
            RuntimeErrorKind::InvalidInput { field, .. } => {
                format!("Invalid value provided for field '{}'.", field)
            }
            RuntimeErrorKind::InvalidJson { .. } => "Invalid JSON in request body.".to_string(),
            RuntimeErrorKind::PayloadTooLarge { .. } => {
                "Request body exceeds the maximum allowed size.".to_string()
            }
            RuntimeErrorKind::InternalError { .. } => {
                "An internal error occurred. Please try again later.".to_string()
            }
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            RuntimeErrorKind::InvalidInput { field, reason } => {
                write!(f, "Invalid input for {}: {}", field, reason)
            }
            RuntimeErrorKind::InvalidJson { reason } => write!(f, "Invalid JSON: {}", reason),
            RuntimeErrorKind::PayloadTooLarge { reason } => {
                write!(f, "Payload too large: {}", reason)
            }
            RuntimeErrorKind::InternalError { reason } => {
                write!(f, "Internal server error: {}", reason)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

impl IntoResponse for RuntimeError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_response = self.to_error_response();

        if status_code.is_server_error() {
            tracing::error!(
                error_code = %self.error_code(),
                request_id = %self.request_id(),
                status_code = %status_code,
                error_message = %self,
                "HTTP runtime error occurred"
            );
        } else {
            tracing::warn!(
                error_code = %self.error_code(),
                request_id = %self.request_id(),
                status_code = %status_code,
                error_message = %self,
                "Request rejected"
            );
        }

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for HTTP runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Response produced when a handler panics
///
/// Used with `tower_http::catch_panic::CatchPanicLayer` inside
/// [`request_id_middleware`], whose id is reused for the log line and the
/// body. Outside that scope a fresh id is issued.
pub fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };

    let request_id = CURRENT_REQUEST_ID
        .try_with(RequestId::clone)
        .unwrap_or_else(|_| RequestId::generate());

    RuntimeError::internal_error(detail, request_id).into_response()
}
