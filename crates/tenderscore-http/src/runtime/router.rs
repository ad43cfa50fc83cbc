//! HTTP router configuration
//!
//! Route registration and the middleware stack for the HTTP runtime.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::runtime::{
    HttpEvaluationRuntime, HttpRuntimeConfig,
    docs::openapi_spec,
    error::{panic_response, request_id_middleware},
    handlers::{analyze_quotes, compare_quotes, health::mark_started, health_check},
};

impl HttpEvaluationRuntime {
    /// Create the Axum router with all endpoints and middleware
    pub fn router(self) -> Router {
        self.router_with_config(&HttpRuntimeConfig::default())
    }

    /// Create the Axum router with custom configuration
    pub fn router_with_config(self, config: &HttpRuntimeConfig) -> Router {
        mark_started();

        let mut router = Router::new()
            .route("/health", get(health_check))
            .route("/api/ai/analyze-quotes", post(analyze_quotes))
            .route("/api/ai/compare-quotes", post(compare_quotes))
            .with_state(self);

        if config.enable_openapi {
            router = router.merge(create_openapi_router());
        }

        // Layers wrap inside-out: panics are converted first, then every
        // response (including those) gets a request id and a trace span.
        let mut router = router
            .layer(DefaultBodyLimit::max(config.max_body_size))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http());

        if config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }
}

/// Create OpenAPI documentation router
fn create_openapi_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_spec))
}
