//! API documentation endpoint

use axum::response::Json;
use utoipa::OpenApi;

use crate::runtime::{error::ErrorResponse, types::HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::runtime::handlers::health_check,
        crate::runtime::handlers::analyze_quotes,
        crate::runtime::handlers::compare_quotes
    ),
    components(schemas(ErrorResponse, HealthResponse)),
    tags(
        (name = "quotes", description = "Quote evaluation endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Tenderscore API",
        description = "Scores vendor quotes against an RFP and returns a ranked, annotated comparison"
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json - OpenAPI specification endpoint
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/health"));
        assert!(paths.contains(&"/api/ai/analyze-quotes"));
        assert!(paths.contains(&"/api/ai/compare-quotes"));
    }
}
