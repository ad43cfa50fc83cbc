//! # Tenderscore HTTP Runtime
//!
//! Axum-based web service around the `tenderscore-core` quote evaluation
//! engine: routing, JSON error responses with request-id correlation,
//! environment configuration, OpenAPI documentation and graceful shutdown.

pub mod runtime;

// Re-export main types for public API
pub use runtime::*;
