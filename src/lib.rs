//! # Tenderscore
//!
//! Scores vendor quotes against a request for proposal and produces a ranked,
//! annotated comparison.
//!
//! This facade re-exports the engine from `tenderscore-core` at the crate
//! root and the web service as [`http`].
//!
//! ```
//! use chrono::Utc;
//! use tenderscore::{Quote, QuoteEvaluator, Rfp, Vendor};
//!
//! let quotes = vec![
//!     Quote::new(Vendor::named("Acme"), 8_000.0, 10),
//!     Quote::new(Vendor::named("Globex"), 9_500.0, 6),
//! ];
//! let result = QuoteEvaluator::new()
//!     .evaluate(&quotes, &Rfp::with_budget(10_000.0), Utc::now())
//!     .unwrap();
//!
//! assert_eq!(result.summary.total_quotes, 2);
//! ```

pub use tenderscore_core::*;

/// HTTP runtime serving the engine.
pub use tenderscore_http as http;
