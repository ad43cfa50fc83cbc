//! # Tenderscore Core
//!
//! Quote evaluation engine for procurement workflows. Given a batch of vendor
//! quotes and the RFP they answer, the engine scores every quote on price,
//! delivery, compliance and vendor history, then ranks the batch and derives
//! portfolio-level recommendations.
//!
//! ```rust
//! use chrono::Utc;
//! use tenderscore_core::{QuoteEvaluator, Quote, Rfp, Vendor};
//!
//! let quotes = vec![
//!     Quote::new(Vendor::named("Acme Supplies"), 8_000.0, 10),
//!     Quote::new(Vendor::named("Globex"), 12_000.0, 5),
//! ];
//! let rfp = Rfp::with_budget(10_000.0);
//!
//! let result = QuoteEvaluator::new().evaluate(&quotes, &rfp, Utc::now()).unwrap();
//! assert_eq!(result.analyzed_quotes.len(), 2);
//! assert_eq!(result.summary.total_quotes, 2);
//! ```

pub mod compare;
pub mod engine;
pub mod error;
pub mod identifiers;
pub mod model;

mod serde_defaults;

pub use compare::{Comparison, ValueSummary, compare_quotes};
pub use engine::{
    BatchContext, QuoteEvaluator, ScoringWeights, SimulatedVendorHistory, VendorHistory, WEIGHTS,
};
pub use error::{EngineResult, EvaluationError};
pub use identifiers::{InvalidRequestId, RequestId};
pub use model::{
    AiAnalysis, AnalyzedQuote, Confidence, EvaluationResult, Insight, Priority, Quote, QuoteItem,
    Recommendation, RecommendationKind, RecommendationLabel, RiskLevel, Rfp, Savings, SubScores,
    Summary, Vendor,
};
