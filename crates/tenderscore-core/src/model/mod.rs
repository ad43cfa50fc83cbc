//! Data model for quote evaluation.
//!
//! Inputs ([`Quote`], [`Rfp`]) are deserialized leniently from the JSON the
//! procurement front end sends: unknown fields are kept verbatim and missing
//! numbers default to zero. Outputs ([`EvaluationResult`] and friends) are
//! derived by the engine and only ever serialized.

mod analysis;
mod quote;
mod rfp;

pub use analysis::{
    AiAnalysis, AnalyzedQuote, BestOverall, BestPrice, Confidence, EvaluationResult,
    FastestDelivery, Insight, PriceRange, Priority, Recommendation, RecommendationKind,
    RecommendationLabel, RiskLevel, Savings, SubScores, Summary,
};
pub use quote::{Quote, QuoteItem, Vendor};
pub use rfp::{Rfp, parse_deadline};
