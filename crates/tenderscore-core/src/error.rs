//! # Error Types
//!
//! The engine degrades per-field problems to defaults, so the only failure it
//! reports is a batch it cannot evaluate at all.

use thiserror::Error;

/// Errors produced by the quote evaluation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The request carried no quotes to evaluate or compare.
    #[error("No quotes provided")]
    NoQuotes,
}

impl EvaluationError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NoQuotes => "quotes",
        }
    }
}

/// Convenience alias used across the engine.
pub type EngineResult<T> = Result<T, EvaluationError>;
