//! Factor weights for the overall score.

use crate::model::SubScores;

/// Weight of each factor in the overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub price: f64,
    pub delivery: f64,
    pub compliance: f64,
    pub vendor_history: f64,
}

/// The engine's fixed weights: price 40%, delivery 30%, compliance 20%,
/// vendor history 10%.
pub const WEIGHTS: ScoringWeights = ScoringWeights {
    price: 0.4,
    delivery: 0.3,
    compliance: 0.2,
    vendor_history: 0.1,
};

impl ScoringWeights {
    /// Total weight. Summed smallest-first so `WEIGHTS.sum()` is exactly 1.0.
    pub fn sum(&self) -> f64 {
        self.vendor_history + self.compliance + self.delivery + self.price
    }

    /// Weighted combination of the sub-scores (unrounded).
    pub fn combine(&self, scores: &SubScores) -> f64 {
        scores.price * self.price
            + scores.delivery * self.delivery
            + scores.compliance * self.compliance
            + scores.vendor_history * self.vendor_history
    }
}
