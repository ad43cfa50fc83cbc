//! Overall score banding: recommendation, risk, confidence and savings.

use crate::model::{Confidence, Quote, RecommendationLabel, RiskLevel, Rfp, Savings};

use super::round1;

impl RecommendationLabel {
    pub fn for_score(score: f64) -> Self {
        if score >= 85.0 {
            Self::HighlyRecommended
        } else if score >= 70.0 {
            Self::Recommended
        } else if score >= 55.0 {
            Self::ConsiderWithCaution
        } else {
            Self::NotRecommended
        }
    }
}

impl RiskLevel {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Low
        } else if score >= 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl Confidence {
    /// Confidence in the recommendation for `score`.
    ///
    /// The bands overlap, so the guards run in order and the first match
    /// wins: clear-cut scores (>= 80 or <= 40) are `High`, scores outside
    /// the 55-65 middle are `Medium`, the middle itself is `Low`.
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 || score <= 40.0 {
            Self::High
        } else if score >= 65.0 || score <= 55.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl Savings {
    /// Savings of `quote` against the RFP budget; zero when there is no
    /// budget or the quote does not come in under it.
    pub fn against_budget(quote: &Quote, rfp: &Rfp) -> Self {
        match rfp.budget_limit() {
            Some(budget) if quote.total_price < budget => {
                let amount = budget - quote.total_price;
                Self {
                    amount,
                    percentage: round1(amount / budget * 100.0),
                }
            }
            _ => Self::default(),
        }
    }
}
