use serde::{Serialize, Serializer};

use super::quote::Quote;

/// The four factor scores of one quote.
///
/// `price`, `delivery` and `compliance` lie in `[0, 100]`;
/// `vendor_history` lies in `[40, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubScores {
    pub price: f64,
    pub delivery: f64,
    pub compliance: f64,
    pub vendor_history: f64,
}

/// Recommendation label derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendationLabel {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Consider with Caution")]
    ConsiderWithCaution,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// How confident the engine is in its own recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Estimated savings against the RFP budget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Savings {
    pub amount: f64,
    pub percentage: f64,
}

/// Qualitative tag attached to a quote, one per scoring factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    ExcellentPrice,
    GoodPrice,
    AveragePrice,
    HighPrice,
    FastDelivery,
    GoodDelivery,
    AverageDelivery,
    SlowDelivery,
    HighlyRatedVendor,
    GoodVendor,
    VerifyVendor,
    FullyCompliant,
    ComplianceGaps,
}

impl Insight {
    pub fn message(self) -> &'static str {
        match self {
            Self::ExcellentPrice => "💰 Excellent price - highly competitive",
            Self::GoodPrice => "💵 Good price - within acceptable range",
            Self::AveragePrice => "💸 Average price - consider negotiation",
            Self::HighPrice => "⚠️ High price - review budget alignment",
            Self::FastDelivery => "🚀 Fast delivery - excellent timeline",
            Self::GoodDelivery => "⏰ Good delivery - meets requirements",
            Self::AverageDelivery => "📅 Average delivery - acceptable timeline",
            Self::SlowDelivery => "🐌 Slow delivery - may miss deadlines",
            Self::HighlyRatedVendor => "⭐ Highly rated vendor - reliable choice",
            Self::GoodVendor => "👍 Good vendor - solid track record",
            Self::VerifyVendor => "🔍 Consider vendor verification",
            Self::FullyCompliant => "✅ Fully compliant - meets all requirements",
            Self::ComplianceGaps => "📋 Some compliance gaps - review needed",
        }
    }
}

impl Serialize for Insight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Analysis the engine attaches to each quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiAnalysis {
    pub overall_score: f64,
    pub price_score: f64,
    pub delivery_score: f64,
    pub compliance_score: f64,
    pub vendor_score: f64,
    pub recommendation: RecommendationLabel,
    pub risk_level: RiskLevel,
    pub insights: Vec<Insight>,
    /// 1-based rank by price within the batch; 0 when the quote has no price.
    pub price_rank: usize,
    /// 1-based rank by delivery time within the batch; 0 when missing.
    pub delivery_rank: usize,
    pub savings: Savings,
    pub confidence: Confidence,
}

/// A quote with its analysis appended. The quote's own fields are
/// serialized unchanged at the top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedQuote {
    #[serde(flatten)]
    pub quote: Quote,
    pub ai_analysis: AiAnalysis,
}

/// Key the analysis is written under.
pub const AI_ANALYSIS_KEY: &str = "ai_analysis";

impl AnalyzedQuote {
    /// Attach `ai_analysis` to `quote`, replacing any analysis the quote
    /// already carried from an earlier evaluation.
    pub fn new(mut quote: Quote, ai_analysis: AiAnalysis) -> Self {
        quote.extra.remove(AI_ANALYSIS_KEY);
        Self { quote, ai_analysis }
    }

    pub fn overall_score(&self) -> f64 {
        self.ai_analysis.overall_score
    }

    pub fn vendor_name(&self) -> &str {
        &self.quote.vendor.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestOverall {
    pub vendor: String,
    pub score: f64,
    pub price: f64,
    pub delivery: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestPrice {
    pub vendor: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FastestDelivery {
    pub vendor: String,
    pub delivery: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Aggregate statistics over an evaluated batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_quotes: usize,
    pub average_score: f64,
    pub best_overall: BestOverall,
    pub best_price: BestPrice,
    pub fastest_delivery: FastestDelivery,
    pub price_range: PriceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    TopChoice,
    CostSaving,
    DeliveryOptimization,
    RiskWarning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
}

/// Portfolio-level guidance derived from the ranked batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub action: String,
    pub priority: Priority,
}

/// Full output of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Quotes in rank order, best first.
    pub analyzed_quotes: Vec<AnalyzedQuote>,
    pub summary: Summary,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_serialize_to_display_text() {
        assert_eq!(
            serde_json::to_value(RecommendationLabel::ConsiderWithCaution).unwrap(),
            json!("Consider with Caution")
        );
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), json!("High"));
        assert_eq!(
            serde_json::to_value(RecommendationKind::DeliveryOptimization).unwrap(),
            json!("delivery_optimization")
        );
        assert_eq!(
            serde_json::to_value(Insight::ComplianceGaps).unwrap(),
            json!("📋 Some compliance gaps - review needed")
        );
    }

    #[test]
    fn resubmitted_analysis_is_replaced() {
        let quote: Quote = serde_json::from_value(json!({
            "vendorId": {"name": "Acme"},
            "totalPrice": 100,
            "ai_analysis": {"overall_score": 12.5},
            "rfpId": "rfp-1"
        }))
        .unwrap();
        let analysis = AiAnalysis {
            overall_score: 88.0,
            price_score: 100.0,
            delivery_score: 100.0,
            compliance_score: 75.0,
            vendor_score: 70.0,
            recommendation: RecommendationLabel::for_score(88.0),
            risk_level: RiskLevel::for_score(88.0),
            insights: Vec::new(),
            price_rank: 1,
            delivery_rank: 1,
            savings: Savings::default(),
            confidence: Confidence::for_score(88.0),
        };

        let analyzed = AnalyzedQuote::new(quote, analysis);
        let text = serde_json::to_string(&analyzed).unwrap();

        assert_eq!(text.matches("\"ai_analysis\"").count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ai_analysis"]["overall_score"], 88.0);
        assert_eq!(value["rfpId"], "rfp-1");
    }
}
