//! Portfolio-level guidance derived from a ranked batch.

use crate::model::{AnalyzedQuote, Priority, Recommendation, RecommendationKind, RiskLevel};

use super::ranking::{cheapest_index, fastest_index};

/// Minimum overall score for an alternative to be worth suggesting.
const ALTERNATIVE_MIN_SCORE: f64 = 60.0;

/// Strategic recommendations for a ranked batch (best quote first).
///
/// Always names the top choice. Suggests the cheapest and the fastest quote
/// as alternatives when they are not the top choice and still score at least
/// 60, and warns when more than half of the batch is high risk.
pub fn recommend(ranked: &[AnalyzedQuote]) -> Vec<Recommendation> {
    let Some(best) = ranked.first() else {
        return Vec::new();
    };
    let mut recommendations = vec![Recommendation {
        kind: RecommendationKind::TopChoice,
        title: "🏆 Recommended Vendor".to_string(),
        description: format!(
            "{} offers the best overall value with {:.1} points",
            best.quote.vendor.name_or("Top vendor"),
            best.overall_score()
        ),
        action: "Award contract to this vendor".to_string(),
        priority: Priority::High,
    }];

    if let Some(cheapest) = worthwhile_alternative(ranked, cheapest_index(ranked)) {
        let savings = best.quote.total_price - cheapest.quote.total_price;
        recommendations.push(Recommendation {
            kind: RecommendationKind::CostSaving,
            title: "💰 Cost Savings Opportunity".to_string(),
            description: format!(
                "Consider {} to save {}",
                cheapest.quote.vendor.name_or("alternative vendor"),
                format_dollars(savings)
            ),
            action: "Negotiate with preferred vendor or consider alternative".to_string(),
            priority: Priority::Medium,
        });
    }

    if let Some(fastest) = worthwhile_alternative(ranked, fastest_index(ranked)) {
        let days_saved =
            i64::from(best.quote.delivery_time) - i64::from(fastest.quote.delivery_time);
        recommendations.push(Recommendation {
            kind: RecommendationKind::DeliveryOptimization,
            title: "🚀 Faster Delivery Available".to_string(),
            description: format!(
                "{} can deliver {} days faster",
                fastest.quote.vendor.name_or("Alternative vendor"),
                days_saved
            ),
            action: "Consider if faster delivery is critical".to_string(),
            priority: Priority::Medium,
        });
    }

    let high_risk = ranked
        .iter()
        .filter(|q| q.ai_analysis.risk_level == RiskLevel::High)
        .count();
    if high_risk * 2 > ranked.len() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::RiskWarning,
            title: "⚠️ Risk Assessment".to_string(),
            description: format!(
                "{} out of {} quotes show high risk factors",
                high_risk,
                ranked.len()
            ),
            action: "Consider revising requirements or extending deadline".to_string(),
            priority: Priority::High,
        });
    }

    recommendations
}

/// The quote at `index` when it is not the top choice and scores well enough.
fn worthwhile_alternative(
    ranked: &[AnalyzedQuote],
    index: Option<usize>,
) -> Option<&AnalyzedQuote> {
    index
        .filter(|&i| i != 0)
        .map(|i| &ranked[i])
        .filter(|q| q.overall_score() >= ALTERNATIVE_MIN_SCORE)
}

/// Whole-dollar amount with thousands separators, e.g. `$12,345`.
pub fn format_dollars(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
