use crate::model::{Insight, SubScores};

/// Qualitative tags for a quote's sub-scores.
///
/// Always in the order price, delivery, vendor, compliance. Compliance only
/// speaks up at the extremes (>= 90 or < 70).
pub fn insights_for(scores: &SubScores) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(4);

    insights.push(match scores.price {
        s if s >= 90.0 => Insight::ExcellentPrice,
        s if s >= 70.0 => Insight::GoodPrice,
        s if s >= 50.0 => Insight::AveragePrice,
        _ => Insight::HighPrice,
    });

    insights.push(match scores.delivery {
        s if s >= 90.0 => Insight::FastDelivery,
        s if s >= 70.0 => Insight::GoodDelivery,
        s if s >= 50.0 => Insight::AverageDelivery,
        _ => Insight::SlowDelivery,
    });

    insights.push(match scores.vendor_history {
        s if s >= 85.0 => Insight::HighlyRatedVendor,
        s if s >= 70.0 => Insight::GoodVendor,
        _ => Insight::VerifyVendor,
    });

    if scores.compliance >= 90.0 {
        insights.push(Insight::FullyCompliant);
    } else if scores.compliance < 70.0 {
        insights.push(Insight::ComplianceGaps);
    }

    insights
}
