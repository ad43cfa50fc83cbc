use super::{BatchContext, NEUTRAL_SCORE};
use crate::model::Quote;

const RELATIVE_WEIGHT: f64 = 0.6;
const DEADLINE_WEIGHT: f64 = 0.4;

/// Delivery competitiveness in `[0, 100]`.
///
/// 60% position among the siblings' delivery times, 40% fit against the RFP
/// deadline. When the deadline is missing or unparseable the deadline signal
/// mirrors the relative one. A quote without a delivery time scores 0.
pub fn delivery_score(quote: &Quote, ctx: &BatchContext<'_>) -> f64 {
    let Some(days) = quote.scored_delivery() else {
        return 0.0;
    };
    let Some(span) = ctx.delivery_span() else {
        return NEUTRAL_SCORE;
    };

    let relative = span.relative_score(f64::from(days));
    let deadline = ctx
        .days_until_deadline
        .map_or(relative, |remaining| deadline_score(days, remaining));

    relative * RELATIVE_WEIGHT + deadline * DEADLINE_WEIGHT
}

/// Fit of a delivery time against the days remaining until the deadline.
pub fn deadline_score(delivery_days: u32, days_remaining: i64) -> f64 {
    let delivery = f64::from(delivery_days);
    let remaining = days_remaining as f64;

    if delivery <= remaining * 0.8 {
        100.0
    } else if delivery <= remaining {
        80.0
    } else if delivery <= remaining * 1.2 {
        40.0
    } else {
        10.0
    }
}
