use super::BatchContext;
use crate::model::Quote;

const MISSING_ITEMS_PENALTY: f64 = 25.0;
const BLANK_TERMS_PENALTY: f64 = 15.0;
const OVER_BUDGET_PENALTY: f64 = 30.0;
const LATE_DELIVERY_PENALTY: f64 = 20.0;

/// Completeness and conformance of a quote, in `[0, 100]`.
///
/// Starts at 100 and deducts for missing line items, blank terms, a price
/// above the budget and a delivery time past the deadline. Budget and
/// deadline checks only apply when the RFP sets them.
pub fn compliance_score(quote: &Quote, ctx: &BatchContext<'_>) -> f64 {
    let mut score = 100.0;

    if quote.items.is_empty() {
        score -= MISSING_ITEMS_PENALTY;
    }
    if !quote.has_terms() {
        score -= BLANK_TERMS_PENALTY;
    }
    if ctx
        .rfp
        .budget_limit()
        .is_some_and(|budget| quote.total_price > budget)
    {
        score -= OVER_BUDGET_PENALTY;
    }
    if ctx
        .days_until_deadline
        .is_some_and(|remaining| i64::from(quote.delivery_time) > remaining)
    {
        score -= LATE_DELIVERY_PENALTY;
    }

    f64::max(score, 0.0)
}
