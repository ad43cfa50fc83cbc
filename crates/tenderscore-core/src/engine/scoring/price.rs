use super::{BatchContext, NEUTRAL_SCORE};
use crate::model::Quote;

/// Price competitiveness in `[0, 100]`.
///
/// Equal mix of the quote's position among its siblings and its fit against
/// the RFP budget. Without a budget the budget signal mirrors the relative
/// one. A quote without a price scores 0.
pub fn price_score(quote: &Quote, ctx: &BatchContext<'_>) -> f64 {
    let Some(price) = quote.scored_price() else {
        return 0.0;
    };
    let Some(span) = ctx.price_span() else {
        return NEUTRAL_SCORE;
    };

    let relative = span.relative_score(price);
    let budget = ctx
        .rfp
        .budget_limit()
        .map_or(relative, |budget| budget_score(price, budget));

    relative * 0.5 + budget * 0.5
}

/// Piecewise fit of `price` against a positive `budget`.
///
/// | price                       | score        |
/// |-----------------------------|--------------|
/// | up to 80% of budget         | 100          |
/// | 80% to 100%                 | 90 down to 70|
/// | 100% to 110%                | 60 down to 30|
/// | above 110%                  | 20           |
pub fn budget_score(price: f64, budget: f64) -> f64 {
    let comfortable = budget * 0.8;
    let tolerated = budget * 1.1;

    if price <= comfortable {
        100.0
    } else if price <= budget {
        90.0 - (price - comfortable) / (budget * 0.2) * 20.0
    } else if price <= tolerated {
        60.0 - (price - budget) / (budget * 0.1) * 30.0
    } else {
        20.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rfp, Vendor};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case(5_000.0, 100.0)]
    #[case(8_000.0, 100.0)]
    #[case(9_000.0, 80.0)]
    #[case(10_000.0, 70.0)]
    #[case(10_500.0, 45.0)]
    #[case(11_000.0, 30.0)]
    #[case(12_000.0, 20.0)]
    fn budget_bands(#[case] price: f64, #[case] expected: f64) {
        assert_close(budget_score(price, 10_000.0), expected);
    }

    fn score_all(quotes: &[Quote], rfp: &Rfp) -> Vec<f64> {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let ctx = BatchContext::new(quotes, rfp, now);
        quotes.iter().map(|q| price_score(q, &ctx)).collect()
    }

    #[test]
    fn blends_relative_and_budget_signals() {
        let quotes = vec![
            Quote::new(Vendor::named("A"), 8_000.0, 10),
            Quote::new(Vendor::named("B"), 12_000.0, 5),
        ];
        let scores = score_all(&quotes, &Rfp::with_budget(10_000.0));
        // A: relative 100, budget 100. B: relative 0, budget 20.
        assert_close(scores[0], 100.0);
        assert_close(scores[1], 10.0);
    }

    #[test]
    fn equal_prices_all_score_full_relative_marks() {
        let quotes = vec![
            Quote::new(Vendor::named("A"), 700.0, 1),
            Quote::new(Vendor::named("B"), 700.0, 2),
            Quote::new(Vendor::named("C"), 700.0, 3),
        ];
        let scores = score_all(&quotes, &Rfp::default());
        assert!(scores.iter().all(|s| *s == 100.0));
    }

    #[test]
    fn single_quote_without_budget_scores_full_marks() {
        let quotes = vec![Quote::new(Vendor::named("Solo"), 4_321.0, 9)];
        assert_eq!(score_all(&quotes, &Rfp::with_budget(0.0)), vec![100.0]);
    }

    #[test]
    fn missing_price_scores_zero() {
        let quotes = vec![
            Quote::new(Vendor::named("A"), 0.0, 10),
            Quote::new(Vendor::named("B"), 100.0, 10),
        ];
        let scores = score_all(&quotes, &Rfp::with_budget(1_000.0));
        assert_eq!(scores[0], 0.0);
        assert_eq!(scores[1], 100.0);
    }

    #[test]
    fn quote_outside_batch_without_peers_scores_neutral() {
        let rfp = Rfp::default();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let ctx = BatchContext::new(&[], &rfp, now);
        let stray = Quote::new(Vendor::named("X"), 10.0, 1);
        assert_eq!(price_score(&stray, &ctx), NEUTRAL_SCORE);
    }
}
