//! # Quote Evaluation Engine
//!
//! Scores a batch of quotes against an RFP in a single synchronous pass:
//!
//! 1. **Factor scoring**: price, delivery, compliance and vendor history,
//!    each relative to the batch where that matters ([`scoring`])
//! 2. **Aggregation**: fixed weights ([`WEIGHTS`]) combine the factors into
//!    an overall score that drives recommendation, risk and confidence labels
//! 3. **Insights**: qualitative tags per factor ([`insights`])
//! 4. **Ranking & summary**: stable descending sort plus batch statistics
//!    ([`ranking`])
//! 5. **Recommendations**: top choice, cheaper and faster alternatives, risk
//!    warning ([`recommendations`])
//!
//! The engine holds no mutable state; evaluations can run concurrently on a
//! shared [`QuoteEvaluator`].

mod aggregate;
pub mod insights;
pub mod ranking;
pub mod recommendations;
pub mod scoring;
mod weights;

pub use scoring::{BatchContext, SimulatedVendorHistory, Span, VendorHistory};
pub use weights::{ScoringWeights, WEIGHTS};

use chrono::{DateTime, Utc};

use crate::{
    error::{EngineResult, EvaluationError},
    model::{
        AiAnalysis, AnalyzedQuote, Confidence, EvaluationResult, Quote, RecommendationLabel,
        RiskLevel, Rfp, Savings, SubScores,
    },
};

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Multi-factor quote evaluator.
///
/// Generic over the [`VendorHistory`] source; the default is the
/// deterministic [`SimulatedVendorHistory`].
#[derive(Debug, Clone, Default)]
pub struct QuoteEvaluator<H = SimulatedVendorHistory> {
    history: H,
}

impl QuoteEvaluator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: VendorHistory> QuoteEvaluator<H> {
    /// Evaluator backed by a custom vendor history source.
    pub fn with_vendor_history(history: H) -> Self {
        Self { history }
    }

    /// Evaluate a batch of quotes against `rfp` as of `now`.
    ///
    /// Returns the quotes ranked best first, a summary and strategic
    /// recommendations.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::NoQuotes`] when `quotes` is empty.
    pub fn evaluate(
        &self,
        quotes: &[Quote],
        rfp: &Rfp,
        now: DateTime<Utc>,
    ) -> EngineResult<EvaluationResult> {
        if quotes.is_empty() {
            return Err(EvaluationError::NoQuotes);
        }

        let ctx = BatchContext::new(quotes, rfp, now);
        let price_ranks =
            ranking::competition_ranks(&quotes.iter().map(Quote::scored_price).collect::<Vec<_>>());
        let delivery_ranks = ranking::competition_ranks(
            &quotes
                .iter()
                .map(|q| q.scored_delivery().map(f64::from))
                .collect::<Vec<_>>(),
        );

        let mut analyzed: Vec<AnalyzedQuote> = quotes
            .iter()
            .zip(price_ranks.into_iter().zip(delivery_ranks))
            .map(|(quote, (price_rank, delivery_rank))| {
                let mut analysis = self.analyze(quote, &ctx);
                analysis.price_rank = price_rank;
                analysis.delivery_rank = delivery_rank;
                AnalyzedQuote::new(quote.clone(), analysis)
            })
            .collect();

        ranking::rank_by_score(&mut analyzed);
        let summary = ranking::summarize(&analyzed).ok_or(EvaluationError::NoQuotes)?;
        let recommendations = recommendations::recommend(&analyzed);

        tracing::info!(
            quotes = analyzed.len(),
            top_vendor = %summary.best_overall.vendor,
            top_score = summary.best_overall.score,
            average_score = summary.average_score,
            "Quote evaluation completed"
        );

        Ok(EvaluationResult {
            analyzed_quotes: analyzed,
            summary,
            recommendations,
        })
    }

    /// Factor scores of one quote within its batch.
    pub fn score(&self, quote: &Quote, ctx: &BatchContext<'_>) -> SubScores {
        SubScores {
            price: scoring::price_score(quote, ctx),
            delivery: scoring::delivery_score(quote, ctx),
            compliance: scoring::compliance_score(quote, ctx),
            vendor_history: self.history.score(&quote.vendor.name),
        }
    }

    /// Full analysis of one quote within its batch. Batch ranks are left at 0.
    pub fn analyze(&self, quote: &Quote, ctx: &BatchContext<'_>) -> AiAnalysis {
        let scores = self.score(quote, ctx);
        let overall = WEIGHTS.combine(&scores);

        tracing::debug!(
            vendor = %quote.vendor.name,
            price = scores.price,
            delivery = scores.delivery,
            compliance = scores.compliance,
            vendor_history = scores.vendor_history,
            overall,
            "Scored quote"
        );

        AiAnalysis {
            overall_score: round1(overall),
            price_score: round1(scores.price),
            delivery_score: round1(scores.delivery),
            compliance_score: round1(scores.compliance),
            vendor_score: round1(scores.vendor_history),
            recommendation: RecommendationLabel::for_score(overall),
            risk_level: RiskLevel::for_score(overall),
            insights: insights::insights_for(&scores),
            price_rank: 0,
            delivery_rank: 0,
            savings: Savings::against_budget(quote, ctx.rfp),
            confidence: Confidence::for_score(overall),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Insight, QuoteItem, RecommendationKind, Vendor};
    use chrono::{Duration, TimeZone};

    /// Vendor history that gives every vendor the same score.
    struct FlatHistory(f64);

    impl VendorHistory for FlatHistory {
        fn score(&self, _vendor_name: &str) -> f64 {
            self.0
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 8, 30, 0).unwrap()
    }

    fn complete(name: &str, price: f64, delivery: u32) -> Quote {
        Quote::new(Vendor::named(name), price, delivery)
            .with_items(vec![QuoteItem::default()])
            .with_terms("Net 30")
    }

    #[test]
    fn rejects_empty_batch() {
        let err = QuoteEvaluator::new()
            .evaluate(&[], &Rfp::default(), now())
            .unwrap_err();
        assert_eq!(err, EvaluationError::NoQuotes);
    }

    #[test]
    fn budget_and_deadline_scenario() {
        let quotes = vec![complete("A", 8_000.0, 10), complete("B", 12_000.0, 5)];
        let rfp = Rfp::with_budget(10_000.0)
            .with_deadline((now() + Duration::days(30)).to_rfc3339());
        let evaluator = QuoteEvaluator::with_vendor_history(FlatHistory(80.0));

        let result = evaluator.evaluate(&quotes, &rfp, now()).unwrap();
        let [a, b] = [&result.analyzed_quotes[0], &result.analyzed_quotes[1]];

        assert_eq!(a.vendor_name(), "A");
        // A: price 100, delivery 40, compliance 100, vendor 80
        assert_eq!(a.ai_analysis.price_score, 100.0);
        assert_eq!(a.ai_analysis.delivery_score, 40.0);
        assert_eq!(a.ai_analysis.compliance_score, 100.0);
        assert_eq!(a.ai_analysis.overall_score, 80.0);
        assert_eq!(a.ai_analysis.recommendation, RecommendationLabel::Recommended);
        assert_eq!(a.ai_analysis.risk_level, RiskLevel::Low);
        assert_eq!(a.ai_analysis.confidence, Confidence::High);
        assert_eq!(a.ai_analysis.savings, Savings { amount: 2_000.0, percentage: 20.0 });
        assert_eq!(a.ai_analysis.price_rank, 1);
        assert_eq!(a.ai_analysis.delivery_rank, 2);

        // B: price 10, delivery 100, compliance 70, vendor 80
        assert_eq!(b.vendor_name(), "B");
        assert_eq!(b.ai_analysis.price_score, 10.0);
        assert_eq!(b.ai_analysis.delivery_score, 100.0);
        assert_eq!(b.ai_analysis.compliance_score, 70.0);
        assert_eq!(b.ai_analysis.overall_score, 56.0);
        assert_eq!(b.ai_analysis.risk_level, RiskLevel::High);
        assert_eq!(b.ai_analysis.savings, Savings::default());
        assert_eq!(b.ai_analysis.price_rank, 2);
        assert_eq!(b.ai_analysis.delivery_rank, 1);

        // B is faster but scores below 60, so only the top choice is named
        let kinds: Vec<_> = result.recommendations.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RecommendationKind::TopChoice]);
        assert_eq!(result.summary.average_score, 68.0);
        assert_eq!(result.summary.fastest_delivery.vendor, "B");
    }

    #[test]
    fn scenario_ranking_holds_for_any_simulated_vendor_scores() {
        let quotes = vec![complete("A", 8_000.0, 10), complete("B", 12_000.0, 5)];
        let rfp = Rfp::with_budget(10_000.0)
            .with_deadline((now() + Duration::days(30)).to_rfc3339());

        let result = QuoteEvaluator::new().evaluate(&quotes, &rfp, now()).unwrap();
        assert_eq!(result.analyzed_quotes[0].vendor_name(), "A");
    }

    #[test]
    fn single_quote_without_budget() {
        let quotes = vec![complete("Solo", 4_200.0, 7)];
        let evaluator = QuoteEvaluator::with_vendor_history(FlatHistory(90.0));
        let result = evaluator.evaluate(&quotes, &Rfp::default(), now()).unwrap();
        let analysis = &result.analyzed_quotes[0].ai_analysis;

        assert_eq!(analysis.price_score, 100.0);
        assert_eq!(analysis.delivery_score, 100.0);
        assert_eq!(analysis.overall_score, 99.0);
        assert_eq!(
            analysis.insights,
            vec![
                Insight::ExcellentPrice,
                Insight::FastDelivery,
                Insight::HighlyRatedVendor,
                Insight::FullyCompliant,
            ]
        );
        assert_eq!(result.summary.price_range.min, 4_200.0);
        assert_eq!(result.summary.price_range.max, 4_200.0);
    }

    #[test]
    fn incomplete_quote_loses_forty_compliance_points() {
        let quotes = vec![Quote::new(Vendor::named("Sloppy"), 500.0, 3)];
        let result = QuoteEvaluator::new()
            .evaluate(&quotes, &Rfp::default(), now())
            .unwrap();
        assert_eq!(result.analyzed_quotes[0].ai_analysis.compliance_score, 60.0);
    }

    #[test]
    fn missing_numbers_degrade_instead_of_failing() {
        let quotes = vec![
            Quote::new(Vendor::named("Blank"), 0.0, 0),
            complete("Real", 100.0, 5),
        ];
        let result = QuoteEvaluator::with_vendor_history(FlatHistory(50.0))
            .evaluate(&quotes, &Rfp::default(), now())
            .unwrap();
        let blank = result
            .analyzed_quotes
            .iter()
            .find(|q| q.vendor_name() == "Blank")
            .unwrap();
        assert_eq!(blank.ai_analysis.price_score, 0.0);
        assert_eq!(blank.ai_analysis.delivery_score, 0.0);
        assert_eq!(blank.ai_analysis.price_rank, 0);
        assert_eq!(result.analyzed_quotes[0].vendor_name(), "Real");
    }

    #[test]
    fn vendor_scores_are_reproducible_across_evaluations() {
        let quotes = vec![complete("Acme", 100.0, 5), complete("Globex", 200.0, 3)];
        let evaluator = QuoteEvaluator::new();
        let first = evaluator.evaluate(&quotes, &Rfp::default(), now()).unwrap();
        let second = QuoteEvaluator::new()
            .evaluate(&quotes, &Rfp::default(), now() + Duration::days(3))
            .unwrap();

        for quote in &first.analyzed_quotes {
            let twin = second
                .analyzed_quotes
                .iter()
                .find(|q| q.vendor_name() == quote.vendor_name())
                .unwrap();
            assert_eq!(quote.ai_analysis.vendor_score, twin.ai_analysis.vendor_score);
        }
    }

    #[test]
    fn round1_rounds_half_away_from_zero() {
        assert_eq!(round1(72.25), 72.3);
        assert_eq!(round1(72.24), 72.2);
        assert_eq!(round1(100.0), 100.0);
    }
}
