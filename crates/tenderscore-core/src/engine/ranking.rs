//! Ranking of analyzed quotes and batch summary statistics.

use crate::model::{
    AnalyzedQuote, BestOverall, BestPrice, FastestDelivery, PriceRange, Summary,
};

use super::round1;

const UNKNOWN_VENDOR: &str = "Unknown";

/// Sort analyzed quotes by overall score, best first.
///
/// The sort is stable: quotes with equal scores keep their submission order.
pub fn rank_by_score(quotes: &mut [AnalyzedQuote]) {
    quotes.sort_by(|a, b| b.overall_score().total_cmp(&a.overall_score()));
}

/// 1-based competition ranks ("1224" ranking) of `values`, lowest first.
///
/// Equal values share a rank. `None` entries are unranked and get 0.
pub fn competition_ranks(values: &[Option<f64>]) -> Vec<usize> {
    let mut sorted: Vec<f64> = values.iter().flatten().copied().collect();
    sorted.sort_by(f64::total_cmp);

    values
        .iter()
        .map(|value| match value {
            Some(v) => 1 + sorted.partition_point(|other| other < v),
            None => 0,
        })
        .collect()
}

/// Summary statistics over a ranked, non-empty batch.
///
/// Best price and fastest delivery are picked independently of the ranking;
/// on ties the better-ranked quote wins. Returns `None` for an empty batch.
pub fn summarize(ranked: &[AnalyzedQuote]) -> Option<Summary> {
    let best = ranked.first()?;
    let cheapest = &ranked[cheapest_index(ranked)?];
    let fastest = &ranked[fastest_index(ranked)?];

    let total_score: f64 = ranked.iter().map(AnalyzedQuote::overall_score).sum();
    let prices = ranked.iter().map(|q| q.quote.total_price);

    Some(Summary {
        total_quotes: ranked.len(),
        average_score: round1(total_score / ranked.len() as f64),
        best_overall: BestOverall {
            vendor: best.quote.vendor.name_or(UNKNOWN_VENDOR).to_string(),
            score: best.overall_score(),
            price: best.quote.total_price,
            delivery: best.quote.delivery_time,
        },
        best_price: BestPrice {
            vendor: cheapest.quote.vendor.name_or(UNKNOWN_VENDOR).to_string(),
            price: cheapest.quote.total_price,
        },
        fastest_delivery: FastestDelivery {
            vendor: fastest.quote.vendor.name_or(UNKNOWN_VENDOR).to_string(),
            delivery: fastest.quote.delivery_time,
        },
        price_range: PriceRange {
            min: prices.clone().fold(f64::INFINITY, f64::min),
            max: prices.fold(f64::NEG_INFINITY, f64::max),
        },
    })
}

/// Position of the first cheapest quote in `ranked`.
pub(crate) fn cheapest_index(ranked: &[AnalyzedQuote]) -> Option<usize> {
    ranked
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.quote.total_price.total_cmp(&b.quote.total_price))
        .map(|(i, _)| i)
}

/// Position of the first fastest quote in `ranked`.
pub(crate) fn fastest_index(ranked: &[AnalyzedQuote]) -> Option<usize> {
    ranked
        .iter()
        .enumerate()
        .min_by_key(|(_, q)| q.quote.delivery_time)
        .map(|(i, _)| i)
}
