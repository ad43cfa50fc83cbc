//! Lightweight price/delivery comparison that bypasses scoring.

use serde::Serialize;

use crate::{
    error::{EngineResult, EvaluationError},
    model::Quote,
};

/// Minimum, maximum and mean of one quote attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl ValueSummary {
    fn of(values: &[f64]) -> Self {
        let (min, max, sum) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
        );
        Self {
            min,
            max,
            avg: sum / values.len() as f64,
        }
    }
}

/// Cheapest and fastest quote of a batch plus price and delivery statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub cheapest: Quote,
    pub fastest: Quote,
    pub price_summary: ValueSummary,
    pub delivery_summary: ValueSummary,
}

/// Compare quotes on raw price and delivery time.
///
/// Missing values count as zero, exactly as submitted. On ties the earlier
/// quote wins.
///
/// # Errors
///
/// Returns [`EvaluationError::NoQuotes`] when `quotes` is empty.
pub fn compare_quotes(quotes: &[Quote]) -> EngineResult<Comparison> {
    let cheapest = quotes
        .iter()
        .min_by(|a, b| a.total_price.total_cmp(&b.total_price))
        .ok_or(EvaluationError::NoQuotes)?;
    let fastest = quotes
        .iter()
        .min_by_key(|q| q.delivery_time)
        .ok_or(EvaluationError::NoQuotes)?;

    let prices: Vec<f64> = quotes.iter().map(|q| q.total_price).collect();
    let deliveries: Vec<f64> = quotes.iter().map(|q| f64::from(q.delivery_time)).collect();

    Ok(Comparison {
        cheapest: cheapest.clone(),
        fastest: fastest.clone(),
        price_summary: ValueSummary::of(&prices),
        delivery_summary: ValueSummary::of(&deliveries),
    })
}
