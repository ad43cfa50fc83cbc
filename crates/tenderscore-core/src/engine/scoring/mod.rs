//! Factor scorers.
//!
//! Every scorer takes one quote plus the [`BatchContext`] of the batch it
//! belongs to, because price and delivery are scored relative to the
//! sibling quotes.

mod compliance;
mod delivery;
mod price;
mod vendor_history;

pub use compliance::compliance_score;
pub use delivery::{deadline_score, delivery_score};
pub use price::{budget_score, price_score};
pub use vendor_history::{SimulatedVendorHistory, VendorHistory};

use chrono::{DateTime, Utc};

use crate::model::{Quote, Rfp};

/// Score used when a quote has a value but no sibling provides a range.
pub(crate) const NEUTRAL_SCORE: f64 = 50.0;

/// Minimum and maximum of a set of positive values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    /// Span of the given values, or `None` when there are none.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |span, v| {
            Some(match span {
                None => Self { min: v, max: v },
                Some(Self { min, max }) => Self {
                    min: min.min(v),
                    max: max.max(v),
                },
            })
        })
    }

    /// Inverted linear position inside the span: `min` scores 100, `max`
    /// scores 0. A degenerate span scores 100.
    pub fn relative_score(&self, value: f64) -> f64 {
        if self.max == self.min {
            100.0
        } else {
            100.0 - (value - self.min) / (self.max - self.min) * 100.0
        }
    }
}

/// Everything a scorer needs to know about the batch a quote belongs to.
///
/// Built once per evaluation so batch-wide values (price and delivery spans,
/// days left until the deadline) are computed a single time.
#[derive(Debug, Clone)]
pub struct BatchContext<'a> {
    pub rfp: &'a Rfp,
    pub quotes: &'a [Quote],
    /// Whole days until the RFP deadline; `None` when missing or unparseable.
    pub days_until_deadline: Option<i64>,
    price_span: Option<Span>,
    delivery_span: Option<Span>,
}

impl<'a> BatchContext<'a> {
    pub fn new(quotes: &'a [Quote], rfp: &'a Rfp, now: DateTime<Utc>) -> Self {
        let days_until_deadline = rfp.days_until_deadline(now);
        if let (None, Some(raw)) = (days_until_deadline, rfp.deadline.as_deref()) {
            tracing::warn!(
                deadline = %raw,
                "RFP deadline could not be parsed, deadline scoring falls back to relative ranking"
            );
        }

        Self {
            rfp,
            quotes,
            days_until_deadline,
            price_span: Span::of(quotes.iter().filter_map(Quote::scored_price)),
            delivery_span: Span::of(
                quotes
                    .iter()
                    .filter_map(Quote::scored_delivery)
                    .map(f64::from),
            ),
        }
    }

    /// Span of positive prices across the batch.
    pub fn price_span(&self) -> Option<Span> {
        self.price_span
    }

    /// Span of positive delivery times across the batch.
    pub fn delivery_span(&self) -> Option<Span> {
        self.delivery_span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vendor;
    use chrono::TimeZone;

    #[test]
    fn span_tracks_min_and_max() {
        let span = Span::of([3.0, 1.0, 7.0]).unwrap();
        assert_eq!(span, Span { min: 1.0, max: 7.0 });
        assert_eq!(Span::of(std::iter::empty()), None);
    }

    #[test]
    fn relative_score_inverts_position() {
        let span = Span { min: 100.0, max: 200.0 };
        assert_eq!(span.relative_score(100.0), 100.0);
        assert_eq!(span.relative_score(200.0), 0.0);
        assert_eq!(span.relative_score(150.0), 50.0);
    }

    #[test]
    fn degenerate_span_scores_full_marks() {
        let span = Span { min: 42.0, max: 42.0 };
        assert_eq!(span.relative_score(42.0), 100.0);
    }

    #[test]
    fn context_ignores_missing_values_in_spans() {
        let quotes = vec![
            Quote::new(Vendor::named("A"), 0.0, 10),
            Quote::new(Vendor::named("B"), 500.0, 0),
            Quote::new(Vendor::named("C"), 900.0, 20),
        ];
        let rfp = Rfp::default();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let ctx = BatchContext::new(&quotes, &rfp, now);

        assert_eq!(ctx.price_span(), Some(Span { min: 500.0, max: 900.0 }));
        assert_eq!(ctx.delivery_span(), Some(Span { min: 10.0, max: 20.0 }));
        assert_eq!(ctx.days_until_deadline, None);
    }
}
