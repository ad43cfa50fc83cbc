use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_defaults::null_as_default;

const SECONDS_PER_DAY: i64 = 86_400;

/// The buyer's request for proposal that quotes are scored against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rfp {
    /// Budget ceiling; zero means unconstrained.
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: f64,
    /// Delivery deadline as sent by the client (ISO 8601 / RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Rfp {
    pub fn with_budget(budget: f64) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Budget ceiling, when one is set.
    pub fn budget_limit(&self) -> Option<f64> {
        (self.budget > 0.0).then_some(self.budget)
    }

    /// Whole days from `now` until the deadline, floored.
    ///
    /// Returns `None` when no deadline is set or it cannot be parsed.
    pub fn days_until_deadline(&self, now: DateTime<Utc>) -> Option<i64> {
        let deadline = parse_deadline(self.deadline.as_deref()?)?;
        Some((deadline - now).num_seconds().div_euclid(SECONDS_PER_DAY))
    }
}

/// Parse a deadline timestamp.
///
/// Accepts RFC 3339 (`2025-03-01T12:00:00Z`, `...+02:00`), naive ISO date-times
/// (read as UTC) and bare dates (midnight UTC).
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_common_deadline_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_deadline("2025-02-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_deadline("2025-02-01T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_deadline("2025-02-01T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_deadline("2025-02-01T00:00:00"), Some(expected));
        assert_eq!(parse_deadline("2025-02-01"), Some(expected));
        assert_eq!(parse_deadline("next tuesday"), None);
        assert_eq!(parse_deadline(""), None);
    }

    #[test]
    fn days_until_deadline_floors_partial_days() {
        let rfp = Rfp::default().with_deadline((now() + Duration::hours(36)).to_rfc3339());
        assert_eq!(rfp.days_until_deadline(now()), Some(1));

        let past = Rfp::default().with_deadline((now() - Duration::hours(12)).to_rfc3339());
        assert_eq!(past.days_until_deadline(now()), Some(-1));
    }

    #[test]
    fn missing_or_bad_deadline_yields_none() {
        assert_eq!(Rfp::default().days_until_deadline(now()), None);
        let rfp = Rfp::default().with_deadline("soon");
        assert_eq!(rfp.days_until_deadline(now()), None);
    }

    #[test]
    fn zero_budget_is_unconstrained() {
        assert_eq!(Rfp::with_budget(0.0).budget_limit(), None);
        assert_eq!(Rfp::with_budget(500.0).budget_limit(), Some(500.0));
    }

    #[test]
    fn deserializes_with_defaults() {
        let rfp: Rfp = serde_json::from_str(r#"{"title": "Office chairs"}"#).unwrap();
        assert_eq!(rfp.budget, 0.0);
        assert!(rfp.deadline.is_none());
        assert_eq!(rfp.extra["title"], "Office chairs");
    }
}
