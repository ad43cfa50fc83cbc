//! Request identifiers used to correlate log lines with API responses.
//!
//! Client-supplied ids are accepted only when they are short and made of
//! characters that cannot break structured log output.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Maximum length accepted for a client-provided request id.
pub const MAX_REQUEST_ID_LENGTH: usize = 128;

/// Validation failure for a client-provided request id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRequestId {
    #[error("request id is empty")]
    Empty,
    #[error("request id exceeds {MAX_REQUEST_ID_LENGTH} characters (got {0})")]
    TooLong(usize),
    #[error("request id contains invalid character {0:?}")]
    InvalidChar(char),
}

/// Correlation id attached to every HTTP request and error response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Parse and validate a request id.
    ///
    /// Only ASCII alphanumerics, hyphens and underscores are accepted. Colons
    /// are rejected because they separate `key:value` pairs in log lines.
    pub fn parse(id: impl AsRef<str>) -> Result<Self, InvalidRequestId> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(InvalidRequestId::Empty);
        }
        if id.len() > MAX_REQUEST_ID_LENGTH {
            return Err(InvalidRequestId::TooLong(id.len()));
        }
        if let Some(c) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(InvalidRequestId::InvalidChar(c));
        }
        Ok(Self(id.to_string()))
    }

    /// Generate a new random request id using UUID v4
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = InvalidRequestId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RequestId> for String {
    fn from(id: RequestId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid() {
        let id = RequestId::generate();
        assert!(RequestId::parse(id.as_str()).is_ok());
    }

    #[test]
    fn rejects_log_injection_characters() {
        assert_eq!(
            RequestId::parse("abc:def"),
            Err(InvalidRequestId::InvalidChar(':'))
        );
        assert_eq!(
            RequestId::parse("abc\ndef"),
            Err(InvalidRequestId::InvalidChar('\n'))
        );
        assert_eq!(RequestId::parse(""), Err(InvalidRequestId::Empty));
    }

    #[test]
    fn rejects_oversized_ids() {
        let long = "a".repeat(MAX_REQUEST_ID_LENGTH + 1);
        assert_eq!(
            RequestId::parse(&long),
            Err(InvalidRequestId::TooLong(MAX_REQUEST_ID_LENGTH + 1))
        );
        assert!(RequestId::parse("a".repeat(MAX_REQUEST_ID_LENGTH)).is_ok());
    }

    #[test]
    fn accepts_client_style_ids() {
        let id: RequestId = "req_2024-abc".parse().unwrap();
        assert_eq!(id.to_string(), "req_2024-abc");
    }
}
