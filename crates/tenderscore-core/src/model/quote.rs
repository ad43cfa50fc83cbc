use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_defaults::null_as_default;

/// The vendor behind a quote, as populated by the procurement back end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Vendor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Display name, or `fallback` when the vendor has no usable name.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.name.trim().is_empty() {
            fallback
        } else {
            &self.name
        }
    }
}

/// One line item of a quote. Only the presence of items matters for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(rename = "unitPrice", default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(rename = "totalPrice", default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A vendor's bid against an RFP.
///
/// Fields the engine does not understand (`_id`, `rfpId`, `status`, ...) are
/// carried in `extra` and written back unchanged next to the analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "vendorId", default, deserialize_with = "null_as_default")]
    pub vendor: Vendor,
    /// Total quoted price; zero when missing.
    #[serde(rename = "totalPrice", default, deserialize_with = "null_as_default")]
    pub total_price: f64,
    /// Delivery time in days; zero when missing.
    #[serde(rename = "deliveryTime", default, deserialize_with = "null_as_default")]
    pub delivery_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<QuoteItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub terms: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quote {
    pub fn new(vendor: Vendor, total_price: f64, delivery_time: u32) -> Self {
        Self {
            vendor,
            total_price,
            delivery_time,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<QuoteItem>) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    /// Price usable for scoring; `None` when missing or non-positive.
    pub fn scored_price(&self) -> Option<f64> {
        (self.total_price > 0.0).then_some(self.total_price)
    }

    /// Delivery time usable for scoring; `None` when missing.
    pub fn scored_delivery(&self) -> Option<u32> {
        (self.delivery_time > 0).then_some(self.delivery_time)
    }

    pub fn has_terms(&self) -> bool {
        !self.terms.trim().is_empty()
    }
}
