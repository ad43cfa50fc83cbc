//! Deserialization helpers for lenient request payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a field, mapping an explicit JSON `null` to `T::default()`.
///
/// Combine with `#[serde(default)]` so that absent fields default as well.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
