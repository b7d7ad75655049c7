//! Serde helper functions for request payload deserialization.
//!
//! Validation that belongs to a single field runs here, so a payload that
//! deserializes successfully already satisfies its field constraints.

use serde::{Deserialize, Deserializer};

use crate::item::ItemError;

/// Deserialize a required item name, rejecting blank strings.
pub fn deserialize_item_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if name.trim().is_empty() {
        return Err(serde::de::Error::custom(ItemError::EmptyName));
    }
    Ok(name)
}

/// Deserialize an item name that may be omitted from a partial update.
///
/// Use with `#[serde(default)]`: a missing field stays `None`, while an
/// explicit `null` or a blank string is an error since names are not
/// nullable.
pub fn deserialize_optional_item_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_item_name(deserializer).map(Some)
}

/// Deserialize a field that may be omitted but must not be `null`.
///
/// Use with `#[serde(default)]` on `Option<T>` fields whose target is not
/// nullable.
pub fn deserialize_non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
