//! Whitespace-trimming string deserialization.

use serde::{Deserialize, Deserializer};

fn trim_owned(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

/// ## Summary
/// Deserializes a string with leading and trailing whitespace removed.
///
/// ## Errors
/// Returns the deserializer's error if the value is not a string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(trim_owned)
}

/// Adapter for `Option<String>` fields; `null` stays `None`.
pub mod option {
    use super::{Deserialize, Deserializer, trim_owned};

    /// ## Errors
    /// Returns the deserializer's error if a present value is not a string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.map(trim_owned))
    }
}
