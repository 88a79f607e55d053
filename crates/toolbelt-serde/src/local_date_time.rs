//! Lenient date-time deserialization.
//!
//! ## Summary
//! Accepts, in order:
//! 1. ISO-8601 date-time, with or without seconds, fraction or offset
//!    (`2025-07-25T10:30:45`, `2025-07-25T10:30:45+05:30`)
//! 2. Space-separated date-time (`2025-07-25 10:30:45`)
//! 3. Date only (`2025-07-25`), taken at midnight
//!
//! An offset-bearing value keeps its own wall-clock time.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, de};
use toolbelt_util::time::{DatePattern, parse_date_time};

use crate::error::DateTimeFormatError;

fn parse_iso(text: &str) -> Option<NaiveDateTime> {
    text.parse::<NaiveDateTime>()
        .or_else(|_e| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .or_else(|_e| DateTime::parse_from_rfc3339(text).map(|dt| dt.naive_local()))
        .ok()
}

fn parse_space_separated(text: &str) -> Option<NaiveDateTime> {
    // No offset in the pattern, so the zone does not affect the result.
    parse_date_time(text, DatePattern::YmdHms, Tz::UTC)
}

fn parse_date_only(text: &str) -> Option<NaiveDateTime> {
    text.parse::<NaiveDate>()
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// ## Summary
/// Parses trimmed `text` as a date-time, trying each accepted form in turn.
///
/// ## Errors
/// Returns `DateTimeFormatError` naming the input and the expected formats if
/// no form matches.
pub fn parse_local_date_time(text: &str) -> Result<NaiveDateTime, DateTimeFormatError> {
    let text = text.trim();

    parse_iso(text)
        .or_else(|| parse_space_separated(text))
        .or_else(|| parse_date_only(text))
        .ok_or_else(|| {
            tracing::debug!(input = %text, "No accepted date-time form matched");
            DateTimeFormatError {
                input: text.to_string(),
            }
        })
}

/// ## Summary
/// Deserializes a `NaiveDateTime` from a string in any accepted form.
///
/// ## Errors
/// Returns a custom deserializer error if the value is not a string or does not parse.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_local_date_time(&text).map_err(de::Error::custom)
}

/// Adapter for `Option<NaiveDateTime>` fields; `null` becomes `None`.
pub mod option {
    use super::{Deserialize, Deserializer, NaiveDateTime, de, parse_local_date_time};

    /// ## Errors
    /// Returns a custom deserializer error if a present value does not parse.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| parse_local_date_time(&text))
            .transpose()
            .map_err(de::Error::custom)
    }
}
