//! Serde field adapters for lenient date-time input and whitespace-trimmed strings.
//!
//! Use them with `#[serde(deserialize_with = "...")]`:
//!
//! ```
//! use chrono::NaiveDateTime;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Event {
//!     #[serde(deserialize_with = "toolbelt_serde::trimmed::deserialize")]
//!     title: String,
//!     #[serde(deserialize_with = "toolbelt_serde::local_date_time::deserialize")]
//!     starts_at: NaiveDateTime,
//! }
//! ```

pub mod error;
pub mod local_date_time;
pub mod trimmed;

pub use error::DateTimeFormatError;
