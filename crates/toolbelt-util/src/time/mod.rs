//! Date and date-time helpers over naive `chrono` values.
//!
//! ## Summary
//! Parsing fails soft (`None`), arithmetic on a missing value yields a missing
//! value, and equality against a missing value is always `false`. The zone is
//! passed explicitly to the free functions in [`dates`], or taken from a
//! [`Clock`] by [`LocalDates`].

mod clock;
pub mod dates;
mod field;
mod local_dates;
mod pattern;

pub use clock::{Clock, FixedClock, SystemClock, system_zone};
pub use dates::{
    add_to_date, add_to_date_time, compare, compare_ignoring_sub_second, date_from_epoch_seconds,
    date_of, date_time_from_epoch_seconds, date_time_of, date_time_to_epoch_seconds,
    date_to_epoch_seconds, format_date, format_date_time, parse_date, parse_date_time,
};
pub use field::CalendarField;
pub use local_dates::LocalDates;
pub use pattern::DatePattern;
