//! Shared fixtures for integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde_json::{Map, Value};

use toolbelt_test::component::time::{date_of, date_time_of};

/// Zones with no DST, with DST, with half-hour offsets and with midnight transitions.
pub const ZONES: [Tz; 8] = [
    Tz::UTC,
    chrono_tz::Asia::Kolkata,
    chrono_tz::America::New_York,
    chrono_tz::Europe::London,
    chrono_tz::Australia::Adelaide,
    chrono_tz::America::Sao_Paulo,
    chrono_tz::Pacific::Chatham,
    chrono_tz::America::St_Johns,
];

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {other}"),
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    date_of(year, month, day).expect("valid date")
}

pub fn date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> NaiveDateTime {
    date_time_of(year, month, day, hour, minute, second).expect("valid date-time")
}

/// Dates that include DST transition days and a leap day.
pub fn sample_dates() -> Vec<NaiveDate> {
    vec![
        date(1970, 1, 1),
        date(1999, 12, 31),
        date(2018, 11, 4),
        date(2020, 2, 29),
        date(2021, 1, 20),
        date(2021, 3, 14),
        date(2021, 3, 28),
        date(2021, 10, 3),
        date(2021, 11, 7),
        date(2038, 1, 19),
    ]
}
