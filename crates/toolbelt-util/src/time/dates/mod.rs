//! Stateless date and date-time helpers with an explicit timezone.
//!
//! Values are naive (`NaiveDate`, `NaiveDateTime`); the zone is supplied per
//! call and never stored on the value.

use chrono::format::{ParseResult, Parsed};
use chrono::{
    DateTime, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset, SubsecRound,
    TimeDelta, TimeZone,
};
use chrono_tz::Tz;
use toolbelt_core::error::{CoreError, CoreResult};

use super::field::CalendarField;
use super::pattern::DatePattern;

fn unsupported(field: CalendarField, target: &str) -> CoreError {
    CoreError::InvalidArgument(format!("Unsupported field for {target}: {field}"))
}

fn out_of_range(what: impl std::fmt::Display) -> CoreError {
    CoreError::OutOfRange(what.to_string())
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

/// ## Summary
/// Adds `amount` of `field` to a date. Negative amounts subtract.
///
/// Month and year arithmetic clamp to the last day of the resulting month.
/// A `None` date yields `Ok(None)`.
///
/// ## Errors
/// Returns `CoreError::InvalidArgument` for fields other than day, month and
/// year, and `CoreError::OutOfRange` if the result is not representable.
pub fn add_to_date(
    date: Option<NaiveDate>,
    field: CalendarField,
    amount: i32,
) -> CoreResult<Option<NaiveDate>> {
    let Some(date) = date else {
        return Ok(None);
    };

    let shifted = match field {
        CalendarField::DayOfMonth => date.checked_add_signed(TimeDelta::days(i64::from(amount))),
        CalendarField::Month => shift_months(date, i64::from(amount)),
        CalendarField::Year => shift_months(date, i64::from(amount) * 12),
        other => return Err(unsupported(other, "date")),
    };

    shifted
        .map(Some)
        .ok_or_else(|| out_of_range(format_args!("{date} + {amount} {field}")))
}

/// ## Summary
/// Adds `amount` of `field` to a date-time. Negative amounts subtract.
///
/// A `None` date-time yields `Ok(None)`.
///
/// ## Errors
/// Returns `CoreError::InvalidArgument` for `Millisecond`, and
/// `CoreError::OutOfRange` if the result is not representable.
pub fn add_to_date_time(
    date_time: Option<NaiveDateTime>,
    field: CalendarField,
    amount: i32,
) -> CoreResult<Option<NaiveDateTime>> {
    let Some(date_time) = date_time else {
        return Ok(None);
    };

    let amount64 = i64::from(amount);
    let shifted = match field {
        CalendarField::DayOfMonth => date_time.checked_add_signed(TimeDelta::days(amount64)),
        CalendarField::Month => {
            shift_months(date_time.date(), amount64).map(|d| d.and_time(date_time.time()))
        }
        CalendarField::Year => {
            shift_months(date_time.date(), amount64 * 12).map(|d| d.and_time(date_time.time()))
        }
        CalendarField::WeekOfYear => date_time.checked_add_signed(TimeDelta::weeks(amount64)),
        CalendarField::Hour | CalendarField::HourOfDay => {
            date_time.checked_add_signed(TimeDelta::hours(amount64))
        }
        CalendarField::Minute => date_time.checked_add_signed(TimeDelta::minutes(amount64)),
        CalendarField::Second => date_time.checked_add_signed(TimeDelta::seconds(amount64)),
        CalendarField::Millisecond => return Err(unsupported(field, "date-time")),
    };

    shifted
        .map(Some)
        .ok_or_else(|| out_of_range(format_args!("{date_time} + {amount} {field}")))
}

/// ## Summary
/// Places a wall-clock date-time in `zone`.
///
/// A time repeated by a DST fold takes the earlier instant. A time skipped by a
/// DST gap is moved later by the length of the gap.
#[must_use]
pub fn resolve_local(naive: NaiveDateTime, zone: Tz) -> DateTime<Tz> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            // Offset in force before the transition.
            let probe = naive.checked_sub_signed(TimeDelta::days(1)).unwrap_or(naive);
            let before = zone.offset_from_utc_datetime(&probe).fix();
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))
                .unwrap_or(naive);
            zone.from_utc_datetime(&utc)
        }
    }
}

/// Start of `date` in `zone`.
#[must_use]
pub fn start_of_day(date: NaiveDate, zone: Tz) -> DateTime<Tz> {
    resolve_local(date.and_time(NaiveTime::MIN), zone)
}

fn parse_fields(text: &str, pattern: DatePattern) -> ParseResult<Parsed> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, text, pattern.items().iter())?;
    Ok(parsed)
}

/// ## Summary
/// Parses `text` as a date using `pattern`.
///
/// Offset-bearing text is first read as an instant and converted into `zone`;
/// otherwise the text is read as a plain date. Returns `None` on failure.
#[must_use]
pub fn parse_date(text: &str, pattern: DatePattern, zone: Tz) -> Option<NaiveDate> {
    let parsed = parse_fields(text, pattern).and_then(|fields| {
        fields
            .to_datetime()
            .map(|dt| dt.with_timezone(&zone).date_naive())
            .or_else(|_e| fields.to_naive_date())
    });

    match parsed {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(text = %text, pattern = %pattern, error = %e, "Failed to parse date");
            None
        }
    }
}

/// ## Summary
/// Parses `text` as a date-time using `pattern`.
///
/// Offset-bearing text is first read as an instant and converted into `zone`;
/// otherwise the text is read as a plain date-time. Returns `None` on failure.
#[must_use]
pub fn parse_date_time(text: &str, pattern: DatePattern, zone: Tz) -> Option<NaiveDateTime> {
    let parsed = parse_fields(text, pattern).and_then(|fields| {
        fields
            .to_datetime()
            .map(|dt| dt.with_timezone(&zone).naive_local())
            .or_else(|_e| fields.to_naive_datetime_with_offset(0))
    });

    match parsed {
        Ok(date_time) => Some(date_time),
        Err(e) => {
            tracing::debug!(
                text = %text,
                pattern = %pattern,
                error = %e,
                "Failed to parse date-time"
            );
            None
        }
    }
}

/// Renders the start of `date` in `zone` using `pattern`.
#[must_use]
pub fn format_date(date: NaiveDate, pattern: DatePattern, zone: Tz) -> String {
    let items = pattern.items();
    start_of_day(date, zone)
        .format_with_items(items.iter())
        .to_string()
}

/// Renders `date_time`, placed in `zone`, using `pattern`.
#[must_use]
pub fn format_date_time(date_time: NaiveDateTime, pattern: DatePattern, zone: Tz) -> String {
    let items = pattern.items();
    resolve_local(date_time, zone)
        .format_with_items(items.iter())
        .to_string()
}

/// Seconds since the Unix epoch at the start of `date` in `zone`.
#[must_use]
pub fn date_to_epoch_seconds(date: NaiveDate, zone: Tz) -> i64 {
    start_of_day(date, zone).timestamp()
}

/// Seconds since the Unix epoch of `date_time` in `zone`. Sub-second precision is dropped.
#[must_use]
pub fn date_time_to_epoch_seconds(date_time: NaiveDateTime, zone: Tz) -> i64 {
    resolve_local(date_time, zone).timestamp()
}

/// ## Summary
/// Calendar date in `zone` at `epoch_seconds`.
///
/// ## Errors
/// Returns `CoreError::OutOfRange` if the instant is not representable.
pub fn date_from_epoch_seconds(epoch_seconds: i64, zone: Tz) -> CoreResult<NaiveDate> {
    date_time_from_epoch_seconds(epoch_seconds, zone).map(|dt| dt.date())
}

/// ## Summary
/// Wall-clock date-time in `zone` at `epoch_seconds`.
///
/// ## Errors
/// Returns `CoreError::OutOfRange` if the instant is not representable.
pub fn date_time_from_epoch_seconds(epoch_seconds: i64, zone: Tz) -> CoreResult<NaiveDateTime> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|utc| utc.with_timezone(&zone).naive_local())
        .ok_or_else(|| out_of_range(format_args!("epoch seconds {epoch_seconds}")))
}

/// Returns `true` if both dates are present and fall on the same day.
#[must_use]
pub fn compare(a: Option<NaiveDate>, b: Option<NaiveDate>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// Returns `true` if both date-times are present and equal once sub-second
/// precision is truncated.
#[must_use]
pub fn compare_ignoring_sub_second(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.trunc_subsecs(0) == b.trunc_subsecs(0))
}

/// ## Summary
/// Builds a date from its components.
///
/// ## Errors
/// Returns `CoreError::InvalidArgument` if the components do not form a valid date.
pub fn date_of(year: i32, month: u32, day: u32) -> CoreResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CoreError::InvalidArgument(format!("invalid date: {year:04}-{month:02}-{day:02}"))
    })
}

/// ## Summary
/// Builds a date-time from its components.
///
/// ## Errors
/// Returns `CoreError::InvalidArgument` if the components do not form a valid date-time.
pub fn date_time_of(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> CoreResult<NaiveDateTime> {
    date_of(year, month, day)?
        .and_hms_opt(hour, minute, second)
        .ok_or_else(|| {
            CoreError::InvalidArgument(format!(
                "invalid time: {hour:02}:{minute:02}:{second:02}"
            ))
        })
}
