//! Date helpers bound to a clock for "now" and the default zone.

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use toolbelt_core::error::{CoreError, CoreResult};

use super::clock::{Clock, SystemClock};
use super::dates;
use super::field::CalendarField;
use super::pattern::DatePattern;

/// Date helpers that take their zone and current time from a [`Clock`].
///
/// `LocalDates::system()` uses the host clock and zone. Tests and other
/// deterministic callers can supply a [`super::FixedClock`] instead.
#[derive(Debug, Clone, Default)]
pub struct LocalDates<C = SystemClock> {
    clock: C,
}

impl LocalDates<SystemClock> {
    /// Helpers backed by the host clock and zone.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> LocalDates<C> {
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The zone applied by every method on this type.
    #[must_use]
    pub fn zone(&self) -> Tz {
        self.clock.zone()
    }

    /// Today's date in the clock's zone.
    #[must_use]
    pub fn current_date(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The current wall-clock date-time in the clock's zone.
    #[must_use]
    pub fn current_date_time(&self) -> NaiveDateTime {
        self.clock.local_now()
    }

    /// ## Summary
    /// Adds `amount` of `field` to today's date.
    ///
    /// ## Errors
    /// Same as [`dates::add_to_date`].
    pub fn add_in_current_date(&self, field: CalendarField, amount: i32) -> CoreResult<NaiveDate> {
        dates::add_to_date(Some(self.current_date()), field, amount)?
            .ok_or(CoreError::InvariantViolation("date arithmetic dropped a present date"))
    }

    /// ## Summary
    /// Adds `amount` of `field` to the current date-time.
    ///
    /// ## Errors
    /// Same as [`dates::add_to_date_time`].
    pub fn add_in_current_date_time(
        &self,
        field: CalendarField,
        amount: i32,
    ) -> CoreResult<NaiveDateTime> {
        dates::add_to_date_time(Some(self.current_date_time()), field, amount)?.ok_or(
            CoreError::InvariantViolation("date-time arithmetic dropped a present date-time"),
        )
    }

    /// Parses a date in the clock's zone. Returns `None` on failure.
    #[must_use]
    pub fn parse_date(&self, text: &str, pattern: DatePattern) -> Option<NaiveDate> {
        dates::parse_date(text, pattern, self.zone())
    }

    /// Parses a date-time in the clock's zone. Returns `None` on failure.
    #[must_use]
    pub fn parse_date_time(&self, text: &str, pattern: DatePattern) -> Option<NaiveDateTime> {
        dates::parse_date_time(text, pattern, self.zone())
    }

    #[must_use]
    pub fn format_date(&self, date: NaiveDate, pattern: DatePattern) -> String {
        dates::format_date(date, pattern, self.zone())
    }

    #[must_use]
    pub fn format_date_time(&self, date_time: NaiveDateTime, pattern: DatePattern) -> String {
        dates::format_date_time(date_time, pattern, self.zone())
    }

    #[must_use]
    pub fn date_to_epoch_seconds(&self, date: NaiveDate) -> i64 {
        dates::date_to_epoch_seconds(date, self.zone())
    }

    #[must_use]
    pub fn date_time_to_epoch_seconds(&self, date_time: NaiveDateTime) -> i64 {
        dates::date_time_to_epoch_seconds(date_time, self.zone())
    }

    /// ## Errors
    /// Returns `CoreError::OutOfRange` if the instant is not representable.
    pub fn date_from_epoch_seconds(&self, epoch_seconds: i64) -> CoreResult<NaiveDate> {
        dates::date_from_epoch_seconds(epoch_seconds, self.zone())
    }

    /// ## Errors
    /// Returns `CoreError::OutOfRange` if the instant is not representable.
    pub fn date_time_from_epoch_seconds(&self, epoch_seconds: i64) -> CoreResult<NaiveDateTime> {
        dates::date_time_from_epoch_seconds(epoch_seconds, self.zone())
    }
}
