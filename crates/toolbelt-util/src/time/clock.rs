//! Sources of "now" and of the default timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use toolbelt_core::config::TimeConfig;
use toolbelt_core::error::CoreResult;

/// Supplies the current instant and the zone used when a caller gives none.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The zone applied to operations that take no explicit zone.
    fn zone(&self) -> Tz;

    /// The current wall-clock date-time in [`Clock::zone`].
    fn local_now(&self) -> NaiveDateTime {
        self.now().with_timezone(&self.zone()).naive_local()
    }

    /// The current calendar date in [`Clock::zone`].
    fn today(&self) -> NaiveDate {
        self.local_now().date()
    }
}

/// ## Summary
/// Detects the host's IANA timezone.
///
/// Falls back to UTC, with a warning, if the host zone cannot be read or is
/// not a known IANA name.
#[must_use]
pub fn system_zone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => name.parse::<Tz>().unwrap_or_else(|_e| {
            tracing::warn!(zone = %name, "Unrecognised host timezone, using UTC");
            Tz::UTC
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read host timezone, using UTC");
            Tz::UTC
        }
    }
}

/// Host clock with a zone fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    zone: Tz,
}

impl SystemClock {
    /// Creates a clock using the host zone.
    #[must_use]
    pub fn new() -> Self {
        Self::with_zone(system_zone())
    }

    /// Creates a clock that reads host time but reports `zone`.
    #[must_use]
    pub const fn with_zone(zone: Tz) -> Self {
        Self { zone }
    }

    /// ## Summary
    /// Creates a clock from configuration, preferring the configured zone
    /// over the host zone.
    ///
    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if the configured zone is not recognised.
    pub fn from_config(config: &TimeConfig) -> CoreResult<Self> {
        Ok(config
            .resolve_zone()?
            .map_or_else(Self::new, Self::with_zone))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn zone(&self) -> Tz {
        self.zone
    }
}

/// Clock frozen at a single instant, for deterministic callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    zone: Tz,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<Utc>, zone: Tz) -> Self {
        Self { instant, zone }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn zone(&self) -> Tz {
        self.zone
    }
}
