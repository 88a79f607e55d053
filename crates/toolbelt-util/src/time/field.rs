//! Calendar fields accepted by date arithmetic.

use std::fmt;

use toolbelt_core::error::CoreError;

/// A calendar field to add to or subtract from.
///
/// Not every field applies to every value: dates accept day, month and year;
/// date-times additionally accept week, hour, minute and second.
/// `Millisecond` is never supported and exists so callers get a clear error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarField {
    DayOfMonth,
    Month,
    Year,
    WeekOfYear,
    Hour,
    HourOfDay,
    Minute,
    Second,
    Millisecond,
}

impl CalendarField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DayOfMonth => "DAY_OF_MONTH",
            Self::Month => "MONTH",
            Self::Year => "YEAR",
            Self::WeekOfYear => "WEEK_OF_YEAR",
            Self::Hour => "HOUR",
            Self::HourOfDay => "HOUR_OF_DAY",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
            Self::Millisecond => "MILLISECOND",
        }
    }
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CalendarField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DAY" | "DAY_OF_MONTH" => Ok(Self::DayOfMonth),
            "MONTH" => Ok(Self::Month),
            "YEAR" => Ok(Self::Year),
            "WEEK" | "WEEK_OF_YEAR" => Ok(Self::WeekOfYear),
            "HOUR" => Ok(Self::Hour),
            "HOUR_OF_DAY" => Ok(Self::HourOfDay),
            "MINUTE" => Ok(Self::Minute),
            "SECOND" => Ok(Self::Second),
            "MILLISECOND" => Ok(Self::Millisecond),
            _ => Err(CoreError::InvalidArgument(format!(
                "unknown calendar field: {s}"
            ))),
        }
    }
}
