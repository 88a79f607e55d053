//! Named date/time patterns.

use std::fmt;

use chrono::format::{Fixed, Item, StrftimeItems};
use toolbelt_core::error::CoreError;

/// A named date or date-time text format.
///
/// Each variant carries two spellings: the compatibility literal shared with
/// existing callers (`yyyy-MM-dd'T'HH:mm:ss`) and the `chrono` format string
/// used to render and parse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePattern {
    /// `yyyyMMdd`
    YmdCompact,
    /// `yyyy-MM-dd`
    YmdDash,
    /// `yyyy/MM/dd`
    YmdSlash,
    /// `yyyy.MM.dd`
    YmdDot,
    /// `dd-MM-yyyy`
    DmyDash,
    /// `dd/MM/yyyy`
    DmySlash,
    /// `MM/dd/yyyy`
    MdySlash,
    /// `yyyyMMddHHmm`
    YmdHmCompact,
    /// `yyyyMMddHHmmss`
    YmdHmsCompact,
    /// `yyyy-MM-dd HH:mm`
    YmdHm,
    /// `yyyy-MM-dd HH:mm:ss`
    YmdHms,
    /// `yyyy-MM-dd HH:mm:ss.SSS`
    YmdHmsMillis,
    /// `yyyy-MM-dd'T'HH:mm:ss`
    IsoHms,
    /// `yyyy-MM-dd'T'HH:mm:ss.SSS`
    IsoHmsMillis,
    /// `yyyy-MM-dd'T'HH:mm:ssZ`
    IsoHmsOffset,
    /// `yyyy-MM-dd'T'HH:mm:ss.SSSZ`
    IsoHmsMillisOffset,
    /// `yyyy-MM-dd'T'HH:mm:ss.SSSXXX`
    IsoHmsMillisColonOffset,
}

impl DatePattern {
    pub const ALL: [Self; 17] = [
        Self::YmdCompact,
        Self::YmdDash,
        Self::YmdSlash,
        Self::YmdDot,
        Self::DmyDash,
        Self::DmySlash,
        Self::MdySlash,
        Self::YmdHmCompact,
        Self::YmdHmsCompact,
        Self::YmdHm,
        Self::YmdHms,
        Self::YmdHmsMillis,
        Self::IsoHms,
        Self::IsoHmsMillis,
        Self::IsoHmsOffset,
        Self::IsoHmsMillisOffset,
        Self::IsoHmsMillisColonOffset,
    ];

    /// Returns the compatibility pattern literal.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::YmdCompact => "yyyyMMdd",
            Self::YmdDash => "yyyy-MM-dd",
            Self::YmdSlash => "yyyy/MM/dd",
            Self::YmdDot => "yyyy.MM.dd",
            Self::DmyDash => "dd-MM-yyyy",
            Self::DmySlash => "dd/MM/yyyy",
            Self::MdySlash => "MM/dd/yyyy",
            Self::YmdHmCompact => "yyyyMMddHHmm",
            Self::YmdHmsCompact => "yyyyMMddHHmmss",
            Self::YmdHm => "yyyy-MM-dd HH:mm",
            Self::YmdHms => "yyyy-MM-dd HH:mm:ss",
            Self::YmdHmsMillis => "yyyy-MM-dd HH:mm:ss.SSS",
            Self::IsoHms => "yyyy-MM-dd'T'HH:mm:ss",
            Self::IsoHmsMillis => "yyyy-MM-dd'T'HH:mm:ss.SSS",
            Self::IsoHmsOffset => "yyyy-MM-dd'T'HH:mm:ssZ",
            Self::IsoHmsMillisOffset => "yyyy-MM-dd'T'HH:mm:ss.SSSZ",
            Self::IsoHmsMillisColonOffset => "yyyy-MM-dd'T'HH:mm:ss.SSSXXX",
        }
    }

    /// Returns the closest `chrono` strftime spelling of this pattern.
    ///
    /// `XXX` is spelled `%:z`, which neither prints nor accepts `Z`; parsing and
    /// formatting go through [`DatePattern::items`] instead.
    #[must_use]
    pub const fn format_str(self) -> &'static str {
        match self {
            Self::YmdCompact => "%Y%m%d",
            Self::YmdDash => "%Y-%m-%d",
            Self::YmdSlash => "%Y/%m/%d",
            Self::YmdDot => "%Y.%m.%d",
            Self::DmyDash => "%d-%m-%Y",
            Self::DmySlash => "%d/%m/%Y",
            Self::MdySlash => "%m/%d/%Y",
            Self::YmdHmCompact => "%Y%m%d%H%M",
            Self::YmdHmsCompact => "%Y%m%d%H%M%S",
            Self::YmdHm => "%Y-%m-%d %H:%M",
            Self::YmdHms => "%Y-%m-%d %H:%M:%S",
            Self::YmdHmsMillis => "%Y-%m-%d %H:%M:%S%.3f",
            Self::IsoHms => "%Y-%m-%dT%H:%M:%S",
            Self::IsoHmsMillis => "%Y-%m-%dT%H:%M:%S%.3f",
            Self::IsoHmsOffset => "%Y-%m-%dT%H:%M:%S%z",
            Self::IsoHmsMillisOffset => "%Y-%m-%dT%H:%M:%S%.3f%z",
            Self::IsoHmsMillisColonOffset => "%Y-%m-%dT%H:%M:%S%.3f%:z",
        }
    }

    /// ## Summary
    /// Returns the `chrono` format items used to parse and render this pattern.
    ///
    /// Matches [`DatePattern::format_str`] except that `XXX` writes `Z` for a
    /// zero offset and accepts `Z` as UTC.
    #[must_use]
    pub fn items(self) -> Vec<Item<'static>> {
        match self {
            Self::IsoHmsMillisColonOffset => StrftimeItems::new("%Y-%m-%dT%H:%M:%S%.3f")
                .chain(std::iter::once(Item::Fixed(Fixed::TimezoneOffsetColonZ)))
                .collect(),
            other => StrftimeItems::new(other.format_str()).collect(),
        }
    }

    /// Returns the symbolic name existing callers use for this pattern, e.g. `Y_M_D__HMS`.
    #[must_use]
    pub const fn legacy_name(self) -> &'static str {
        match self {
            Self::YmdCompact => "Y_M_D",
            Self::YmdDash => "Y_M_D_1",
            Self::YmdSlash => "Y_M_D_2",
            Self::YmdDot => "Y_M_D_3",
            Self::DmyDash => "D_M_Y_1",
            Self::DmySlash => "D_M_Y_2",
            Self::MdySlash => "M_D_Y_2",
            Self::YmdHmCompact => "Y_M_D_HM",
            Self::YmdHmsCompact => "Y_M_D_HMS",
            Self::YmdHm => "Y_M_D__HM",
            Self::YmdHms => "Y_M_D__HMS",
            Self::YmdHmsMillis => "Y_M_D__HMS_SSS",
            Self::IsoHms => "Y_M_D_T_HMS",
            Self::IsoHmsMillis => "Y_M_D_T_HMS_SSS",
            Self::IsoHmsOffset => "Y_M_D_T_HMSZ",
            Self::IsoHmsMillisOffset => "Y_M_D_T_HMS_SSSZ",
            Self::IsoHmsMillisColonOffset => "Y_M_D_T_HMS_SSSXXX",
        }
    }

    /// Returns `true` if the pattern carries a UTC offset.
    #[must_use]
    pub const fn has_offset(self) -> bool {
        matches!(
            self,
            Self::IsoHmsOffset | Self::IsoHmsMillisOffset | Self::IsoHmsMillisColonOffset
        )
    }

    /// Returns `true` if the pattern carries a time of day.
    #[must_use]
    pub const fn has_time(self) -> bool {
        !matches!(
            self,
            Self::YmdCompact
                | Self::YmdDash
                | Self::YmdSlash
                | Self::YmdDot
                | Self::DmyDash
                | Self::DmySlash
                | Self::MdySlash
        )
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl std::str::FromStr for DatePattern {
    type Err = CoreError;

    /// Accepts either the legacy symbolic name or the pattern literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.legacy_name() == s || p.pattern() == s)
            .ok_or_else(|| CoreError::InvalidArgument(format!("unknown date pattern: {s}")))
    }
}
