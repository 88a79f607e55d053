//! Epoch and text round trips across zones.

use chrono::{NaiveTime, Timelike};

use toolbelt_test::component::time::{
    DatePattern, compare, compare_ignoring_sub_second, date_from_epoch_seconds,
    date_time_from_epoch_seconds, date_time_to_epoch_seconds, date_to_epoch_seconds, format_date,
    format_date_time, parse_date, parse_date_time,
};

use super::helpers::{ZONES, date_time, sample_dates};

#[test]
fn dates_round_trip_through_epoch_seconds_in_every_zone() {
    for zone in ZONES {
        for date in sample_dates() {
            let seconds = date_to_epoch_seconds(date, zone);
            assert_eq!(
                date_from_epoch_seconds(seconds, zone),
                Ok(date),
                "{date} in {zone}"
            );
        }
    }
}

#[test]
fn date_times_round_trip_through_epoch_seconds_in_every_zone() {
    // Noon is never inside a DST transition for these zones.
    let noon = NaiveTime::from_hms_opt(12, 34, 56).expect("valid time");

    for zone in ZONES {
        for date in sample_dates() {
            let value = date.and_time(noon);
            let seconds = date_time_to_epoch_seconds(value, zone);
            assert_eq!(
                date_time_from_epoch_seconds(seconds, zone),
                Ok(value),
                "{value} in {zone}"
            );
        }
    }
}

#[test]
fn repeated_wall_time_resolves_to_the_earlier_instant() {
    let zone = chrono_tz::America::New_York;
    let value = date_time(2021, 11, 7, 1, 30, 0);

    // 01:30 EDT, one hour before the same wall time in EST.
    let seconds = date_time_to_epoch_seconds(value, zone);
    assert_eq!(seconds, 1_636_263_000);
    assert_eq!(date_time_from_epoch_seconds(seconds, zone), Ok(value));
    assert_eq!(date_time_from_epoch_seconds(seconds + 3_600, zone), Ok(value));

    let text = format_date_time(value, DatePattern::IsoHmsOffset, zone);
    assert_eq!(text, "2021-11-07T01:30:00-0400");
    assert_eq!(
        parse_date_time(&text, DatePattern::IsoHmsOffset, zone),
        Some(value)
    );
    assert_eq!(
        parse_date_time("2021-11-07T01:30:00-0500", DatePattern::IsoHmsOffset, zone),
        Some(value)
    );
}

#[test]
fn zulu_offset_round_trips_in_every_zone() {
    let value = date_time(2021, 1, 20, 10, 10, 0);
    let text = format_date_time(value, DatePattern::IsoHmsMillisColonOffset, chrono_tz::Tz::UTC);
    assert_eq!(text, "2021-01-20T10:10:00.000Z");

    for zone in ZONES {
        let local = parse_date_time(&text, DatePattern::IsoHmsMillisColonOffset, zone)
            .expect("zulu text should parse");
        assert_eq!(
            date_time_to_epoch_seconds(local, zone),
            date_time_to_epoch_seconds(value, chrono_tz::Tz::UTC),
            "{zone}"
        );
    }
}

#[test]
fn epoch_round_trip_drops_only_sub_second_precision() {
    let value = date_time(2021, 1, 20, 10, 10, 0)
        .with_nanosecond(999_999_999)
        .expect("valid nanosecond");

    for zone in ZONES {
        let back = date_time_from_epoch_seconds(date_time_to_epoch_seconds(value, zone), zone)
            .expect("in range");
        assert!(compare_ignoring_sub_second(Some(back), Some(value)));
        assert_ne!(back, value);
    }
}

#[test]
fn text_round_trips_for_every_pattern() {
    let value = date_time(2021, 1, 20, 10, 10, 0);

    for zone in ZONES {
        for pattern in DatePattern::ALL {
            if pattern.has_time() {
                let text = format_date_time(value, pattern, zone);
                assert_eq!(
                    parse_date_time(&text, pattern, zone),
                    Some(value),
                    "{pattern} in {zone}: {text}"
                );
            } else {
                let text = format_date(value.date(), pattern, zone);
                let parsed = parse_date(&text, pattern, zone);
                assert!(compare(parsed, Some(value.date())), "{pattern} in {zone}: {text}");
            }
        }
    }
}

#[test_log::test]
fn unparseable_text_is_absent_for_every_pattern() {
    for pattern in DatePattern::ALL {
        assert_eq!(parse_date("invalid-date", pattern, chrono_tz::Tz::UTC), None);
        assert_eq!(parse_date_time("invalid-date", pattern, chrono_tz::Tz::UTC), None);
    }
}
