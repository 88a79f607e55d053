//! Configuration flowing into clocks and helpers.

use toolbelt_test::component::config::Settings;
use toolbelt_test::component::logging::build_filter;
use toolbelt_test::component::time::{Clock, DatePattern, LocalDates, SystemClock};

use super::helpers::{date, date_time};

#[test_log::test]
fn configured_zone_drives_local_dates() {
    let settings = Settings::from_toml(
        r#"
        [time]
        zone = "Asia/Kolkata"

        [logging]
        level = "info"
        "#,
    )
    .expect("settings should load");

    let clock = SystemClock::from_config(&settings.time).expect("zone should resolve");
    assert_eq!(clock.zone(), chrono_tz::Asia::Kolkata);

    let helpers = LocalDates::new(clock);
    assert_eq!(helpers.date_to_epoch_seconds(date(2021, 1, 20)), 1_611_081_000);
    assert_eq!(
        helpers.format_date_time(date_time(2021, 1, 20, 10, 10, 0), DatePattern::IsoHmsOffset),
        "2021-01-20T10:10:00+0530"
    );

    assert!(build_filter(&settings.logging.level).max_level_hint().is_some());
}

#[test]
fn unknown_configured_zone_is_rejected() {
    let settings = Settings::from_toml("[time]\nzone = \"Atlantis/Capital\"\n")
        .expect("settings should load");

    assert!(SystemClock::from_config(&settings.time).is_err());
}

#[test]
fn missing_zone_falls_back_to_host_zone() {
    let settings = Settings::from_toml("").expect("settings should load");
    let clock = SystemClock::from_config(&settings.time).expect("host zone");

    assert_eq!(clock.zone(), toolbelt_test::component::time::system_zone());
}
