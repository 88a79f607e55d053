//! Serde adapters applied to envelope payloads.

use chrono::NaiveDateTime;
use serde::Deserialize;

use toolbelt_test::adapters::{DateTimeFormatError, local_date_time, trimmed};
use toolbelt_test::component::http::CommonResponse;
use toolbelt_test::component::logging::ActivityStatus;

use super::helpers::date_time;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Activity {
    #[serde(deserialize_with = "trimmed::deserialize")]
    name: String,
    status: ActivityStatus,
    #[serde(deserialize_with = "local_date_time::deserialize")]
    started_at: NaiveDateTime,
    #[serde(default, deserialize_with = "local_date_time::option::deserialize")]
    finished_at: Option<NaiveDateTime>,
}

#[test_log::test]
fn envelope_payload_uses_lenient_date_times() {
    let response: CommonResponse<Vec<Activity>> = serde_json::from_str(
        r#"{
            "statusCode": 200,
            "payload": [
                {"name": " import ", "status": "COMPLETED", "startedAt": "2025-07-25T10:30:45", "finishedAt": "2025-07-25 11:00:00"},
                {"name": "export", "status": "PROCESSING", "startedAt": "2025-07-25"}
            ]
        }"#,
    )
    .expect("envelope should deserialize");

    let payload = response.payload.expect("payload present");
    assert_eq!(payload.len(), 2);

    assert_eq!(payload[0].name, "import");
    assert!(payload[0].status.is_terminal());
    assert_eq!(payload[0].started_at, date_time(2025, 7, 25, 10, 30, 45));
    assert_eq!(payload[0].finished_at, Some(date_time(2025, 7, 25, 11, 0, 0)));

    assert_eq!(payload[1].status, ActivityStatus::Processing);
    assert_eq!(payload[1].started_at, date_time(2025, 7, 25, 0, 0, 0));
    assert!(payload[1].finished_at.is_none());
}

#[test]
fn invalid_date_time_fails_the_whole_payload() {
    let result = serde_json::from_str::<Activity>(
        r#"{"name": "x", "status": "STARTED", "startedAt": "not-a-date"}"#,
    );

    let err = result.expect_err("should not deserialize");
    assert!(err.to_string().contains("Unable to parse date/datetime: not-a-date"));
}

#[test]
fn parse_error_is_descriptive() {
    let err: DateTimeFormatError =
        local_date_time::parse_local_date_time("25/07/2025").expect_err("should not parse");

    assert_eq!(err.input, "25/07/2025");
    assert!(err.to_string().contains("'yyyy-MM-dd HH:mm:ss'"));
}
