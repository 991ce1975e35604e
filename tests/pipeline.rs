//! End-to-end pipeline runs on archive-shaped JSON, without the network.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use ionoband::app::pipeline::run_with_records;
use ionoband::data::dias::{PagerResponse, decode_items};
use ionoband::domain::{Band, BandTable, Status, StationRecords};
use ionoband::error::PipelineError;

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn records_from_json(station: &str, json: &str) -> StationRecords {
    let body: PagerResponse = serde_json::from_str(json).unwrap();
    StationRecords {
        station: station.to_string(),
        items_returned: body.items.len(),
        observations: decode_items(&body.items),
    }
}

fn scenario_table() -> BandTable {
    BandTable::new(vec![
        Band::with_center("80m", 3.5, 3.8, 3.6),
        Band::with_center("40m", 7.0, 7.3, 7.15),
        Band::with_center("20m", 14.0, 14.35, 14.15),
    ])
    .unwrap()
}

fn statuses(run: &ionoband::app::pipeline::RunOutput<'_>) -> Vec<(String, Status)> {
    run.statuses
        .iter()
        .map(|s| (s.band.name.clone(), s.status))
        .collect()
}

#[test]
fn forty_open_and_twenty_closed_under_14_mhz_muf() {
    let records = records_from_json(
        "AT138",
        r#"{"items": [{"dataset": {"timestamp": "2025-03-01T11:55:00Z"},
                       "scaled": {"mufD": 14.0, "foF2": 7.0, "fmin": 1.0}}]}"#,
    );
    let table = scenario_table();
    let run = run_with_records(&records, TimeDelta::minutes(10), reference(), &table).unwrap();
    assert_eq!(
        statuses(&run),
        vec![
            ("80m".to_string(), Status::Open),
            ("40m".to_string(), Status::Open),
            ("20m".to_string(), Status::Closed),
        ]
    );
}

#[test]
fn high_fmin_absorbs_eighty_metres() {
    let records = records_from_json(
        "AT138",
        r#"{"items": [{"dataset": {"timestamp": "2025-03-01T11:50:00Z"},
                       "scaled": {"mufD": 10.0, "foF2": 6.0, "fmin": 4.5}}]}"#,
    );
    let table = scenario_table();
    let run = run_with_records(&records, TimeDelta::minutes(10), reference(), &table).unwrap();
    assert_eq!(run.statuses[0].status, Status::Absorbed);
    assert_eq!(run.statuses[0].supporting.fmin, Some(4.5));
}

#[test]
fn sentinel_record_is_skipped_even_when_closest() {
    let records = records_from_json(
        "EB040",
        r#"{"items": [
            {"dataset": {"timestamp": "2025-03-01T11:00:00Z"},
             "scaled": {"mufD": 9999.0, "foF2": 5.0, "fmin": 1.0}},
            {"dataset": {"timestamp": "2025-03-01T10:30:00Z"},
             "scaled": {"mufD": 12.5, "foF2": 5.5, "fmin": 1.2}},
            {"dataset": {"timestamp": "2025-03-01T11:45:00Z"},
             "scaled": {"mufD": 13.0, "foF2": 0.0, "fmin": 1.2}}
        ]}"#,
    );
    let table = BandTable::iaru_region1();
    let run = run_with_records(&records, TimeDelta::hours(1), reference(), &table).unwrap();
    assert_eq!(run.selected.timestamp, Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap());
    assert_eq!(run.selected.muf, Some(12.5));
    assert_eq!(run.records_returned, 3);
    assert_eq!(run.records_valid, 1);
}

#[test]
fn only_sentinels_reports_no_valid_data() {
    let records = records_from_json(
        "JR053",
        r#"{"items": [
            {"dataset": {"timestamp": "2025-03-01T11:50:00Z"},
             "scaled": {"mufD": 0.0, "foF2": 0.0, "fmin": 0.0}},
            {"dataset": {"timestamp": "2025-03-01T11:55:00Z"},
             "scaled": {"mufD": 9999.0, "foF2": 9999.0}}
        ]}"#,
    );
    let table = BandTable::iaru_region1();
    let err = run_with_records(&records, TimeDelta::minutes(10), reference(), &table).unwrap_err();
    assert!(matches!(err, PipelineError::NoValidData { raw: 2, .. }), "{err:?}");
    assert_eq!(err.exit_code(), ionoband::error::EXIT_NO_DATA);
}

#[test]
fn empty_response_reports_no_station_data() {
    let records = records_from_json("SO148", r#"{"items": []}"#);
    let table = BandTable::iaru_region1();
    let err = run_with_records(&records, TimeDelta::minutes(10), reference(), &table).unwrap_err();
    assert!(matches!(err, PipelineError::NoStationData { .. }), "{err:?}");
}

#[test]
fn lookback_chooses_nearest_of_several_valid_records() {
    let records = records_from_json(
        "AT138",
        r#"{"items": [
            {"dataset": {"timestamp": "2025-03-01T05:45:00Z"}, "scaled": {"mufD": 8.0, "foF2": 4.0}},
            {"dataset": {"timestamp": "2025-03-01T06:00:00Z"}, "scaled": {"mufD": 9.0, "foF2": 4.5}},
            {"dataset": {"timestamp": "2025-03-01T06:15:00Z"}, "scaled": {"mufD": 10.0, "foF2": 5.0}},
            {"dataset": {"timestamp": "2025-03-01T06:20:00Z"}, "scaled": {"mufD": 11.0, "foF2": 5.5}}
        ]}"#,
    );
    let table = BandTable::iaru_region1();

    // Target 06:07:30 sits halfway between 06:00 and 06:15; the later one wins.
    let lookback = TimeDelta::hours(5) + TimeDelta::minutes(52) + TimeDelta::seconds(30);
    let run = run_with_records(&records, lookback, reference(), &table).unwrap();
    assert_eq!(run.selected.muf, Some(10.0));

    let run = run_with_records(&records, TimeDelta::hours(6), reference(), &table).unwrap();
    assert_eq!(run.selected.muf, Some(9.0));
    // No fmin in the record: nothing is absorbed.
    assert!(run.statuses.iter().all(|s| s.status != Status::Absorbed));
}
