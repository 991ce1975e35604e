//! Export a run to JSON.
//!
//! The export carries the selected observation and every band status so it can
//! be consumed by scripts without scraping the terminal report.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::pipeline::RunOutput;
use crate::domain::{Observation, Status};
use crate::error::{AppError, EXIT_IO};

#[derive(Debug, Serialize)]
pub struct ReportFile<'a> {
    pub tool: &'static str,
    pub station: &'a str,
    pub reference_time: DateTime<Utc>,
    pub target_time: DateTime<Utc>,
    pub records_returned: usize,
    pub records_valid: usize,
    pub observation: &'a Observation,
    pub bands: Vec<BandRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct BandRow<'a> {
    pub name: &'a str,
    pub low_mhz: f64,
    pub high_mhz: f64,
    pub center_mhz: f64,
    pub status: Status,
}

impl<'a> ReportFile<'a> {
    pub fn from_run(run: &'a RunOutput<'_>) -> Self {
        Self {
            tool: "ionoband",
            station: &run.station,
            reference_time: run.reference_time,
            target_time: run.target_time,
            records_returned: run.records_returned,
            records_valid: run.records_valid,
            observation: &run.selected,
            bands: run
                .statuses
                .iter()
                .map(|s| BandRow {
                    name: &s.band.name,
                    low_mhz: s.band.low_freq,
                    high_mhz: s.band.high_freq,
                    center_mhz: s.band.center_freq,
                    status: s.status,
                })
                .collect(),
        }
    }
}

/// Write the run to a pretty-printed JSON file.
pub fn write_report_json(path: &Path, run: &RunOutput<'_>) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(EXIT_IO, format!("Failed to create export JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, &ReportFile::from_run(run))
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to write export JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote JSON export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    use crate::app::pipeline::run_with_records;
    use crate::domain::{BandTable, StationRecords};

    #[test]
    fn export_contains_every_band_in_order() {
        let reference = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let records = StationRecords {
            station: "SO148".to_string(),
            items_returned: 1,
            observations: vec![Observation {
                timestamp: reference - TimeDelta::minutes(4),
                muf: Some(14.0),
                fof2: Some(7.0),
                fmin: None,
            }],
        };
        let table = BandTable::iaru_region1();
        let run = run_with_records(&records, TimeDelta::zero(), reference, &table).unwrap();

        let path = std::env::temp_dir().join(format!("ionoband-export-{}.json", std::process::id()));
        write_report_json(&path, &run).unwrap();
        let written: serde_json::Value = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(written["station"], "SO148");
        assert_eq!(written["observation"]["fmin"], serde_json::Value::Null);
        let bands = written["bands"].as_array().unwrap();
        assert_eq!(bands.len(), table.len());
        assert_eq!(bands[0]["name"], "160m");
        assert_eq!(bands[0]["status"], "OPEN");
        assert_eq!(bands[9]["status"], "CLOSED");
    }
}
