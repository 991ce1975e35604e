//! Shared "fetch -> validate -> select -> classify" workflow.
//!
//! Keeping this in one place lets the binary and the integration tests drive
//! the same code; tests skip the network by calling `run_with_records`.

use chrono::{DateTime, TimeDelta, Utc};

use crate::data::{DiasClient, FetchWindow};
use crate::domain::{BandStatus, BandTable, Observation, RunConfig, StationRecords};
use crate::error::PipelineError;
use crate::propagation::{classify, is_valid, select_closest};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput<'b> {
    pub station: String,
    pub reference_time: DateTime<Utc>,
    pub target_time: DateTime<Utc>,
    pub records_returned: usize,
    pub records_valid: usize,
    pub selected: Observation,
    pub statuses: Vec<BandStatus<'b>>,
}

/// Fetch from the archive and run the pipeline.
pub fn run<'b>(config: &RunConfig, bands: &'b BandTable) -> Result<RunOutput<'b>, PipelineError> {
    let reference = config.reference_time.unwrap_or_else(Utc::now);
    let window = FetchWindow::around(reference, config.lookback);

    let client = DiasClient::from_env()?;
    let records = client.fetch(&config.station, &window, config.limit)?;

    run_with_records(&records, config.lookback, reference, bands)
}

/// Run the pipeline on records that were already fetched and decoded.
pub fn run_with_records<'b>(
    records: &StationRecords,
    lookback: TimeDelta,
    reference: DateTime<Utc>,
    bands: &'b BandTable,
) -> Result<RunOutput<'b>, PipelineError> {
    if records.items_returned == 0 {
        return Err(PipelineError::NoStationData {
            station: records.station.clone(),
        });
    }

    let valid: Vec<&Observation> = records.observations.iter().filter(|o| is_valid(o)).collect();
    tracing::debug!(
        station = %records.station,
        returned = records.items_returned,
        decoded = records.observations.len(),
        valid = valid.len(),
        "filtered archive records"
    );

    let selected = select_closest(valid.iter().copied(), lookback, reference).ok_or_else(|| {
        PipelineError::NoValidData {
            station: records.station.clone(),
            raw: records.items_returned,
        }
    })?;

    let target_time = reference - lookback;
    tracing::info!(
        station = %records.station,
        target = %target_time,
        selected = %selected.timestamp,
        offset_min = (selected.timestamp - target_time).num_minutes(),
        "selected observation"
    );

    let statuses = classify(selected, bands.bands())?;

    Ok(RunOutput {
        station: records.station.clone(),
        reference_time: reference,
        target_time,
        records_returned: records.items_returned,
        records_valid: valid.len(),
        selected: *selected,
        statuses,
    })
}
