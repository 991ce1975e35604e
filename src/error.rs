use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::data::FetchError;
use crate::domain::BandTableError;

/// Exit code for bad arguments or configuration.
pub const EXIT_USAGE: u8 = 2;
/// Exit code when the archive had nothing usable.
pub const EXIT_NO_DATA: u8 = 3;
/// Exit code for network, HTTP and file I/O failures.
pub const EXIT_IO: u8 = 4;
/// Exit code for internal contract violations.
pub const EXIT_INTERNAL: u8 = 5;

/// Outcomes of a pipeline run that produce no band report.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No data for station {station}. Try a larger lookback (e.g. --lookback 1d) or another station (e.g. -s EB040).")]
    NoStationData { station: String },

    #[error(
        "No valid data for station {station} ({raw} records, none with both MUF and foF2). \
         The ionosonde may be offline or in a nighttime gap; try a larger lookback."
    )]
    NoValidData { station: String, raw: usize },

    #[error("internal error: observation at {timestamp} is missing MUF or foF2 and cannot be classified")]
    InvalidObservation { timestamp: DateTime<Utc> },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl PipelineError {
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::NoStationData { .. } | PipelineError::NoValidData { .. } => EXIT_NO_DATA,
            PipelineError::InvalidObservation { .. } => EXIT_INTERNAL,
            PipelineError::Fetch(_) => EXIT_IO,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::new(err.exit_code(), format!("Error: {err}"))
    }
}

impl From<BandTableError> for AppError {
    fn from(err: BandTableError) -> Self {
        AppError::new(EXIT_USAGE, format!("Error: {err}"))
    }
}
