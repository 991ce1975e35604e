//! Shared domain types.
//!
//! These types are intentionally small and serializable so they can be:
//!
//! - produced by the archive decoder
//! - passed by reference through validation, selection and classification
//! - exported to JSON for scripting

use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::bands::Band;

/// One ionospheric sounding.
///
/// All frequencies are in MHz. A field is `None` when the archive did not
/// supply a usable value; the sentinel convention is resolved by the decoder
/// in `data::dias` and never leaks past it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    /// Maximum usable frequency.
    pub muf: Option<f64>,
    /// Critical frequency of the F2 layer (NVIS ceiling).
    pub fof2: Option<f64>,
    /// Lowest frequency observed above the absorption floor.
    pub fmin: Option<f64>,
}

impl Observation {
    pub fn supporting_values(&self) -> SupportingValues {
        SupportingValues {
            muf: self.muf,
            fof2: self.fof2,
            fmin: self.fmin,
        }
    }
}

/// Everything one station returned for one query window.
///
/// `items_returned` counts archive entries before decoding, so a response whose
/// entries were all undecodable is still distinguishable from an empty one.
#[derive(Debug, Clone)]
pub struct StationRecords {
    pub station: String,
    pub items_returned: usize,
    pub observations: Vec<Observation>,
}

/// Propagation outcome for one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Open,
    Nvis,
    Marginal,
    Absorbed,
    Closed,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Nvis => "NVIS",
            Status::Marginal => "MARGINAL",
            Status::Absorbed => "ABSORBED",
            Status::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The observation values a classification was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupportingValues {
    pub muf: Option<f64>,
    pub fof2: Option<f64>,
    pub fmin: Option<f64>,
}

/// Classification of one band against one observation.
#[derive(Debug, Clone, Serialize)]
pub struct BandStatus<'b> {
    pub band: &'b Band,
    pub status: Status,
    pub supporting: SupportingValues,
}

/// Resolved settings for a single invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub station: String,
    pub lookback: TimeDelta,
    /// Reference instant the lookback is measured from; `None` means "now".
    pub reference_time: Option<DateTime<Utc>>,
    pub limit: usize,
    pub bands_path: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
    pub color: bool,
}
