//! Per-band propagation status.
//!
//! Each band is represented by its centre frequency and compared against
//! fixed fractions of the observed MUF and foF2. Rules are evaluated in order
//! and the first match wins:
//!
//! | # | condition                         | status   |
//! |---|-----------------------------------|----------|
//! | 1 | `center >= muf`                   | CLOSED   |
//! | 2 | `fmin` present and `fmin > low`   | ABSORBED |
//! | 3 | `center < 0.85 * muf`             | OPEN     |
//! | 4 | `center < 1.30 * fof2`            | NVIS     |
//! | 5 | `center < 0.95 * muf`             | MARGINAL |
//! | 6 | otherwise                         | CLOSED   |
//!
//! Absorption overrides the frequency thresholds: a band below the D-layer
//! floor is unusable however far below the MUF it sits.

use crate::domain::{Band, BandStatus, Observation, Status};
use crate::error::PipelineError;

/// Fraction of MUF below which a band is considered open for DX.
pub const OPEN_RATIO: f64 = 0.85;
/// Fraction of MUF below which a band is still marginally usable.
pub const MARGINAL_RATIO: f64 = 0.95;
/// Multiple of foF2 below which near-vertical paths work.
pub const NVIS_RATIO: f64 = 1.30;

/// Classify every band against one validated observation, in table order.
pub fn classify<'b>(obs: &Observation, bands: &'b [Band]) -> Result<Vec<BandStatus<'b>>, PipelineError> {
    let (Some(muf), Some(fof2)) = (obs.muf, obs.fof2) else {
        tracing::error!(timestamp = %obs.timestamp, "classify called on an observation missing MUF or foF2");
        return Err(PipelineError::InvalidObservation {
            timestamp: obs.timestamp,
        });
    };

    let supporting = obs.supporting_values();
    Ok(bands
        .iter()
        .map(|band| BandStatus {
            band,
            status: band_status(band, muf, fof2, obs.fmin),
            supporting,
        })
        .collect())
}

fn band_status(band: &Band, muf: f64, fof2: f64, fmin: Option<f64>) -> Status {
    let center = band.center_freq;

    if center >= muf {
        Status::Closed
    } else if fmin.is_some_and(|f| f > band.low_freq) {
        Status::Absorbed
    } else if center < OPEN_RATIO * muf {
        Status::Open
    } else if center < NVIS_RATIO * fof2 {
        Status::Nvis
    } else if center < MARGINAL_RATIO * muf {
        Status::Marginal
    } else {
        Status::Closed
    }
}
