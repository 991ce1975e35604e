//! Amateur band allocations used by the classifier.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single amateur allocation. Frequencies are in MHz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub name: String,
    pub low_freq: f64,
    pub high_freq: f64,
    /// Representative frequency used in every threshold comparison.
    pub center_freq: f64,
}

impl Band {
    /// Band with its centre at the midpoint of the edges.
    pub fn new(name: impl Into<String>, low_freq: f64, high_freq: f64) -> Self {
        Self {
            name: name.into(),
            low_freq,
            high_freq,
            center_freq: (low_freq + high_freq) / 2.0,
        }
    }

    pub fn with_center(name: impl Into<String>, low_freq: f64, high_freq: f64, center_freq: f64) -> Self {
        Self {
            name: name.into(),
            low_freq,
            high_freq,
            center_freq,
        }
    }
}

/// IARU Region 1 HF allocations, (name, low, high) in MHz.
const IARU_REGION1: &[(&str, f64, f64)] = &[
    ("160m", 1.8, 2.0),
    ("80m", 3.5, 3.8),
    ("60m", 5.3, 5.4),
    ("40m", 7.0, 7.2),
    ("30m", 10.1, 10.15),
    ("20m", 14.0, 14.35),
    ("17m", 18.068, 18.168),
    ("15m", 21.0, 21.45),
    ("12m", 24.89, 24.99),
    ("10m", 28.0, 29.7),
];

#[derive(Debug, Error)]
pub enum BandTableError {
    #[error("failed to read band table '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse band table '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("band table is empty")]
    Empty,
    #[error("band '{name}': {reason}")]
    InvalidBand { name: String, reason: &'static str },
}

/// Ordered, immutable list of bands. Report order is table order.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    bands: Vec<Band>,
}

#[derive(Debug, Deserialize)]
struct BandEntry {
    name: String,
    low: f64,
    high: f64,
    #[serde(default)]
    center: Option<f64>,
}

impl BandTable {
    pub fn new(bands: Vec<Band>) -> Result<Self, BandTableError> {
        if bands.is_empty() {
            return Err(BandTableError::Empty);
        }
        for band in &bands {
            validate_band(band)?;
        }
        Ok(Self { bands })
    }

    pub fn iaru_region1() -> Self {
        Self {
            bands: IARU_REGION1
                .iter()
                .map(|&(name, low, high)| Band::new(name, low, high))
                .collect(),
        }
    }

    /// Load a table from a JSON array of `{"name", "low", "high", "center"?}`.
    pub fn from_json_file(path: &Path) -> Result<Self, BandTableError> {
        let raw = fs::read_to_string(path).map_err(|source| BandTableError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|err| match err {
            BandTableError::Parse { source, .. } => BandTableError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, BandTableError> {
        let entries: Vec<BandEntry> = serde_json::from_str(raw).map_err(|source| BandTableError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        let bands = entries
            .into_iter()
            .map(|e| match e.center {
                Some(center) => Band::with_center(e.name, e.low, e.high, center),
                None => Band::new(e.name, e.low, e.high),
            })
            .collect();
        Self::new(bands)
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

fn validate_band(band: &Band) -> Result<(), BandTableError> {
    let invalid = |reason| BandTableError::InvalidBand {
        name: band.name.clone(),
        reason,
    };
    if !(band.low_freq.is_finite() && band.high_freq.is_finite() && band.center_freq.is_finite()) {
        return Err(invalid("non-finite frequency"));
    }
    if band.low_freq <= 0.0 || band.low_freq >= band.high_freq {
        return Err(invalid("edges must satisfy 0 < low < high"));
    }
    if band.center_freq < band.low_freq || band.center_freq > band.high_freq {
        return Err(invalid("centre lies outside the band edges"));
    }
    Ok(())
}
