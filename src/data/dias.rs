//! DIAS ionosonde archive integration (SAO pager endpoint).
//!
//! This is the only place that knows the archive's conventions: field names,
//! timestamp formats and the placeholder values it emits for "no data".
//! Everything past `decode_items` sees `Option<f64>`.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Observation, StationRecords};

pub const DEFAULT_API_URL: &str = "https://electron.space.noa.gr/ionostream/api/v2/idb/sao/pager";
pub const API_URL_ENV: &str = "IONOBAND_API_URL";
pub const DEFAULT_LIMIT: usize = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Placeholder values the archive writes instead of leaving a field empty.
const SENTINELS: [f64; 2] = [0.0, 9999.0];

/// Shortest span searched before the target time.
const MIN_LEADING_SPAN: TimeDelta = TimeDelta::minutes(10);
/// How far past the target time the query reaches (never beyond the reference).
const TRAILING_SPAN: TimeDelta = TimeDelta::minutes(15);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("archive request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("archive request failed with HTTP status {0}")]
    Status(u16),
    #[error("failed to parse archive response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Time range sent to the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl FetchWindow {
    /// Window around `reference - lookback`, reaching back at least as far as
    /// the lookback itself so a sparse station still yields candidates.
    pub fn around(reference: DateTime<Utc>, lookback: TimeDelta) -> Self {
        let target = reference - lookback;
        let start = target - lookback.max(MIN_LEADING_SPAN);
        let end = (target + TRAILING_SPAN).min(reference).max(target);
        Self { start, end }
    }
}

pub struct DiasClient {
    client: Client,
    base_url: String,
}

impl DiasClient {
    /// Build a client for the endpoint in `IONOBAND_API_URL` (or `.env`), falling
    /// back to the public DIAS archive.
    pub fn from_env() -> Result<Self, FetchError> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn fetch(&self, station: &str, window: &FetchWindow, limit: usize) -> Result<StationRecords, FetchError> {
        let start = window.start.format(QUERY_TIME_FORMAT).to_string();
        let end = window.end.format(QUERY_TIME_FORMAT).to_string();
        let limit = limit.to_string();
        tracing::debug!(url = %self.base_url, station, %start, %end, %limit, "querying archive");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("station", station),
                ("start", start.as_str()),
                ("end", end.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .map_err(FetchError::Request)?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body: PagerResponse = resp.json().map_err(FetchError::Decode)?;
        tracing::debug!(station, items = body.items.len(), "archive responded");

        Ok(StationRecords {
            station: station.to_string(),
            items_returned: body.items.len(),
            observations: decode_items(&body.items),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PagerResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    dataset: Option<Dataset>,
    #[serde(default)]
    scaled: Option<Scaled>,
}

#[derive(Debug, Default, Deserialize)]
struct Dataset {
    #[serde(default)]
    timestamp: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Scaled {
    #[serde(default, rename = "mufD")]
    muf: Option<RawValue>,
    #[serde(default, rename = "foF2")]
    fof2: Option<RawValue>,
    #[serde(default)]
    fmin: Option<RawValue>,
}

/// Scaled parameters arrive as numbers, numeric strings, or occasionally junk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Convert archive items into observations, dropping items without a usable timestamp.
pub fn decode_items(items: &[Item]) -> Vec<Observation> {
    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let raw_ts = item.dataset.as_ref().and_then(|d| d.timestamp.as_deref());
        let Some(timestamp) = raw_ts.and_then(parse_timestamp) else {
            tracing::warn!(index = idx, timestamp = ?raw_ts, "skipping archive item without a usable timestamp");
            continue;
        };
        let scaled = item.scaled.as_ref();
        out.push(Observation {
            timestamp,
            muf: decode_value(scaled.and_then(|s| s.muf.as_ref())),
            fof2: decode_value(scaled.and_then(|s| s.fof2.as_ref())),
            fmin: decode_value(scaled.and_then(|s| s.fmin.as_ref())),
        });
    }
    out
}

fn decode_value(raw: Option<&RawValue>) -> Option<f64> {
    let value = match raw? {
        RawValue::Number(v) => *v,
        RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        RawValue::Other(_) => return None,
    };
    if !value.is_finite() || SENTINELS.contains(&value) {
        return None;
    }
    Some(value)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
}
