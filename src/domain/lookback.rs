//! Lookback durations such as `10m`, `6h` or `1d`.

use std::str::FromStr;

use chrono::TimeDelta;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookbackError {
    #[error("invalid lookback '{0}' (format: 1d, 6h, 30m)")]
    Format(String),
    #[error("lookback '{0}' is out of range")]
    Range(String),
}

/// How far before the reference time the target observation lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookback(TimeDelta);

impl Lookback {
    pub const DEFAULT: &'static str = "10m";

    pub fn as_delta(self) -> TimeDelta {
        self.0
    }
}

impl FromStr for Lookback {
    type Err = LookbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let format_err = || LookbackError::Format(s.to_string());

        let unit = lower.chars().last().ok_or_else(format_err)?;
        let digits = &lower[..lower.len() - unit.len_utf8()];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format_err());
        }
        let value: i64 = digits.parse().map_err(|_| LookbackError::Range(s.to_string()))?;

        let delta = match unit {
            'd' => TimeDelta::try_days(value),
            'h' => TimeDelta::try_hours(value),
            'm' => TimeDelta::try_minutes(value),
            _ => return Err(format_err()),
        };
        delta.map(Lookback).ok_or_else(|| LookbackError::Range(s.to_string()))
    }
}

impl std::fmt::Display for Lookback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let minutes = self.0.num_minutes();
        if minutes != 0 && minutes % (24 * 60) == 0 {
            write!(f, "{}d", minutes / (24 * 60))
        } else if minutes != 0 && minutes % 60 == 0 {
            write!(f, "{}h", minutes / 60)
        } else {
            write!(f, "{minutes}m")
        }
    }
}
