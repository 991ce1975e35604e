//! Reporting: terminal rendering of band statuses.

pub mod format;

pub use format::{format_band_line, format_report};
