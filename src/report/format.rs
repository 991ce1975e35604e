//! Terminal rendering of a run.
//!
//! Formatting lives in one place so the pipeline stays free of presentation
//! concerns and output changes are localized.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use crossterm::style::{Stylize, style};

use crate::app::pipeline::RunOutput;
use crate::domain::{BandStatus, Status, stations};

const RULE_WIDTH: usize = 50;
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format the full report: header, observation values, then one line per band.
pub fn format_report(run: &RunOutput<'_>, color: bool) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(RULE_WIDTH);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n{heavy}");
    let _ = writeln!(out, "IONOGRAM DATA - {}", run.station);
    let _ = writeln!(out, "{heavy}\n");

    match stations::location(&run.station) {
        Some(loc) => {
            let _ = writeln!(out, "Station:        {} ({loc})", run.station);
        }
        None => {
            let _ = writeln!(out, "Station:        {}", run.station);
        }
    }
    out.push('\n');
    let _ = writeln!(out, "Current time:   {}", fmt_time(run.reference_time));
    let _ = writeln!(out, "Target time:    {}", fmt_time(run.target_time));
    let _ = writeln!(out, "Data timestamp: {}", fmt_time(run.selected.timestamp));
    let _ = writeln!(
        out,
        "Records:        {} returned, {} valid",
        run.records_returned, run.records_valid
    );
    out.push('\n');
    let _ = writeln!(out, "MUF:            {}", fmt_mhz(run.selected.muf));
    let _ = writeln!(out, "FoF2 (NVIS):    {}", fmt_mhz(run.selected.fof2));
    let _ = writeln!(out, "fmin:           {}", fmt_mhz(run.selected.fmin));
    out.push('\n');

    let _ = writeln!(out, "AVAILABLE BANDS:");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for status in &run.statuses {
        let _ = writeln!(out, "  {}", format_band_line(status, color));
    }
    let _ = writeln!(out, "\n{heavy}");

    out
}

/// One aligned band line, e.g. ` 40m ( 7.0- 7.2 MHz): OPEN`.
pub fn format_band_line(status: &BandStatus<'_>, color: bool) -> String {
    let band = status.band;
    format!(
        "{:>4} ({:>4.1}-{:>4.1} MHz): {}",
        band.name,
        band.low_freq,
        band.high_freq,
        status_label(status.status, color)
    )
}

fn status_label(status: Status, color: bool) -> String {
    let padded = format!("{:<8}", status.label());
    if !color {
        return padded;
    }
    match status {
        Status::Open | Status::Nvis => style(padded).green().to_string(),
        Status::Marginal => style(padded).yellow().to_string(),
        Status::Absorbed | Status::Closed => style(padded).red().to_string(),
    }
}

fn fmt_time(ts: DateTime<Utc>) -> String {
    ts.format(TIME_FORMAT).to_string()
}

fn fmt_mhz(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2} MHz"),
        None => "N/A".to_string(),
    }
}
