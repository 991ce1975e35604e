//! Command-line parsing for the ionosonde band advisor.
//!
//! Argument parsing stays here; `app` turns the parsed values into a `RunConfig`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};

use crate::data::dias::DEFAULT_LIMIT;
use crate::domain::Lookback;
use crate::domain::stations::DEFAULT_STATION;

const AFTER_HELP: &str = "\
EXAMPLES:
  ionoband                     Latest AT138 data (last 10 minutes)
  ionoband -s EB040            Ebre station (Spain)
  ionoband -l 1h               Data closest to one hour ago
  ionoband -s JR053 -l 6h      Juliusruh, six hours ago

LOOKBACK FORMAT: 1d = one day, 6h = six hours, 30m = thirty minutes

STATIONS:
  AT138 = Athens GR, EB040 = Ebre ES, SO148 = Sopron HU, JR053 = Juliusruh DE

ENVIRONMENT:
  IONOBAND_API_URL   override the archive endpoint (also read from .env)
  RUST_LOG           log filter, overrides -v";

/// DIAS ionogram fetcher and amateur band advisor.
#[derive(Debug, Parser)]
#[command(name = "ionoband", version, about = "DIAS ionogram data + ham band advisor", after_help = AFTER_HELP)]
pub struct Cli {
    /// Ionosonde station code.
    #[arg(short, long, default_value = DEFAULT_STATION)]
    pub station: String,

    /// How long ago the target observation is (e.g. 30m, 6h, 1d).
    #[arg(short, long, default_value = Lookback::DEFAULT)]
    pub lookback: Lookback,

    /// Reference time the lookback is measured from (RFC 3339); defaults to now.
    #[arg(long, value_name = "TIME")]
    pub at: Option<DateTime<Utc>>,

    /// Maximum number of archive records to request.
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// JSON band table replacing the built-in IARU Region 1 allocations.
    #[arg(long, value_name = "JSON")]
    pub bands: Option<PathBuf>,

    /// Write the selected observation and band statuses to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Disable coloured status labels.
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
