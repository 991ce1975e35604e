//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - decoded soundings (`Observation`, `StationRecords`)
//! - the band table (`Band`, `BandTable`)
//! - classification outputs (`Status`, `BandStatus`)
//! - run settings (`RunConfig`, `Lookback`)

pub mod bands;
pub mod lookback;
pub mod stations;
pub mod types;

pub use bands::{Band, BandTable, BandTableError};
pub use lookback::{Lookback, LookbackError};
pub use types::*;
