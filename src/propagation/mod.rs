//! The decision core: validity filtering, temporal selection, band classification.
//!
//! Everything here is pure; the archive client and the presentation layer live
//! elsewhere.

pub mod classify;
pub mod select;
pub mod validate;

pub use classify::{MARGINAL_RATIO, NVIS_RATIO, OPEN_RATIO, classify};
pub use select::select_closest;
pub use validate::is_valid;
