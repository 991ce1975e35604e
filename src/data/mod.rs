//! Archive access: fetching and decoding raw soundings.

pub mod dias;

pub use dias::{DiasClient, FetchError, FetchWindow, decode_items};
