//! `ionoband` library crate.
//!
//! The binary is a thin wrapper around this library so that:
//!
//! - the validate/select/classify core is testable without the network
//! - the archive client and the report can be swapped independently

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod propagation;
pub mod report;
