//! `ecmulator` library crate: ECM jam probabilities.
//!
//! The binary (`ecm`) is a thin wrapper around this library so that:
//!
//! - the jam math is testable without spawning processes
//! - catalogs and parsing are reusable from other tools

pub mod app;
pub mod calc;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod parse;
pub mod report;
pub mod sim;
