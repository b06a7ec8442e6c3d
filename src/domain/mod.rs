//! Domain types used throughout the calculator.
//!
//! This module defines:
//!
//! - catalog records (`JammerKind`, `FittingKind`) and their categories
//! - parsed command-line instances (`JamInstance`, `FittingInstance`)
//! - the validated run configuration (`JamConfig`)

pub mod types;

pub use types::*;
