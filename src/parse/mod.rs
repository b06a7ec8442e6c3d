//! Descriptor parsing: `CODE` or `CODExN`, checked against a catalog.

pub mod descriptor;

pub use descriptor::*;
