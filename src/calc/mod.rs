//! Jam math: fitting stacking, strength resolution, probability combination.

pub mod probability;
pub mod stacking;
pub mod strength;

pub use probability::*;
pub use stacking::*;
pub use strength::*;
