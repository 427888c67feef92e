//! Schema module - Configuration and palette types for the simulation.

mod config;
mod palette;

pub use config::*;
pub use palette::*;
