//! Compute module - Numerical core of the simulation.

pub mod brush;
mod field;
pub mod stencil;

pub use field::*;
