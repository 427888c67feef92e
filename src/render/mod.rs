//! Render module - Palette lookup and pixel conversion.

mod frame;
mod lut;

pub use frame::*;
pub use lut::*;
