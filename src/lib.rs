//! ThermoFlow - Interactive 2D heat equation playground.
//!
//! A square scalar field evolves under an explicit finite-difference heat
//! equation with damping; a circular brush injects heat; a palette lookup
//! table maps temperatures to RGBA pixels alongside per-frame statistics.
//!
//! # Architecture
//!
//! - `schema`: configuration and palette types
//! - `compute`: the double-buffered field, diffusion stencil, and brush
//! - `render`: color LUT and the field-to-pixel pass
//! - `runner`: per-frame orchestration and stats throttling
//!
//! # Example
//!
//! ```rust
//! use thermoflow::{
//!     compute::{Field, brush},
//!     runner::SimulationLoop,
//!     schema::{Palette, SimulationConfig},
//! };
//!
//! let config = SimulationConfig::default();
//! let mut field = Field::new(config.resolution).unwrap();
//! let mut sim = SimulationLoop::new(Palette::Magma);
//!
//! // Touch the grid center, then advance a few frames.
//! brush::inject(&mut field, 75.0, 75.0, config.brush_size, config.brush_intensity);
//! for _ in 0..4 {
//!     if let Some(stats) = sim.tick(&mut field, &config) {
//!         println!("iteration {}: max {:.3}", stats.iteration, stats.max_temp);
//!     }
//! }
//! assert_eq!(sim.pixels().len(), config.cell_count() * 4);
//! ```

pub mod compute;
pub mod render;
pub mod runner;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::Field;
pub use render::{ColorLut, FrameStats};
pub use runner::SimulationLoop;
pub use schema::{Palette, SimulationConfig};
