//! Configuration types for the heat simulation.

use serde::{Deserialize, Serialize};

/// Stability bound for the explicit 4-neighbor scheme.
///
/// The forward-Euler update diverges for `alpha > 0.25`; the bound is a
/// configuration policy (UI sliders should clamp to it), never a runtime
/// fault. An unstable alpha produces visible blow-up, not a crash.
pub const ALPHA_STABILITY_LIMIT: f32 = 0.25;

/// Top-level simulation configuration.
///
/// The core treats every instance as a per-tick snapshot: all fields are
/// re-read on each tick, so a mid-run change takes effect on the next step.
/// JSON uses camelCase keys to match the browser front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Grid width and height in cells (the grid is square).
    pub resolution: usize,
    /// Thermal diffusivity. Keep below [`ALPHA_STABILITY_LIMIT`].
    pub alpha: f32,
    /// Diffusion steps per displayed frame.
    pub iterations_per_frame: u32,
    /// Brush radius in grid cells.
    pub brush_size: f32,
    /// Heat added per interaction event.
    pub brush_intensity: f32,
    /// Multiplicative cooling factor applied each step (<= 1.0).
    pub damping: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            resolution: 150,
            alpha: 0.20,
            iterations_per_frame: 5,
            brush_size: 8.0,
            brush_intensity: 1.0,
            damping: 0.999,
        }
    }
}

impl SimulationConfig {
    /// Total cell count (resolution squared).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Whether alpha satisfies the explicit-scheme stability bound.
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.alpha <= ALPHA_STABILITY_LIMIT
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution < 3 {
            return Err(ConfigError::InvalidDimension {
                resolution: self.resolution,
            });
        }
        if !(self.alpha > 0.0) {
            return Err(ConfigError::InvalidAlpha);
        }
        if self.iterations_per_frame == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        if !(self.brush_size >= 0.0) {
            return Err(ConfigError::InvalidBrushSize);
        }
        if !(self.brush_intensity > 0.0) {
            return Err(ConfigError::InvalidBrushIntensity);
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::InvalidDamping);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("resolution {resolution} is below 3; the stencil needs at least one interior cell")]
    InvalidDimension { resolution: usize },
    #[error("alpha must be positive")]
    InvalidAlpha,
    #[error("iterations per frame must be at least 1")]
    InvalidIterations,
    #[error("brush size must be non-negative")]
    InvalidBrushSize,
    #[error("brush intensity must be positive")]
    InvalidBrushIntensity,
    #[error("damping must be in (0, 1]")]
    InvalidDamping,
}
