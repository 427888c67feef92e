//! Per-frame orchestration of stepping, rendering, and stats publication.

use crate::compute::{Field, stencil};
use crate::render::{ColorLut, FrameStats, render_into};
use crate::schema::{Palette, SimulationConfig};

/// Stats are published every this many completed iterations.
pub const STATS_INTERVAL: u64 = 10;

/// Drives the simulation one displayed frame at a time.
///
/// Each [`tick`](SimulationLoop::tick) runs the configured number of
/// diffusion steps (when running), renders once, and decides whether this
/// frame's statistics should be published downstream. The loop owns the LUT
/// and the reusable pixel buffer but no field data and no stats history;
/// those belong to the caller and the stats sink respectively.
pub struct SimulationLoop {
    lut: ColorLut,
    pixels: Vec<u8>,
    running: bool,
    warned_alpha: Option<f32>,
}

impl SimulationLoop {
    /// Create a loop with the given palette, initially running.
    pub fn new(palette: Palette) -> Self {
        Self {
            lut: ColorLut::new(palette),
            pixels: Vec::new(),
            running: true,
            warned_alpha: None,
        }
    }

    /// Whether diffusion steps are executed on tick.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pause or resume stepping. A paused loop still renders, so brush
    /// strokes stay visible.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Active palette.
    pub fn palette(&self) -> Palette {
        self.lut.palette()
    }

    /// Select a palette; the LUT is rebuilt only on an actual change.
    pub fn set_palette(&mut self, palette: Palette) {
        self.lut.set_palette(palette);
    }

    /// RGBA pixels from the most recent tick, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Advance one displayed frame.
    ///
    /// The config is a per-tick snapshot: every field is re-read here, so
    /// changes take effect on the very next step. Returns `Some(stats)` on
    /// publishing frames (`iteration % STATS_INTERVAL == 0`), `None`
    /// otherwise; the render itself happens unconditionally.
    pub fn tick(&mut self, field: &mut Field, config: &SimulationConfig) -> Option<FrameStats> {
        if self.running {
            if !config.is_stable() && self.warned_alpha != Some(config.alpha) {
                log::warn!(
                    "alpha {} exceeds the stability limit; expect blow-up",
                    config.alpha
                );
                self.warned_alpha = Some(config.alpha);
            }
            for _ in 0..config.iterations_per_frame {
                stencil::diffuse(field, config.alpha, config.damping);
            }
        }

        let stats = render_into(field, &self.lut, &mut self.pixels);

        if stats.iteration % STATS_INTERVAL == 0 {
            log::debug!(
                "iteration {}: max={:.4} total={:.4}",
                stats.iteration,
                stats.max_temp,
                stats.total_energy
            );
            Some(stats)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::brush;

    fn test_config() -> SimulationConfig {
        SimulationConfig {
            resolution: 16,
            alpha: 0.2,
            iterations_per_frame: 1,
            brush_size: 1.0,
            brush_intensity: 1.0,
            damping: 0.999,
        }
    }

    #[test]
    fn test_stats_cadence() {
        // 25 single-step ticks publish exactly twice: iterations 10 and 20.
        let config = test_config();
        let mut field = Field::new(config.resolution).unwrap();
        let mut sim = SimulationLoop::new(Palette::Magma);

        let published: Vec<FrameStats> = (0..25)
            .filter_map(|_| sim.tick(&mut field, &config))
            .collect();

        assert_eq!(published.len(), 2);
        assert_eq!(published[0].iteration, 10);
        assert_eq!(published[1].iteration, 20);
    }

    #[test]
    fn test_iterations_per_frame() {
        let config = SimulationConfig {
            iterations_per_frame: 5,
            ..test_config()
        };
        let mut field = Field::new(config.resolution).unwrap();
        let mut sim = SimulationLoop::new(Palette::Magma);

        let stats = sim.tick(&mut field, &config);
        assert_eq!(field.iteration(), 5);
        assert!(stats.is_none());

        sim.tick(&mut field, &config);
        assert_eq!(field.iteration(), 10);
    }

    #[test]
    fn test_paused_tick_still_renders() {
        let config = test_config();
        let mut field = Field::new(config.resolution).unwrap();
        let mut sim = SimulationLoop::new(Palette::Magma);
        sim.set_running(false);

        brush::inject(&mut field, 8.0, 8.0, 1.0, 1.0);
        sim.tick(&mut field, &config);

        assert_eq!(field.iteration(), 0);
        // The injected spot differs from the cold background color.
        let hot = field.idx(8, 8) * 4;
        let cold = field.idx(1, 1) * 4;
        assert_ne!(sim.pixels()[hot..hot + 3], sim.pixels()[cold..cold + 3]);
    }

    #[test]
    fn test_config_changes_apply_next_tick() {
        let mut config = test_config();
        let mut field = Field::new(config.resolution).unwrap();
        let mut sim = SimulationLoop::new(Palette::Magma);

        sim.tick(&mut field, &config);
        assert_eq!(field.iteration(), 1);

        config.iterations_per_frame = 3;
        sim.tick(&mut field, &config);
        assert_eq!(field.iteration(), 4);
    }

    #[test]
    fn test_pixel_buffer_tracks_resolution() {
        let config = test_config();
        let mut field = Field::new(config.resolution).unwrap();
        let mut sim = SimulationLoop::new(Palette::Magma);

        sim.tick(&mut field, &config);
        assert_eq!(sim.pixels().len(), 16 * 16 * 4);

        field.resize(8).unwrap();
        sim.tick(&mut field, &config);
        assert_eq!(sim.pixels().len(), 8 * 8 * 4);
    }
}
