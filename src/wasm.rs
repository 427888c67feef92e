//! WebAssembly bindings for ThermoFlow.
//!
//! Thin wrapper tying a [`Field`] and a [`SimulationLoop`] together for a
//! browser host: the canvas layer pulls pixels each animation frame and
//! pushes pointer events and control changes back in.

use wasm_bindgen::prelude::*;

use crate::compute::{Field, brush};
use crate::runner::SimulationLoop;
use crate::schema::{Palette, SimulationConfig};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

/// WebAssembly wrapper around the simulation core.
#[wasm_bindgen]
pub struct WasmSimulation {
    config: SimulationConfig,
    field: Field,
    sim: SimulationLoop,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Create a simulation from JSON configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmSimulation, JsValue> {
        let config: SimulationConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

        let field = Field::new(config.resolution)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

        Ok(WasmSimulation {
            config,
            field,
            sim: SimulationLoop::new(Palette::default()),
        })
    }

    /// Advance one displayed frame.
    ///
    /// Returns the frame's stats as a JS object on publishing frames,
    /// `null` otherwise.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        match self.sim.tick(&mut self.field, &self.config) {
            Some(stats) => serde_wasm_bindgen::to_value(&stats)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
            None => Ok(JsValue::NULL),
        }
    }

    /// RGBA pixels from the most recent tick, row-major.
    #[wasm_bindgen]
    pub fn pixels(&self) -> Vec<u8> {
        self.sim.pixels().to_vec()
    }

    /// Apply one brush event at grid coordinates.
    ///
    /// The host converts pointer position into grid space before calling.
    #[wasm_bindgen]
    pub fn inject(&mut self, x: f32, y: f32) {
        brush::inject(
            &mut self.field,
            x,
            y,
            self.config.brush_size,
            self.config.brush_intensity,
        );
    }

    /// Replace the configuration; a resolution change takes effect on the
    /// next reset.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config: SimulationConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;
        self.config = config;
        Ok(())
    }

    /// Select a palette by name ("Magma", "Inferno", "Viridis", "Ice").
    #[wasm_bindgen(js_name = setPalette)]
    pub fn set_palette(&mut self, name: &str) -> Result<(), JsValue> {
        let palette: Palette = name
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{e}")))?;
        self.sim.set_palette(palette);
        Ok(())
    }

    /// Pause or resume stepping.
    #[wasm_bindgen(js_name = setRunning)]
    pub fn set_running(&mut self, running: bool) {
        self.sim.set_running(running);
    }

    /// Zero the field at the configured resolution and restart counting.
    ///
    /// The host is responsible for clearing its own stats history.
    #[wasm_bindgen]
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.field
            .resize(self.config.resolution)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))
    }

    /// Get grid resolution.
    #[wasm_bindgen(js_name = getResolution)]
    pub fn get_resolution(&self) -> usize {
        self.field.resolution()
    }

    /// Get completed iteration count.
    #[wasm_bindgen(js_name = getIteration)]
    pub fn get_iteration(&self) -> u64 {
        self.field.iteration()
    }

    /// Whether stepping is enabled.
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }
}
