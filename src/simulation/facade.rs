use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::settings::Settings;
use super::{Tool, WorldCore};

/// JS handle to a world. The renderer reads the cell buffers straight out of
/// wasm memory through `types_ptr` / `temperature_ptr`.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world from a settings document (see `Settings`)
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: u32, height: u32, json: &str) -> Result<World, JsValue> {
        let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            core: WorldCore::with_settings(width, height, &settings),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Step the simulation forward one frame
    pub fn update(&mut self) {
        self.core.update();
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn is_valid(&self, index: i32) -> bool {
        self.core.is_valid(index)
    }

    pub fn set_cell(&mut self, index: i32, element: u8) {
        self.core.set_cell(index, element);
    }

    pub fn get_cell(&self, index: i32) -> u8 {
        self.core.get_cell(index)
    }

    pub fn set_temp(&mut self, index: i32, temp: f32) {
        self.core.set_temp(index, temp);
    }

    pub fn get_temp(&self, index: i32) -> f32 {
        self.core.get_temp(index)
    }

    /// Brush stroke with a registry id or a tool id (HEAT / COOL).
    /// Returns false if `tool` is neither.
    pub fn paint(&mut self, cx: i32, cy: i32, radius: i32, tool: u8) -> bool {
        match Tool::from_id(tool) {
            Some(tool) => {
                self.core.apply_brush(cx, cy, radius, tool);
                true
            }
            None => false,
        }
    }

    pub fn set_ambient_temperature(&mut self, temp: f32) {
        self.core.set_ambient_temperature(temp);
    }

    pub fn get_ambient_temperature(&self) -> f32 {
        self.core.ambient_temperature()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    /// Get pointer to types array (for JS rendering)
    pub fn types_ptr(&self) -> *const u8 {
        self.core.grid_data().as_ptr()
    }

    pub fn types_len(&self) -> usize {
        self.core.grid_data().len()
    }

    /// Get pointer to temperature array (for JS thermal rendering)
    pub fn temperature_ptr(&self) -> *const f32 {
        self.core.temp_data().as_ptr()
    }

    pub fn temperature_len(&self) -> usize {
        self.core.temp_data().len()
    }

    pub fn temperature_byte_len(&self) -> usize {
        self.core.temp_data().len() * std::mem::size_of::<f32>()
    }

    /// Element and tool table for the UI
    #[wasm_bindgen(js_name = manifestJson)]
    pub fn manifest_json(&self) -> Result<String, JsValue> {
        crate::domain::manifest::manifest_json().map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
