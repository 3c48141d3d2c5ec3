use wasm_bindgen::prelude::*;

/// Snapshot of the last `update()`; all zeros while perf metrics are off
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) thermal_ms: f64,
    pub(super) movement_ms: f64,
    pub(super) phase_changes: u32,
    pub(super) reactions_applied: u32,
    pub(super) particles_moved: u32,
    pub(super) non_empty_cells: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn thermal_ms(&self) -> f64 { self.thermal_ms }
    #[wasm_bindgen(getter)]
    pub fn movement_ms(&self) -> f64 { self.movement_ms }
    #[wasm_bindgen(getter)]
    pub fn phase_changes(&self) -> u32 { self.phase_changes }
    #[wasm_bindgen(getter)]
    pub fn reactions_applied(&self) -> u32 { self.reactions_applied }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn non_empty_cells(&self) -> u32 { self.non_empty_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
