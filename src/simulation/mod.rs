//! World - the per-frame simulation engine
//!
//! Owns the current/next cell buffers, the random source and the settings.
//! This file only orchestrates; the rules live in systems/:
//! - thermal pass and phase changes in systems/temperature
//! - movement passes in systems/behaviors
//! - neighbour chemistry in systems/reactions

use crate::core::grid::CellBuffers;
use crate::core::random::{RandomSource, Xorshift32};
use crate::elements::ElementId;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use commands::Tool;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::{Settings, SettingsError};

use perf_timer::PerfTimer;

/// The simulation world, generic over its random source
pub struct WorldCore<R = Xorshift32> {
    current: CellBuffers,
    next: CellBuffers,
    rng: R,

    // Settings
    ambient_temperature: f32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore<Xorshift32> {
    /// Create a new world with default settings: all Empty at 22°C
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, &Settings::default())
    }

    /// Build from `settings`; an out-of-range ambient is clamped and a
    /// non-finite one replaced by the default
    pub fn with_settings(width: u32, height: u32, settings: &Settings) -> Self {
        init::create_world_core(width, height, settings)
    }
}

impl<R: RandomSource> WorldCore<R> {
    /// Create a world that draws every random decision from `rng`
    pub fn with_random(width: u32, height: u32, settings: &Settings, rng: R) -> Self {
        init::create_world_core_with_random(width, height, settings, rng)
    }

    pub fn width(&self) -> u32 { self.current.width() }

    pub fn height(&self) -> u32 { self.current.height() }

    pub fn size(&self) -> usize { self.current.size() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Advance one frame: thermal pass, then movement, then clamp
    pub fn update(&mut self) {
        step::step(self);
    }

    /// Every cell back to Empty at ambient, no reallocation
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    pub fn is_valid(&self, index: i32) -> bool {
        self.current.is_valid(index)
    }

    /// Place `element` at its base temperature; invalid index or id is a no-op
    pub fn set_cell(&mut self, index: i32, element: ElementId) {
        commands::set_cell(self, index, element)
    }

    pub fn get_cell(&self, index: i32) -> ElementId {
        commands::get_cell(self, index)
    }

    pub fn set_temp(&mut self, index: i32, temp: f32) {
        commands::set_temp(self, index, temp)
    }

    pub fn get_temp(&self, index: i32) -> f32 {
        commands::get_temp(self, index)
    }

    /// Paint, heat or cool the square brush around (cx, cy)
    pub fn apply_brush(&mut self, cx: i32, cy: i32, radius: i32, tool: Tool) {
        commands::apply_brush(self, cx, cy, radius, tool)
    }

    /// Run the reaction table for one cell pair outside a frame
    pub fn interact(&mut self, index: i32, neighbor: i32) -> bool {
        commands::interact(self, index, neighbor)
    }

    /// Material ids, row-major
    pub fn grid_data(&self) -> &[ElementId] {
        &self.current.types
    }

    /// Temperatures in °C, row-major
    pub fn temp_data(&self) -> &[f32] {
        &self.current.temperature
    }

    pub fn count(&self, element: ElementId) -> usize {
        self.current.count(element)
    }

    pub fn set_ambient_temperature(&mut self, temp: f32) {
        settings::set_ambient_temperature(self, temp);
    }

    pub fn ambient_temperature(&self) -> f32 {
        settings::get_ambient_temperature(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
