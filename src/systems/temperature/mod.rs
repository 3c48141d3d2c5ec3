//! Temperature System - Thermodynamics and Phase Changes
//!
//! - Heat flows from warmer orthogonal neighbours, scaled by the state pairing
//! - Fire is a heat source: forced into a high band, never drained
//! - Every cell bleeds toward ambient at its cooling rate
//! - Probabilistic phase changes and spontaneous ignition
//!
//! Reads the current buffers and writes only the next ones, so the result
//! does not depend on the order cells are visited in.

mod diffusion;
mod phase_changes;

pub use diffusion::{exchange_coefficient, process_temperature_grid};
pub use phase_changes::check_phase_change;

/// Approximate absolute zero
pub const TEMP_MIN: f32 = -273.0;
/// Runaway-fire ceiling
pub const TEMP_MAX: f32 = 5000.0;
pub const AMBIENT_TEMP: f32 = 22.0;

/// Spontaneous ignition threshold for flammable materials
pub const IGNITION_TEMP: f32 = 300.0;
