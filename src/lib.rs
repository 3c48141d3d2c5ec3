//! Thermosand Engine - falling-sand cellular automaton with heat, in WASM
//!
//! Every cell holds a material id and a temperature. Each frame runs a
//! thermal pass (exchange, cooling, phase changes) and then two movement
//! passes (powders and liquids bottom-up, gases top-down) over a double
//! buffer, so no particle moves twice or lands where another already did.
//!
//! Architecture:
//! - core/       - SoA cell buffers, frame transaction, random source
//! - domain/     - element registry and manifest
//! - systems/    - temperature, movement behaviors, reactions
//! - simulation/ - WorldCore orchestration and the wasm facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths used across the crate)
pub use crate::core::grid;
pub use domain::elements;
pub use systems::behaviors;
pub use systems::reactions;
pub use systems::temperature;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("thermosand engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::random::{RandomSource, Xorshift32};
pub use domain::elements::{ElementDef, ElementId, ElementState};
pub use simulation::{PerfStats, Settings, SettingsError, Tool, World, WorldCore};

/// Element and tool table as JSON for UI collaborators
#[wasm_bindgen(js_name = elementManifest)]
pub fn element_manifest() -> Result<String, JsValue> {
    domain::manifest::manifest_json().map_err(|e| JsValue::from_str(&e.to_string()))
}

// Export element constants for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { domain::elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_wall() -> u8 { domain::elements::EL_WALL }
#[wasm_bindgen]
pub fn el_sand() -> u8 { domain::elements::EL_SAND }
#[wasm_bindgen]
pub fn el_water() -> u8 { domain::elements::EL_WATER }
#[wasm_bindgen]
pub fn el_wood() -> u8 { domain::elements::EL_WOOD }
#[wasm_bindgen]
pub fn el_fire() -> u8 { domain::elements::EL_FIRE }
#[wasm_bindgen]
pub fn el_smoke() -> u8 { domain::elements::EL_SMOKE }
#[wasm_bindgen]
pub fn el_acid() -> u8 { domain::elements::EL_ACID }
#[wasm_bindgen]
pub fn el_acidic_water() -> u8 { domain::elements::EL_ACIDIC_WATER }
#[wasm_bindgen]
pub fn el_steam() -> u8 { domain::elements::EL_STEAM }
#[wasm_bindgen]
pub fn el_ice() -> u8 { domain::elements::EL_ICE }
#[wasm_bindgen]
pub fn el_lava() -> u8 { domain::elements::EL_LAVA }
#[wasm_bindgen]
pub fn el_stone() -> u8 { domain::elements::EL_STONE }
#[wasm_bindgen]
pub fn el_glass() -> u8 { domain::elements::EL_GLASS }
#[wasm_bindgen]
pub fn el_gunpowder() -> u8 { domain::elements::EL_GUNPOWDER }
#[wasm_bindgen]
pub fn tool_heat() -> u8 { domain::elements::TOOL_HEAT }
#[wasm_bindgen]
pub fn tool_cool() -> u8 { domain::elements::TOOL_COOL }
