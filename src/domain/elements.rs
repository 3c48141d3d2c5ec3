//! Element Definitions - the static material registry
//!
//! Ids are dense and index `ELEMENT_DATA` directly, so every lookup is a
//! single array access. The two tool ids are brush modes for the painting
//! layer and never appear in the grid.

pub type ElementId = u8;

pub const EL_EMPTY: ElementId = 0;
pub const EL_WALL: ElementId = 1;
pub const EL_SAND: ElementId = 2;
pub const EL_WATER: ElementId = 3;
pub const EL_WOOD: ElementId = 4;
pub const EL_FIRE: ElementId = 5;
pub const EL_SMOKE: ElementId = 6;
pub const EL_ACID: ElementId = 7;
pub const EL_ACIDIC_WATER: ElementId = 8;
pub const EL_STEAM: ElementId = 9;
pub const EL_ICE: ElementId = 10;
pub const EL_LAVA: ElementId = 11;
pub const EL_STONE: ElementId = 12;
pub const EL_GLASS: ElementId = 13;
pub const EL_GUNPOWDER: ElementId = 14;

pub const ELEMENT_COUNT: usize = 15;

// Brush modes, outside the dense id range on purpose.
pub const TOOL_HEAT: ElementId = 98;
pub const TOOL_COOL: ElementId = 99;

/// Physical state class - selects the movement rule set
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementState {
    Static,
    Powder,
    Liquid,
    Gas,
}

#[derive(Clone, Copy, Debug)]
pub struct ElementDef {
    pub id: ElementId,
    pub name: &'static str,
    /// ABGR packed color (little-endian RGBA bytes)
    pub color: u32,
    pub state: ElementState,
    pub base_temp: f32,
    /// 0.0 = insulator, 1.0 = conductor
    pub heat_conductivity: f32,
    /// Fraction of the gap to ambient lost per frame
    pub cooling_rate: f32,
    pub high_temp: f32,
    pub high_temp_convert: Option<ElementId>,
    pub low_temp: f32,
    pub low_temp_convert: Option<ElementId>,
    pub flammability: f32,
}

/// Pack RGBA into the ABGR layout the renderer uploads as-is
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

const NEVER_HOT: f32 = 9999.0;
const NEVER_COLD: f32 = -9999.0;

const fn def(
    id: ElementId,
    name: &'static str,
    color: u32,
    state: ElementState,
    base_temp: f32,
    heat_conductivity: f32,
    cooling_rate: f32,
    high: Option<(f32, ElementId)>,
    low: Option<(f32, ElementId)>,
    flammability: f32,
) -> ElementDef {
    let (high_temp, high_temp_convert) = match high {
        Some((t, to)) => (t, Some(to)),
        None => (NEVER_HOT, None),
    };
    let (low_temp, low_temp_convert) = match low {
        Some((t, to)) => (t, Some(to)),
        None => (NEVER_COLD, None),
    };
    ElementDef {
        id,
        name,
        color,
        state,
        base_temp,
        heat_conductivity,
        cooling_rate,
        high_temp,
        high_temp_convert,
        low_temp,
        low_temp_convert,
        flammability,
    }
}

use ElementState::{Gas, Liquid, Powder, Static};

pub static ELEMENT_DATA: [ElementDef; ELEMENT_COUNT] = [
    // Air is a gas so it exchanges heat at gas rates
    def(EL_EMPTY, "AIR", rgba(0, 0, 0, 255), Gas, 22.0, 0.4, 0.01, None, None, 0.0),
    def(EL_WALL, "WALL", rgba(80, 80, 80, 255), Static, 22.0, 0.05, 0.0005, None, None, 0.0),
    def(EL_SAND, "SAND", rgba(255, 203, 0, 255), Powder, 22.0, 1.0, 0.0008, Some((1700.0, EL_GLASS)), None, 0.0),
    def(EL_WATER, "WATER", rgba(102, 191, 255, 255), Liquid, 20.0, 0.4, 0.001, Some((100.0, EL_STEAM)), Some((0.0, EL_ICE)), 0.0),
    def(EL_WOOD, "WOOD", rgba(127, 106, 79, 255), Static, 22.0, 0.1, 0.01, Some((300.0, EL_FIRE)), None, 0.4),
    def(EL_FIRE, "FIRE", rgba(255, 161, 0, 255), Gas, 1200.0, 0.8, 0.0, None, None, 0.0),
    def(EL_SMOKE, "SMOKE", rgba(150, 150, 150, 180), Gas, 600.0, 0.3, 0.05, None, None, 0.0),
    def(EL_ACID, "ACID", rgba(0, 158, 47, 255), Liquid, 20.0, 0.4, 0.02, Some((120.0, EL_STEAM)), None, 0.1),
    def(EL_ACIDIC_WATER, "A.WATER", rgba(0, 240, 200, 200), Liquid, 25.0, 0.4, 0.02, Some((110.0, EL_STEAM)), None, 0.0),
    def(EL_STEAM, "STEAM", rgba(245, 245, 245, 255), Gas, 150.0, 0.2, 0.1, None, Some((99.0, EL_WATER)), 0.0),
    def(EL_ICE, "ICE", rgba(200, 200, 255, 255), Static, -10.0, 0.3, 0.01, Some((1.0, EL_WATER)), None, 0.0),
    def(EL_LAVA, "LAVA", rgba(255, 80, 0, 255), Liquid, 1200.0, 0.5, 0.005, None, Some((700.0, EL_STONE)), 0.0),
    def(EL_STONE, "STONE", rgba(80, 80, 80, 255), Static, 22.0, 0.05, 0.002, Some((1100.0, EL_LAVA)), None, 0.0),
    def(EL_GLASS, "GLASS", rgba(200, 255, 255, 150), Static, 22.0, 1.0, 0.005, None, None, 0.0),
    def(EL_GUNPOWDER, "GUNPOWDER", rgba(50, 50, 50, 255), Powder, 22.0, 0.2, 0.01, Some((250.0, EL_FIRE)), None, 0.9),
];

/// Brush-only entries: (id, name, color)
pub static TOOL_DATA: [(ElementId, &str, u32); 2] = [
    (TOOL_HEAT, "HEAT", rgba(230, 41, 55, 255)),
    (TOOL_COOL, "COOL", rgba(0, 121, 241, 255)),
];

#[inline]
pub fn is_valid_element_id(id: ElementId) -> bool {
    (id as usize) < ELEMENT_COUNT
}

/// Total lookup. Unknown ids resolve to Air; correct callers never hit that.
#[inline]
pub fn lookup(id: ElementId) -> &'static ElementDef {
    ELEMENT_DATA.get(id as usize).unwrap_or(&ELEMENT_DATA[EL_EMPTY as usize])
}

#[inline]
pub fn state_of(id: ElementId) -> ElementState {
    lookup(id).state
}

#[inline]
pub fn is_liquid(id: ElementId) -> bool {
    state_of(id) == Liquid
}

#[inline]
pub fn is_gas(id: ElementId) -> bool {
    state_of(id) == Gas
}

pub fn name_of(id: ElementId) -> &'static str {
    if let Some((_, name, _)) = TOOL_DATA.iter().find(|(tool, _, _)| *tool == id) {
        return *name;
    }
    lookup(id).name
}

pub fn color_of(id: ElementId) -> u32 {
    if let Some((_, _, color)) = TOOL_DATA.iter().find(|(tool, _, _)| *tool == id) {
        return *color;
    }
    lookup(id).color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_match_slots() {
        for (idx, el) in ELEMENT_DATA.iter().enumerate() {
            assert_eq!(el.id as usize, idx, "{} sits in the wrong slot", el.name);
        }
    }

    #[test]
    fn unknown_ids_fall_back_to_air() {
        assert_eq!(lookup(200).id, EL_EMPTY);
        assert_eq!(lookup(TOOL_HEAT).id, EL_EMPTY);
        assert!(!is_valid_element_id(TOOL_COOL));
    }

    #[test]
    fn conversion_targets_are_registry_ids() {
        for el in ELEMENT_DATA.iter() {
            for target in [el.high_temp_convert, el.low_temp_convert].into_iter().flatten() {
                assert!(is_valid_element_id(target), "{} converts to unknown id {}", el.name, target);
            }
        }
    }

    #[test]
    fn state_classes() {
        assert!(is_gas(EL_EMPTY));
        assert_eq!(state_of(EL_WALL), Static);
        assert_eq!(state_of(EL_GUNPOWDER), Powder);
        assert!(is_liquid(EL_LAVA));
        assert!(is_gas(EL_FIRE));
    }

    #[test]
    fn tool_names_and_colors() {
        assert_eq!(name_of(TOOL_HEAT), "HEAT");
        assert_eq!(name_of(EL_ACIDIC_WATER), "A.WATER");
        assert_eq!(color_of(EL_EMPTY), rgba(0, 0, 0, 255));
        assert_eq!(rgba(1, 2, 3, 4), 0x04030201);
    }
}
