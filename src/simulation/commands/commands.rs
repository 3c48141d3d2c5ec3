use crate::core::grid::Frame;
use crate::core::random::RandomSource;
use crate::elements::{
    is_valid_element_id, lookup, ElementId, ElementState, EL_EMPTY, EL_WALL, TOOL_COOL, TOOL_HEAT,
};
use crate::reactions;

use super::WorldCore;

const BRUSH_HEAT_STEP: f32 = 100.0;
const BRUSH_HEAT_CEILING: f32 = 9000.0;
const BRUSH_COLD_FLOOR: f32 = -273.0;

/// What a brush stroke does to each cell under it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    /// Place a material (`EL_EMPTY` erases)
    Paint(ElementId),
    Heat,
    Cool,
}

impl Tool {
    /// Registry ids paint; the two tool ids heat and cool; anything else is not a tool
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            TOOL_HEAT => Some(Tool::Heat),
            TOOL_COOL => Some(Tool::Cool),
            id if is_valid_element_id(id) => Some(Tool::Paint(id)),
            _ => None,
        }
    }
}

/// How much a material resists the heat/cool brush
#[inline]
fn thermal_resistance(state: ElementState) -> f32 {
    match state {
        ElementState::Powder | ElementState::Liquid => 5.0,
        ElementState::Static => 10.0,
        ElementState::Gas => 1.0,
    }
}

#[inline]
fn checked_index<R: RandomSource>(world: &WorldCore<R>, index: i32) -> Option<usize> {
    if world.current.is_valid(index) {
        Some(index as usize)
    } else {
        None
    }
}

pub(super) fn reset<R: RandomSource>(world: &mut WorldCore<R>) {
    let ambient = world.ambient_temperature;
    world.current.fill(ambient);
    world.next.fill(ambient);
    world.perf_stats.reset();
    log::debug!("world reset to empty at {}°C", ambient);
}

pub(super) fn set_cell<R: RandomSource>(world: &mut WorldCore<R>, index: i32, element: ElementId) {
    let Some(idx) = checked_index(world, index) else {
        return;
    };
    if !is_valid_element_id(element) {
        return;
    }
    world.current.place(idx, element);
    world.next.place(idx, element);
}

pub(super) fn get_cell<R: RandomSource>(world: &WorldCore<R>, index: i32) -> ElementId {
    match checked_index(world, index) {
        Some(idx) => world.current.types[idx],
        None => EL_EMPTY,
    }
}

/// Writes both buffers. Non-finite values are dropped; the rest are held to the
/// brush range, and the frame clamp narrows them on the next update.
pub(super) fn set_temp<R: RandomSource>(world: &mut WorldCore<R>, index: i32, temp: f32) {
    let Some(idx) = checked_index(world, index) else {
        return;
    };
    if !temp.is_finite() {
        return;
    }
    let temp = temp.clamp(BRUSH_COLD_FLOOR, BRUSH_HEAT_CEILING);
    world.current.temperature[idx] = temp;
    world.next.temperature[idx] = temp;
}

pub(super) fn get_temp<R: RandomSource>(world: &WorldCore<R>, index: i32) -> f32 {
    match checked_index(world, index) {
        Some(idx) => world.current.temperature[idx],
        None => world.ambient_temperature,
    }
}

pub(super) fn apply_brush<R: RandomSource>(world: &mut WorldCore<R>, cx: i32, cy: i32, radius: i32, tool: Tool) {
    let radius = radius.max(1);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let x = cx + dx;
            let y = cy + dy;
            // Footprint is clipped to the grid, never wrapped to another row
            if !world.current.in_bounds(x, y) {
                continue;
            }
            let idx = world.current.index(x as u32, y as u32);
            brush_cell(world, idx, tool);
        }
    }
}

#[inline]
fn brush_cell<R: RandomSource>(world: &mut WorldCore<R>, idx: usize, tool: Tool) {
    let cell = world.current.types[idx];
    let index = idx as i32;

    match tool {
        Tool::Heat | Tool::Cool => {
            // Heat goes into matter, not air
            if cell == EL_EMPTY {
                return;
            }
            let change = BRUSH_HEAT_STEP / thermal_resistance(lookup(cell).state);
            let t = world.current.temperature[idx];
            let t = if tool == Tool::Heat {
                (t + change).min(BRUSH_HEAT_CEILING)
            } else {
                (t - change).max(BRUSH_COLD_FLOOR)
            };
            set_temp(world, index, t);
        }
        Tool::Paint(element) => {
            // Walls survive everything except more wall and the eraser
            if cell == EL_WALL && element != EL_WALL && element != EL_EMPTY {
                return;
            }
            set_cell(world, index, element);
        }
    }
}

pub(super) fn interact<R: RandomSource>(world: &mut WorldCore<R>, index: i32, neighbor: i32) -> bool {
    let (Some(me), Some(other)) = (checked_index(world, index), checked_index(world, neighbor)) else {
        return false;
    };
    let ambient = world.ambient_temperature;
    let mut frame = Frame::resume(&mut world.current, &mut world.next, ambient);
    reactions::interact(&mut frame, &mut world.rng, me, other)
}
