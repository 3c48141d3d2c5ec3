use crate::core::grid::Frame;
use crate::core::random::RandomSource;
use crate::elements::{lookup, EL_EMPTY, EL_FIRE, EL_WALL};

use super::IGNITION_TEMP;

/// 1-in-N odds per qualifying frame; randomness smooths the visual transition
const HIGH_CONVERT_ODDS: u32 = 11;
const LOW_CONVERT_ODDS: u32 = 51;

const IGNITED_TEMP_BASE: f32 = 800.0;
const IGNITED_TEMP_SPREAD: i32 = 200;

/// Temperature-driven conversion for one cell, using its next temperature.
///
/// Melting/boiling keeps the cell's heat; freezing/condensing puts the new
/// material at its base temperature. Ignition is rolled independently and
/// wins when both fire. Returns true if the material changed.
pub fn check_phase_change<R: RandomSource>(frame: &mut Frame, idx: usize, rng: &mut R) -> bool {
    let element = frame.cur_type(idx);
    if element == EL_EMPTY || element == EL_WALL {
        return false;
    }

    let def = lookup(element);
    let temp = frame.next_temp(idx);
    let mut changed = false;

    if let Some(to) = def.high_temp_convert.filter(|_| temp > def.high_temp) {
        if rng.one_in(HIGH_CONVERT_ODDS) {
            frame.set_next(idx, to, temp);
            changed = true;
        }
    } else if let Some(to) = def.low_temp_convert.filter(|_| temp < def.low_temp) {
        if rng.one_in(LOW_CONVERT_ODDS) {
            frame.set_next(idx, to, lookup(to).base_temp);
            changed = true;
        }
    }

    if def.flammability > 0.0 && temp > IGNITION_TEMP {
        let odds = (1000.0 * (1.0 - def.flammability)) as u32 + 1;
        if rng.one_in(odds) {
            let t = IGNITED_TEMP_BASE + rng.range_inclusive(0, IGNITED_TEMP_SPREAD) as f32;
            frame.set_next(idx, EL_FIRE, t);
            changed = true;
        }
    }

    if changed {
        frame.phase_changes += 1;
    }
    changed
}
