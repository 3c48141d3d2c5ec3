use crate::core::grid::{clamp_finite, Frame};
use crate::core::random::RandomSource;
use crate::elements::{is_gas, lookup, ElementDef, ElementState, EL_FIRE};

use super::phase_changes::check_phase_change;
use super::{TEMP_MAX, TEMP_MIN};

const FIRE_TEMP_BASE: f32 = 2200.0;
const FIRE_TEMP_SPREAD: i32 = 300;

// Exchange rate tiers
const RATE_GAS_GAS: f32 = 0.25;
const RATE_GAS_MOVABLE: f32 = 0.15;
const RATE_CONDUCTIVE: f32 = 0.05;

const RADIATION_THRESHOLD: f32 = 800.0;
const RADIATION_BONUS: f32 = 0.1;

/// Gas loses heat convectively, everything else at half rate
const GAS_COOLING_FACTOR: f32 = 1.0;
const DENSE_COOLING_FACTOR: f32 = 0.5;

/// Thermal pass for the whole grid.
///
/// Runs in two sweeps: first every cell pulls heat from its warmer
/// neighbours, then every cell cools toward ambient, checks phase changes
/// and clamps. Splitting the sweeps keeps the cooling step working on the
/// fully accumulated exchange regardless of visitation order.
pub fn process_temperature_grid<R: RandomSource>(frame: &mut Frame, rng: &mut R) {
    let size = frame.size();

    for idx in 0..size {
        exchange_heat(frame, idx, rng);
    }

    for idx in 0..size {
        settle_cell(frame, idx, rng);
    }
}

/// conductivity × rate for heat flowing from `other` into `me`
#[inline]
pub fn exchange_coefficient(me: &ElementDef, other: &ElementDef, diff: f32) -> f32 {
    let me_gas = me.state == ElementState::Gas;
    let other_gas = other.state == ElementState::Gas;
    let me_static = me.state == ElementState::Static;
    let other_static = other.state == ElementState::Static;

    let (conductivity, mut rate) = if me_gas && other_gas {
        (me.heat_conductivity.max(other.heat_conductivity), RATE_GAS_GAS)
    } else if (me_gas && !other_static) || (other_gas && !me_static) {
        (me.heat_conductivity.max(other.heat_conductivity), RATE_GAS_MOVABLE)
    } else {
        ((me.heat_conductivity + other.heat_conductivity) * 0.5, RATE_CONDUCTIVE)
    };

    if !me_static && !other_static && diff > RADIATION_THRESHOLD {
        rate += RADIATION_BONUS;
    }

    conductivity * rate
}

#[inline]
fn exchange_heat<R: RandomSource>(frame: &mut Frame, idx: usize, rng: &mut R) {
    let element = frame.cur_type(idx);
    let my_def = lookup(element);
    let mut my_temp = frame.cur_temp(idx);

    if element == EL_FIRE {
        my_temp = FIRE_TEMP_BASE + rng.range_inclusive(0, FIRE_TEMP_SPREAD) as f32;
        frame.set_next_temp(idx, my_temp);
    }

    for n in frame.neighbors4(idx).into_iter().flatten() {
        let n_temp = frame.cur_temp(n);
        // Only pull from warmer neighbours; the warmer side does the pushing
        if n_temp <= my_temp {
            continue;
        }

        let n_type = frame.cur_type(n);
        let diff = n_temp - my_temp;
        let transfer = diff * exchange_coefficient(my_def, lookup(n_type), diff);

        frame.add_next_temp(idx, transfer);

        // Fire does not burn out
        if n_type != EL_FIRE {
            frame.add_next_temp(n, -transfer * 0.5);
        }
    }
}

#[inline]
fn settle_cell<R: RandomSource>(frame: &mut Frame, idx: usize, rng: &mut R) {
    let element = frame.cur_type(idx);
    let def = lookup(element);
    let ambient = frame.ambient();

    let factor = if is_gas(element) {
        GAS_COOLING_FACTOR
    } else {
        DENSE_COOLING_FACTOR
    };
    let t = frame.next_temp(idx);
    frame.set_next_temp(idx, t - (t - ambient) * def.cooling_rate * factor);

    check_phase_change(frame, idx, rng);

    let t = frame.next_temp(idx);
    frame.set_next_temp(idx, clamp_finite(t, TEMP_MIN, TEMP_MAX, ambient));
}
