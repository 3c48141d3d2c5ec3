use crate::core::grid::Frame;
use crate::core::random::RandomSource;
use crate::elements::{state_of, ElementState, EL_EMPTY};

use super::{scans_left_to_right, BehaviorRegistry, UpdateContext};

/// Both movement passes: settle (bottom-up), then gases (top-down)
pub fn resolve_movement<R: RandomSource>(frame: &mut Frame, rng: &mut R) {
    let registry = BehaviorRegistry::new();
    run_settle_pass(frame, rng, &registry);
    run_gas_pass(frame, rng, &registry);
}

/// Pass A: powders and liquids, bottom row first
pub fn run_settle_pass<R: RandomSource>(frame: &mut Frame, rng: &mut R, registry: &BehaviorRegistry) {
    for y in (0..frame.height()).rev() {
        scan_row(frame, rng, registry, y, |state| {
            matches!(state, ElementState::Powder | ElementState::Liquid)
        });
    }
}

/// Pass B: gases, top row first
pub fn run_gas_pass<R: RandomSource>(frame: &mut Frame, rng: &mut R, registry: &BehaviorRegistry) {
    for y in 0..frame.height() {
        scan_row(frame, rng, registry, y, |state| state == ElementState::Gas);
    }
}

#[inline]
fn scan_row<R: RandomSource>(
    frame: &mut Frame,
    rng: &mut R,
    registry: &BehaviorRegistry,
    y: u32,
    accepts: impl Fn(ElementState) -> bool,
) {
    let width = frame.width();
    let left_to_right = scans_left_to_right(y);

    for i in 0..width {
        let x = if left_to_right { i } else { width - 1 - i };
        let idx = frame.index(x, y);

        // Read at visit time: reactions earlier in the pass may have rewritten it
        let element = frame.cur_type(idx);
        if element == EL_EMPTY {
            continue;
        }
        let state = state_of(element);
        if !accepts(state) {
            continue;
        }

        let mut ctx = UpdateContext {
            frame: &mut *frame,
            rng: &mut *rng,
            x,
            y,
            idx,
            left_to_right,
        };
        registry.update(state, &mut ctx);
    }
}
