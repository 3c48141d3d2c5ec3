//! Chemical Reactions - pairwise neighbour rules
//!
//! A reaction is evaluated for one cell against one neighbour. Results are
//! applied with set-cell semantics: both buffers, base temperature of the
//! new material. A cell that something else already claimed in the next
//! buffer this frame is left alone.

use crate::core::grid::Frame;
use crate::core::random::RandomSource;
use crate::elements::{
    ElementId, EL_ACID, EL_ACIDIC_WATER, EL_EMPTY, EL_ICE, EL_LAVA, EL_SAND, EL_SMOKE,
    EL_STEAM, EL_STONE, EL_WALL, EL_WATER, EL_WOOD,
};

const DISSOLVE_ODDS: u32 = 21;
const CONDENSE_ODDS: u32 = 101;

#[inline]
fn is_dissolvable(element: ElementId) -> bool {
    matches!(element, EL_SAND | EL_WOOD | EL_STONE)
}

/// Try the rule table for `me` against `neighbor`. Returns true if anything changed.
pub fn interact<R: RandomSource>(frame: &mut Frame, rng: &mut R, me: usize, neighbor: usize) -> bool {
    if me >= frame.size() || neighbor >= frame.size() {
        return false;
    }

    let self_type = frame.cur_type(me);
    let other = frame.cur_type(neighbor);
    if other == EL_EMPTY || other == EL_WALL {
        return false;
    }

    let applied = match (self_type, other) {
        // Acid contaminates water
        (EL_ACID | EL_ACIDIC_WATER, EL_WATER) => {
            if frame.is_unclaimed(neighbor) {
                frame.rewrite(neighbor, EL_ACIDIC_WATER);
                true
            } else {
                false
            }
        }
        (EL_ACID, o) if is_dissolvable(o) => {
            if frame.is_unclaimed(me) && frame.is_unclaimed(neighbor) && rng.one_in(DISSOLVE_ODDS) {
                frame.rewrite(neighbor, EL_SMOKE);
                frame.rewrite(me, EL_EMPTY);
                true
            } else {
                false
            }
        }
        (EL_STEAM, EL_WATER | EL_ICE) => {
            if frame.is_unclaimed(me) && rng.one_in(CONDENSE_ODDS) {
                frame.rewrite(me, EL_WATER);
                true
            } else {
                false
            }
        }
        (EL_LAVA, EL_WATER) => {
            if frame.is_unclaimed(me) && frame.is_unclaimed(neighbor) {
                frame.rewrite(me, EL_STONE);
                frame.rewrite(neighbor, EL_STEAM);
                true
            } else {
                false
            }
        }
        _ => false,
    };

    if applied {
        frame.reactions += 1;
    }
    applied
}
