//! PowderBehavior - Physics for powder particles (sand, gunpowder)
//!
//! Fall straight down, sink through a liquid below by swapping with it,
//! otherwise roll down a diagonal.

use super::{Behavior, UpdateContext};
use crate::core::random::RandomSource;
use crate::elements::is_liquid;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Liquid directly below that nothing has touched this frame
    #[inline]
    fn sinkable_below<R: RandomSource>(&self, ctx: &UpdateContext<'_, '_, R>) -> Option<usize> {
        ctx.target(0, 1).filter(|&below| {
            is_liquid(ctx.frame.cur_type(below)) && ctx.frame.is_unclaimed(below)
        })
    }
}

impl Behavior for PowderBehavior {
    fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<'_, '_, R>) -> bool {
        if let Some(below) = ctx.free_target(0, 1) {
            return ctx.move_to(below);
        }

        // Heavier than any liquid: trade places, heat travels with each
        if let Some(below) = self.sinkable_below(ctx) {
            ctx.frame.swap_next(ctx.idx, below);
            return true;
        }

        match ctx.free_diagonal(1) {
            Some(to) => ctx.move_to(to),
            None => false,
        }
    }
}
