//! LiquidBehavior - fall, slide, then flow sideways
//!
//! A liquid that cannot go down picks a random side to flow to and, in the
//! same visit, runs the reaction table against its four neighbours. The two
//! are independent except that a liquid rewritten by its own reaction stays
//! where it is.

use super::{Behavior, UpdateContext};
use crate::core::random::RandomSource;
use crate::systems::reactions::interact;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Below, left, right, above
    #[inline]
    fn reaction_neighbors<R: RandomSource>(&self, ctx: &UpdateContext<'_, '_, R>) -> [Option<usize>; 4] {
        [ctx.target(0, 1), ctx.target(-1, 0), ctx.target(1, 0), ctx.target(0, -1)]
    }
}

impl Behavior for LiquidBehavior {
    fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<'_, '_, R>) -> bool {
        if let Some(to) = ctx.free_target(0, 1).or_else(|| ctx.free_diagonal(1)) {
            return ctx.move_to(to);
        }

        let element = ctx.frame.cur_type(ctx.idx);
        let dir = ctx.rng.direction();
        let side = ctx.free_target(dir, 0);

        for n in self.reaction_neighbors(ctx).into_iter().flatten() {
            interact(ctx.frame, ctx.rng, ctx.idx, n);
        }

        if ctx.frame.cur_type(ctx.idx) != element {
            return false;
        }

        match side {
            Some(to) => ctx.move_to(to),
            None => false,
        }
    }
}
