//! GasBehavior - rise, spread along ceilings, escape at the top
//!
//! Gases are inverted powders: up, then the up-diagonals, then sideways.
//! Anything that reaches row 0 leaves the world. Fire lights neighbouring
//! wood; smoke thins out on its own.

use super::{Behavior, UpdateContext};
use crate::core::random::RandomSource;
use crate::elements::{EL_FIRE, EL_SMOKE, EL_WOOD};

const IGNITE_ODDS: u32 = 21;
const IGNITED_WOOD_TEMP: f32 = 1200.0;
const SMOKE_DECAY_ODDS: u32 = 1001;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Per orthogonal wood neighbour, roll to set it alight in the next buffer
    fn ignite_wood<R: RandomSource>(&self, ctx: &mut UpdateContext<'_, '_, R>) {
        for n in ctx.frame.neighbors4(ctx.idx).into_iter().flatten() {
            if ctx.frame.cur_type(n) == EL_WOOD
                && ctx.frame.is_unclaimed(n)
                && ctx.rng.one_in(IGNITE_ODDS)
            {
                ctx.frame.set_next(n, EL_FIRE, IGNITED_WOOD_TEMP);
            }
        }
    }
}

impl Behavior for GasBehavior {
    fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<'_, '_, R>) -> bool {
        if ctx.y == 0 {
            ctx.frame.clear_next(ctx.idx);
            return false;
        }

        let mut target = ctx.free_target(0, -1).or_else(|| ctx.free_diagonal(-1));
        if target.is_none() {
            let dir = ctx.rng.direction();
            target = ctx.free_target(dir, 0);
        }

        let element = ctx.frame.cur_type(ctx.idx);
        if element == EL_FIRE {
            self.ignite_wood(ctx);
        }
        if element == EL_SMOKE && ctx.rng.one_in(SMOKE_DECAY_ODDS) {
            ctx.frame.clear_next(ctx.idx);
            return false;
        }

        match target {
            Some(to) => ctx.move_to(to),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{grid, step, Lucky, Unlucky};
    use crate::elements::{EL_EMPTY, EL_FIRE, EL_SMOKE, EL_STEAM, EL_WALL, EL_WOOD};

    #[test]
    fn escapes_from_the_top_row() {
        let mut cur = grid(2, 2, &[(0, 0, EL_STEAM)]);
        cur.temperature[0] = 400.0;
        step(&mut cur, &mut Unlucky);
        assert_eq!(cur.types[0], EL_EMPTY);
        assert_eq!(cur.temperature[0], 22.0);
    }

    #[test]
    fn rises_one_row() {
        let mut cur = grid(3, 3, &[(1, 2, EL_STEAM)]);
        assert_eq!(step(&mut cur, &mut Unlucky), 1);
        assert_eq!(cur.types[4], EL_STEAM);
        assert_eq!(cur.temperature[4], 150.0);
        assert_eq!(cur.types[7], EL_EMPTY);
    }

    #[test]
    fn spreads_under_a_ceiling() {
        let mut cur = grid(
            3,
            2,
            &[(1, 1, EL_STEAM), (0, 0, EL_WALL), (1, 0, EL_WALL), (2, 0, EL_WALL)],
        );
        step(&mut cur, &mut Unlucky);
        assert_eq!(cur.types[5], EL_STEAM);
    }

    #[test]
    fn smoke_can_thin_out_in_place() {
        let mut cur = grid(1, 2, &[(0, 1, EL_SMOKE)]);
        step(&mut cur, &mut Lucky);
        assert_eq!(cur.non_empty(), 0);

        let mut cur = grid(1, 2, &[(0, 1, EL_SMOKE)]);
        step(&mut cur, &mut Unlucky);
        assert_eq!(cur.types[0], EL_SMOKE);
    }

    #[test]
    fn fire_lights_adjacent_wood() {
        let mut cur = grid(2, 2, &[(0, 1, EL_FIRE), (1, 1, EL_WOOD)]);
        step(&mut cur, &mut Lucky);
        assert_eq!(cur.types, vec![EL_FIRE, EL_EMPTY, EL_EMPTY, EL_FIRE]);
        assert_eq!(cur.temperature[3], 1200.0);

        let mut cur = grid(2, 2, &[(0, 1, EL_FIRE), (1, 1, EL_WOOD)]);
        step(&mut cur, &mut Unlucky);
        assert_eq!(cur.types[3], EL_WOOD);
    }
}
