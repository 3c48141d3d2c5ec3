//! Behaviors - movement rules per physical state class
//!
//! SOLID: Single Responsibility - each behavior handles one state class
//!
//! Movement runs in two passes over a `Frame`:
//! - Pass A, rows bottom to top: powders and liquids
//! - Pass B, rows top to bottom: gases
//!
//! Within a row the horizontal direction alternates by parity (even rows
//! left to right, odd rows right to left). A particle only moves into a cell
//! that is empty in both buffers, so nothing moves twice or lands on a cell
//! another particle already took this frame.

mod powder;
mod liquid;
mod gas;
mod scan;

pub use powder::PowderBehavior;
pub use liquid::LiquidBehavior;
pub use gas::GasBehavior;
pub use scan::{resolve_movement, run_gas_pass, run_settle_pass};

use crate::core::grid::Frame;
use crate::core::random::RandomSource;
use crate::elements::ElementState;

/// Update context passed to behaviors: one cell, one frame
pub struct UpdateContext<'a, 'f, R> {
    pub frame: &'a mut Frame<'f>,
    pub rng: &'a mut R,
    pub x: u32,
    pub y: u32,
    pub idx: usize,
    /// Horizontal scan direction of this row
    pub left_to_right: bool,
}

impl<'a, 'f, R: RandomSource> UpdateContext<'a, 'f, R> {
    /// Index of the cell at (dx, dy) from this one, if inside the grid
    #[inline]
    pub fn target(&self, dx: i32, dy: i32) -> Option<usize> {
        self.frame.offset(self.x, self.y, dx, dy)
    }

    /// Like `target`, but only if the cell is empty in both buffers
    #[inline]
    pub fn free_target(&self, dx: i32, dy: i32) -> Option<usize> {
        self.target(dx, dy).filter(|&t| self.frame.is_free(t))
    }

    /// First free diagonal in this row's scan order, `dy` rows away
    #[inline]
    pub fn free_diagonal(&self, dy: i32) -> Option<usize> {
        diagonal_order(self.left_to_right)
            .into_iter()
            .find_map(|dx| self.free_target(dx, dy))
    }

    /// Move this particle into `to`
    #[inline]
    pub fn move_to(&mut self, to: usize) -> bool {
        self.frame.transplant(self.idx, to);
        true
    }
}

/// Behavior trait - each state class implements this.
/// Returns true if the particle moved.
pub trait Behavior {
    fn update<R: RandomSource>(&self, ctx: &mut UpdateContext<'_, '_, R>) -> bool;
}

/// Even rows scan left to right, odd rows right to left
#[inline]
pub fn scans_left_to_right(y: u32) -> bool {
    y % 2 == 0
}

/// Diagonal x-steps in the order a row scanned this way tries them
#[inline]
pub fn diagonal_order(left_to_right: bool) -> [i32; 2] {
    if left_to_right { [-1, 1] } else { [1, -1] }
}

/// Behavior registry - dispatch by state class
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
        }
    }

    /// Dispatch to the behavior for `state`; static cells never move
    pub fn update<R: RandomSource>(&self, state: ElementState, ctx: &mut UpdateContext<'_, '_, R>) -> bool {
        match state {
            ElementState::Powder => self.powder.update(ctx),
            ElementState::Liquid => self.liquid.update(ctx),
            ElementState::Gas => self.gas.update(ctx),
            ElementState::Static => false,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::grid::{CellBuffers, Frame};
    use crate::core::random::RandomSource;
    use crate::elements::ElementId;

    /// Every roll comes up zero: all odds succeed, `direction()` is -1
    pub struct Lucky;
    impl RandomSource for Lucky {
        fn next_u32(&mut self) -> u32 { 0 }
    }

    /// Every roll is 1: no probabilistic event fires, `direction()` is +1
    pub struct Unlucky;
    impl RandomSource for Unlucky {
        fn next_u32(&mut self) -> u32 { 1 }
    }

    pub fn grid(w: u32, h: u32, cells: &[(u32, u32, ElementId)]) -> CellBuffers {
        let mut buf = CellBuffers::new(w, h, 22.0);
        for &(x, y, el) in cells {
            let idx = buf.index(x, y);
            buf.place(idx, el);
        }
        buf
    }

    /// Run both movement passes once and commit
    pub fn step<R: RandomSource>(cur: &mut CellBuffers, rng: &mut R) -> u32 {
        let mut next = cur.clone();
        let mut frame = Frame::begin(cur, &mut next, 22.0);
        super::resolve_movement(&mut frame, rng);
        let moves = frame.moves;
        frame.commit();
        moves
    }
}
