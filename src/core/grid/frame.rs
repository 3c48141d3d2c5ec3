use super::CellBuffers;
use crate::elements::{lookup, ElementId, EL_EMPTY};

/// One frame's view of the double buffer.
///
/// Reads go to `current`, writes go to `next`. A destination is claimable
/// only while it is empty in both, which is what keeps two particles from
/// landing on the same cell in one frame. `rewrite` is the one path that
/// writes through to `current` as well; reactions use it so cells scanned
/// later in the same pass see the converted material.
pub struct Frame<'a> {
    current: &'a mut CellBuffers,
    next: &'a mut CellBuffers,
    ambient: f32,
    pub moves: u32,
    pub reactions: u32,
    pub phase_changes: u32,
}

impl<'a> Frame<'a> {
    /// Start a frame: next := current
    pub fn begin(current: &'a mut CellBuffers, next: &'a mut CellBuffers, ambient: f32) -> Self {
        next.copy_from(current);
        Self::resume(current, next, ambient)
    }

    /// Wrap buffers that are already in sync (between frames)
    pub fn resume(current: &'a mut CellBuffers, next: &'a mut CellBuffers, ambient: f32) -> Self {
        Self {
            current,
            next,
            ambient,
            moves: 0,
            reactions: 0,
            phase_changes: 0,
        }
    }

    /// current := next
    pub fn commit(self) {
        self.current.copy_from(self.next);
    }

    /// Clamp the next temperatures (non-finite ones reset to ambient), then current := next
    pub fn commit_clamped(self, min: f32, max: f32) {
        self.next.clamp_temperatures(min, max, self.ambient);
        self.current.copy_from(self.next);
    }

    // === Geometry ===
    #[inline]
    pub fn width(&self) -> u32 { self.current.width() }

    #[inline]
    pub fn height(&self) -> u32 { self.current.height() }

    #[inline]
    pub fn size(&self) -> usize { self.current.size() }

    #[inline]
    pub fn ambient(&self) -> f32 { self.ambient }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize { self.current.index(x, y) }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) { self.current.coords(idx) }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool { self.current.in_bounds(x, y) }

    /// Index of (x+dx, y+dy) if it lies inside the grid
    #[inline]
    pub fn offset(&self, x: u32, y: u32, dx: i32, dy: i32) -> Option<usize> {
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;
        if self.in_bounds(nx, ny) {
            Some(self.index(nx as u32, ny as u32))
        } else {
            None
        }
    }

    /// Orthogonal neighbours in left, right, up, down order; no row wrap-around
    #[inline]
    pub fn neighbors4(&self, idx: usize) -> [Option<usize>; 4] {
        let (x, y) = self.coords(idx);
        [
            self.offset(x, y, -1, 0),
            self.offset(x, y, 1, 0),
            self.offset(x, y, 0, -1),
            self.offset(x, y, 0, 1),
        ]
    }

    // === Reads ===
    #[inline]
    pub fn cur_type(&self, idx: usize) -> ElementId { *fast!(self.current.types, [idx]) }

    #[inline]
    pub fn cur_temp(&self, idx: usize) -> f32 { *fast!(self.current.temperature, [idx]) }

    #[inline]
    pub fn next_type(&self, idx: usize) -> ElementId { *fast!(self.next.types, [idx]) }

    #[inline]
    pub fn next_temp(&self, idx: usize) -> f32 { *fast!(self.next.temperature, [idx]) }

    /// Empty in both buffers - the only cells a move may target
    #[inline]
    pub fn is_free(&self, idx: usize) -> bool {
        self.cur_type(idx) == EL_EMPTY && self.next_type(idx) == EL_EMPTY
    }

    /// Nothing has written a different material here this frame
    #[inline]
    pub fn is_unclaimed(&self, idx: usize) -> bool {
        self.cur_type(idx) == self.next_type(idx)
    }

    // === Next-buffer writes ===
    #[inline]
    pub fn set_next_temp(&mut self, idx: usize, t: f32) {
        fast!(self.next.temperature, [idx] = t);
    }

    #[inline]
    pub fn add_next_temp(&mut self, idx: usize, delta: f32) {
        let t = self.next_temp(idx) + delta;
        self.set_next_temp(idx, t);
    }

    /// Material change in the next buffer only, temperature given
    #[inline]
    pub fn set_next(&mut self, idx: usize, element: ElementId, temp: f32) {
        fast!(self.next.types, [idx] = element);
        fast!(self.next.temperature, [idx] = temp);
    }

    /// Origin cell after a particle leaves or vanishes
    #[inline]
    pub fn clear_next(&mut self, idx: usize) {
        let ambient = self.ambient;
        self.set_next(idx, EL_EMPTY, ambient);
    }

    /// Move the particle at `from` into the free cell `to`; heat travels with it
    #[inline]
    pub fn transplant(&mut self, from: usize, to: usize) {
        debug_assert!(self.is_free(to), "transplant: destination {} already claimed", to);
        let element = self.cur_type(from);
        let temp = self.next_temp(from);
        self.set_next(to, element, temp);
        self.clear_next(from);
        self.moves += 1;
    }

    /// Exchange two cells in the next buffer (material and temperature)
    #[inline]
    pub fn swap_next(&mut self, a: usize, b: usize) {
        self.next.types.swap(a, b);
        self.next.temperature.swap(a, b);
        self.moves += 1;
    }

    /// Place `element` at its base temperature in both buffers
    #[inline]
    pub fn rewrite(&mut self, idx: usize, element: ElementId) {
        self.current.place(idx, element);
        self.next.place(idx, element);
    }
}
