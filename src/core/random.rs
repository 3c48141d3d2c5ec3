//! Random source for the simulation
//!
//! Every stochastic rule (phase changes, reactions, flow direction, fire
//! spread, smoke dispersal) draws from a `RandomSource` owned by the world,
//! so a fixed seed reproduces a run exactly and tests can script outcomes.

/// Seed used when the caller passes 0 (xorshift would stay at 0 forever).
pub const DEFAULT_SEED: u32 = 12345;

pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `lo..=hi`.
    #[inline]
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u32 + 1;
        lo + (self.next_u32() % span) as i32
    }

    /// True with probability `1/n`. `n <= 1` always succeeds.
    #[inline]
    fn one_in(&mut self, n: u32) -> bool {
        n <= 1 || self.next_u32() % n == 0
    }

    #[inline]
    fn coin(&mut self) -> bool {
        self.next_u32() & 1 == 0
    }

    /// -1 or +1, -1 when the coin lands.
    #[inline]
    fn direction(&mut self) -> i32 {
        if self.coin() { -1 } else { 1 }
    }
}

/// Xorshift32 generator
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}
