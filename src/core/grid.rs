//! Grid - Structure of Arrays (SoA) cell storage
//!
//! Instead of: Vec<Cell { material, temp }>
//! We have:    types[], temperature[]  // linear memory, one array per property
//!
//! The world keeps two `CellBuffers` (current and next). All frame logic goes
//! through `Frame`, which reads the current pair and writes the next pair.

use crate::elements::{lookup, ElementId, EL_EMPTY};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod frame;
pub use frame::Frame;

/// SoA buffers - one material array, one temperature array
#[derive(Clone, Debug, PartialEq)]
pub struct CellBuffers {
    width: u32,
    height: u32,
    size: usize,

    pub types: Vec<ElementId>,  // Material id (0 = empty)
    pub temperature: Vec<f32>,  // Temperature in °C
}

impl CellBuffers {
    pub fn new(width: u32, height: u32, ambient: f32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            types: vec![EL_EMPTY; size],
            temperature: vec![ambient; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((idx % w) as u32, (idx / w) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Boundary index check (row-major, signed so callers can pass raw input)
    #[inline]
    pub fn is_valid(&self, index: i32) -> bool {
        index >= 0 && (index as usize) < self.size
    }

    /// Place a material at its base temperature
    #[inline]
    pub fn place(&mut self, idx: usize, element: ElementId) {
        self.types[idx] = element;
        self.temperature[idx] = lookup(element).base_temp;
    }

    /// Every cell back to empty at `ambient`, no reallocation
    pub fn fill(&mut self, ambient: f32) {
        #[cfg(feature = "parallel")]
        {
            self.types.par_iter_mut().for_each(|t| *t = EL_EMPTY);
            self.temperature.par_iter_mut().for_each(|t| *t = ambient);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.types.fill(EL_EMPTY);
            self.temperature.fill(ambient);
        }
    }

    /// Overwrite with `other` (same dimensions)
    #[inline]
    pub fn copy_from(&mut self, other: &CellBuffers) {
        debug_assert_eq!(self.size, other.size, "copy_from: buffer sizes differ");
        self.types.copy_from_slice(&other.types);
        self.temperature.copy_from_slice(&other.temperature);
    }

    /// Clamp every temperature into `[min, max]`; NaN and infinities become `fallback`
    pub fn clamp_temperatures(&mut self, min: f32, max: f32, fallback: f32) {
        #[cfg(feature = "parallel")]
        {
            self.temperature
                .par_iter_mut()
                .for_each(|t| *t = clamp_finite(*t, min, max, fallback));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for t in self.temperature.iter_mut() {
                *t = clamp_finite(*t, min, max, fallback);
            }
        }
    }

    pub fn count(&self, element: ElementId) -> usize {
        self.types.iter().filter(|&&t| t == element).count()
    }

    pub fn non_empty(&self) -> usize {
        self.types.iter().filter(|&&t| t != EL_EMPTY).count()
    }
}

/// `f32::clamp` passes NaN through, so non-finite values are replaced first
#[inline]
pub fn clamp_finite(t: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if t.is_finite() {
        t.clamp(min, max)
    } else {
        fallback.clamp(min, max)
    }
}
