//! Zero-Cost Safety Macros
//!
//! Debug checks in dev, raw speed in release. The frame passes index the
//! cell buffers millions of times per second with indices that were already
//! validated against the grid dimensions, so the release build drops the
//! redundant bounds check.
//!
//! Usage:
//! ```rust
//! use thermosand_engine::fast;
//!
//! let idx = 2;
//!
//! let temps = vec![20.0f32, 21.0, 22.0, 23.0];
//! // Read: fast!(slice, [index])
//! let t = *fast!(temps, [idx]);
//! assert_eq!(t, 22.0);
//!
//! let mut types = vec![0u8; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(types, [idx] = 3);
//! assert_eq!(types[idx], 3);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
///
/// Only use with indices produced by `CellBuffers::index` or
/// `Frame::neighbors`, never with raw boundary input.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
