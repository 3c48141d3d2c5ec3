//! Core - storage, the frame transaction and randomness
//!
//! `utils` comes first so the `fast!` macro is in scope for `grid`.

#[macro_use]
pub mod utils;
pub mod grid;
pub mod random;
