//! Systems - per-frame rules applied through a `Frame`
//!
//! - temperature/ - heat exchange, cooling, phase changes
//! - behaviors/   - movement per state class
//! - reactions    - pairwise chemistry

pub mod behaviors;
pub mod reactions;
pub mod temperature;
