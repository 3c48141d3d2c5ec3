//! Domain - material definitions and their UI description

pub mod elements;
pub mod manifest;
