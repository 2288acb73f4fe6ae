//! Domain layer: pure tree logic, no I/O.

pub mod errors;
pub mod proof;
pub mod tree;
pub mod zeros;
