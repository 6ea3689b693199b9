//! Mathematical utilities: parameter grids, finite-difference gradients and
//! an overflow-safe vector length.

pub mod diff;
pub mod grid;
pub mod norm;

pub use diff::*;
pub use grid::*;
pub use norm::*;
