//! Möbius strip surface generation.
//!
//! The parametric map is kept as small, pure functions (`parametric`) so the
//! sampled model (`strip`) and the analytic estimator can share it.

pub mod parametric;
pub mod strip;

pub use parametric::*;
pub use strip::*;
