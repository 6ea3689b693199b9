//! Numerical estimators over a sampled strip.
//!
//! - surface area from the cross product of tangent vectors (`area`)
//! - boundary length from chord sums (`edge`)
//! - both estimators across a resolution ladder (`convergence`)
//!
//! All of them are pure functions of an immutable [`crate::surface::MobiusStrip`].

pub mod area;
pub mod convergence;
pub mod edge;

pub use area::*;
pub use convergence::*;
pub use edge::*;

use crate::domain::{DerivativeMethod, Estimates};
use crate::surface::MobiusStrip;

/// Run both estimators.
pub fn estimate(strip: &MobiusStrip, method: DerivativeMethod) -> Estimates {
    Estimates {
        surface_area: surface_area(strip, method),
        edge_length: edge_length(strip),
        method,
    }
}
