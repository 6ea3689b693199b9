//! Boundary length as the sum of chord lengths along both boundary rows.
//!
//! With the half-twist the two rows are one physical edge traversed in two
//! halves, so the sum is the length of the strip's single boundary curve.

use nalgebra::Vector3;

use crate::domain::Boundary;
use crate::math::stable_norm;
use crate::surface::MobiusStrip;

/// Approximate combined length of row 0 and row `n - 1`.
pub fn edge_length(strip: &MobiusStrip) -> f64 {
    Boundary::BOTH
        .iter()
        .map(|&which| polyline_length(&strip.boundary(which)))
        .sum()
}

/// Piecewise-linear arc length of an ordered point sequence.
pub fn polyline_length(points: &[Vector3<f64>]) -> f64 {
    points.windows(2).map(|pair| stable_norm(&(pair[1] - pair[0]))).sum()
}
