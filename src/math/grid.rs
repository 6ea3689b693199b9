//! Parameter sampling: evenly spaced sequences and their outer-product grids.

use nalgebra::{DMatrix, DVector};

/// `n` evenly spaced values over `[start, end]`, both endpoints included.
///
/// The last sample is set to `end` exactly so that closed parameter ranges
/// (e.g. `[0, 2π]`) meet their endpoint without accumulated rounding.
pub fn linspace(start: f64, end: f64, n: usize) -> DVector<f64> {
    match n {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, start),
        _ => {
            let step = (end - start) / (n as f64 - 1.0);
            DVector::from_fn(n, |i, _| {
                if i == n - 1 {
                    end
                } else {
                    start + step * i as f64
                }
            })
        }
    }
}

/// Outer-product grids: `U[(r, c)] = u[c]`, `V[(r, c)] = v[r]`.
///
/// Columns follow `u`, rows follow `v`.
pub fn meshgrid(u: &DVector<f64>, v: &DVector<f64>) -> (DMatrix<f64>, DMatrix<f64>) {
    let rows = v.len();
    let cols = u.len();
    let uu = DMatrix::from_fn(rows, cols, |_, c| u[c]);
    let vv = DMatrix::from_fn(rows, cols, |r, _| v[r]);
    (uu, vv)
}
