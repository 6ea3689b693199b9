//! Finite-difference gradients on sampled grids.
//!
//! Second-order central differences in the interior, first-order one-sided
//! differences at the two ends of the differentiated axis:
//!
//! ```text
//! f'[0]   ≈ (f[1] - f[0]) / h
//! f'[i]   ≈ (f[i+1] - f[i-1]) / (2h)
//! f'[n-1] ≈ (f[n-1] - f[n-2]) / h
//! ```

use nalgebra::DMatrix;

/// Grid axis to differentiate along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Across rows (index `r` varies, `c` fixed).
    Rows,
    /// Across columns (index `c` varies, `r` fixed).
    Cols,
}

/// Partial derivative of `f` along `axis` with uniform spacing `step`.
///
/// An axis of length 1 or a zero step has no resolvable slope and yields zeros.
pub fn gradient(f: &DMatrix<f64>, step: f64, axis: Axis) -> DMatrix<f64> {
    let (rows, cols) = f.shape();
    let len = match axis {
        Axis::Rows => rows,
        Axis::Cols => cols,
    };
    if len < 2 || step == 0.0 {
        return DMatrix::zeros(rows, cols);
    }

    let at = |r: usize, c: usize, k: usize| match axis {
        Axis::Rows => f[(k, c)],
        Axis::Cols => f[(r, k)],
    };

    DMatrix::from_fn(rows, cols, |r, c| {
        let i = match axis {
            Axis::Rows => r,
            Axis::Cols => c,
        };
        if i == 0 {
            (at(r, c, 1) - at(r, c, 0)) / step
        } else if i == len - 1 {
            (at(r, c, len - 1) - at(r, c, len - 2)) / step
        } else {
            (at(r, c, i + 1) - at(r, c, i - 1)) / (2.0 * step)
        }
    })
}
