//! Resolution ladder: evaluate both estimators as the mesh is refined.
//!
//! Each rung builds an independent strip, so rungs are evaluated in parallel.
//! Deltas are filled afterwards in ladder order, which keeps the output
//! deterministic regardless of scheduling.

use rayon::prelude::*;

use crate::domain::{ConvergenceRow, DerivativeMethod, StripParams, MIN_RESOLUTION};
use crate::error::ModelError;
use crate::estimate::{edge_length, surface_area};
use crate::surface::MobiusStrip;

/// `levels` resolutions starting at `start` and doubling each step.
pub fn resolution_ladder(start: usize, levels: usize) -> Vec<usize> {
    let mut n = start.max(MIN_RESOLUTION);
    let mut out = Vec::with_capacity(levels);
    for _ in 0..levels {
        out.push(n);
        n = n.saturating_mul(2);
    }
    out
}

/// Run both estimators at every resolution (same radius and width as `base`).
pub fn convergence_study(
    base: &StripParams,
    resolutions: &[usize],
    method: DerivativeMethod,
) -> Result<Vec<ConvergenceRow>, ModelError> {
    let estimates: Vec<(usize, f64, f64)> = resolutions
        .par_iter()
        .map(|&n| -> Result<(usize, f64, f64), ModelError> {
            let strip = MobiusStrip::new(base.with_resolution(n))?;
            Ok((n, surface_area(&strip, method), edge_length(&strip)))
        })
        .collect::<Result<_, ModelError>>()?;

    let mut rows: Vec<ConvergenceRow> = Vec::with_capacity(estimates.len());
    for (n, area, edge) in estimates {
        let prev = rows.last();
        let row = ConvergenceRow {
            resolution: n,
            surface_area: area,
            edge_length: edge,
            area_delta: prev.map(|p| area - p.surface_area),
            edge_delta: prev.map(|p| edge - p.edge_length),
        };
        tracing::info!(
            "n={n}: area={area:.6} edge={edge:.6} (d_area={:?}, d_edge={:?})",
            row.area_delta,
            row.edge_delta
        );
        rows.push(row);
    }

    Ok(rows)
}
