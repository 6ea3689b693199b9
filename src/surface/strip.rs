//! The sampled strip: parameter grid plus coordinate grid.

use std::f64::consts::TAU;

use nalgebra::{DMatrix, DVector, Vector3};

use crate::domain::{Boundary, DerivativeMethod, StripParams};
use crate::error::ModelError;
use crate::math::{linspace, meshgrid};
use crate::surface::parametric::mobius_point;

/// Borrowed coordinate grids, the only thing a renderer needs.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceGrids<'a> {
    pub x: &'a DMatrix<f64>,
    pub y: &'a DMatrix<f64>,
    pub z: &'a DMatrix<f64>,
}

impl SurfaceGrids<'_> {
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Surface point at grid cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if the cell is outside the grids' shape.
    pub fn point(&self, row: usize, col: usize) -> Vector3<f64> {
        Vector3::new(self.x[(row, col)], self.y[(row, col)], self.z[(row, col)])
    }
}

/// A Möbius strip sampled on an `n × n` parameter mesh.
///
/// Rows follow `v` (row 0 is `v = -w/2`, row `n-1` is `v = +w/2`), columns
/// follow `u` over `[0, 2π]`. Everything is computed once in [`MobiusStrip::new`]
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: StripParams,
    u: DVector<f64>,
    v: DVector<f64>,
    u_grid: DMatrix<f64>,
    v_grid: DMatrix<f64>,
    x: DMatrix<f64>,
    y: DMatrix<f64>,
    z: DMatrix<f64>,
}

impl MobiusStrip {
    pub fn new(params: StripParams) -> Result<Self, ModelError> {
        params.validate()?;
        let n = params.resolution;
        let half = params.width / 2.0;

        let u = linspace(0.0, TAU, n);
        let v = linspace(-half, half, n);
        let (u_grid, v_grid) = meshgrid(&u, &v);

        let mut x = DMatrix::zeros(n, n);
        let mut y = DMatrix::zeros(n, n);
        let mut z = DMatrix::zeros(n, n);
        for c in 0..n {
            for r in 0..n {
                let p = mobius_point(params.radius, u_grid[(r, c)], v_grid[(r, c)]);
                x[(r, c)] = p.x;
                y[(r, c)] = p.y;
                z[(r, c)] = p.z;
            }
        }

        tracing::debug!(
            "built strip R={} w={} on a {n}x{n} mesh ({} points)",
            params.radius,
            params.width,
            n * n
        );

        Ok(Self {
            params,
            u,
            v,
            u_grid,
            v_grid,
            x,
            y,
            z,
        })
    }

    pub fn params(&self) -> &StripParams {
        &self.params
    }

    pub fn resolution(&self) -> usize {
        self.params.resolution
    }

    /// Spacing of the `u` samples: `2π / (n - 1)`.
    pub fn du(&self) -> f64 {
        TAU / (self.params.resolution as f64 - 1.0)
    }

    /// Spacing of the `v` samples: `w / (n - 1)` (negative for negative widths).
    pub fn dv(&self) -> f64 {
        self.params.width / (self.params.resolution as f64 - 1.0)
    }

    pub fn u(&self) -> &DVector<f64> {
        &self.u
    }

    pub fn v(&self) -> &DVector<f64> {
        &self.v
    }

    pub fn u_grid(&self) -> &DMatrix<f64> {
        &self.u_grid
    }

    pub fn v_grid(&self) -> &DMatrix<f64> {
        &self.v_grid
    }

    pub fn x(&self) -> &DMatrix<f64> {
        &self.x
    }

    pub fn y(&self) -> &DMatrix<f64> {
        &self.y
    }

    pub fn z(&self) -> &DMatrix<f64> {
        &self.z
    }

    pub fn grids(&self) -> SurfaceGrids<'_> {
        SurfaceGrids {
            x: &self.x,
            y: &self.y,
            z: &self.z,
        }
    }

    /// Surface point at grid cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if the cell is outside the `n × n` grid.
    pub fn point(&self, row: usize, col: usize) -> Vector3<f64> {
        self.grids().point(row, col)
    }

    /// The `n` points of one parametric boundary, in increasing `u`.
    pub fn boundary(&self, which: Boundary) -> Vec<Vector3<f64>> {
        let row = match which {
            Boundary::Lower => 0,
            Boundary::Upper => self.params.resolution - 1,
        };
        (0..self.params.resolution)
            .map(|c| self.point(row, c))
            .collect()
    }

    /// Approximate surface area using finite differences (see [`crate::estimate::surface_area`]).
    pub fn compute_surface_area(&self) -> f64 {
        crate::estimate::surface_area(self, DerivativeMethod::FiniteDifference)
    }

    /// Approximate combined length of both boundary rows (see [`crate::estimate::edge_length`]).
    pub fn compute_edge_length(&self) -> f64 {
        crate::estimate::edge_length(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(r: f64, w: f64, n: usize) -> MobiusStrip {
        MobiusStrip::new(StripParams::new(r, w, n)).unwrap()
    }

    #[test]
    fn grids_have_n_by_n_shape() {
        let s = strip(5.0, 2.0, 17);
        for m in [s.u_grid(), s.v_grid(), s.x(), s.y(), s.z()] {
            assert_eq!(m.shape(), (17, 17));
        }
        assert_eq!(s.u().len(), 17);
        assert_eq!(s.v().len(), 17);
    }

    #[test]
    fn boundary_rows_sit_at_the_width_extremes() {
        let s = strip(5.0, 2.0, 9);
        for c in 0..9 {
            assert_eq!(s.v_grid()[(0, c)], -1.0);
            assert_eq!(s.v_grid()[(8, c)], 1.0);
        }
        assert_eq!(s.u()[0], 0.0);
        assert_eq!(s.u()[8], TAU);
    }

    #[test]
    fn step_sizes_follow_resolution() {
        let s = strip(5.0, 2.0, 5);
        assert!((s.du() - TAU / 4.0).abs() < 1e-15);
        assert!((s.dv() - 0.5).abs() < 1e-15);
    }

    #[test]
    fn seam_joins_the_two_boundary_rows() {
        // (u=0, v=-w/2) must coincide with (u=2π, v=+w/2), and vice versa.
        for &n in &[2, 3, 50, 200] {
            let s = strip(5.0, 2.0, n);
            let last = n - 1;
            let a = s.point(0, 0);
            let b = s.point(last, last);
            assert!((a - b).norm() < 1e-12, "n={n}: {a:?} vs {b:?}");

            let c = s.point(last, 0);
            let d = s.point(0, last);
            assert!((c - d).norm() < 1e-12, "n={n}: {c:?} vs {d:?}");
        }
    }

    #[test]
    fn boundary_extracts_first_and_last_rows() {
        let s = strip(3.0, 1.0, 6);
        let lower = s.boundary(Boundary::Lower);
        let upper = s.boundary(Boundary::Upper);
        assert_eq!(lower.len(), 6);
        assert_eq!(lower[2], s.point(0, 2));
        assert_eq!(upper[4], s.point(5, 4));
    }

    #[test]
    fn invalid_resolution_is_a_configuration_error() {
        let err = MobiusStrip::new(StripParams::new(5.0, 2.0, 1)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfiguration(_)));
    }

    #[test]
    fn estimators_are_idempotent() {
        let s = strip(5.0, 2.0, 64);
        assert_eq!(s.compute_surface_area(), s.compute_surface_area());
        assert_eq!(s.compute_edge_length(), s.compute_edge_length());
    }
}
