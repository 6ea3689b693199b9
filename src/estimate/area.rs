//! Surface area by integrating the area element over the parameter domain.
//!
//! For a parametric surface `P(u, v)` the area element is `|P_u × P_v| du dv`.
//! We evaluate the cross-product magnitude at every grid node and sum:
//!
//! ```text
//! A ≈ Σ_{r,c} |P_u(r, c) × P_v(r, c)| · du · |dv|
//! ```
//!
//! This is an approximation, not an analytic result. Every node carries full
//! weight (edge nodes included), so the sum slightly over-counts at coarse
//! resolutions; the estimate settles as `n` grows.

use nalgebra::{DMatrix, Vector3};

use crate::domain::DerivativeMethod;
use crate::math::{gradient, stable_norm, Axis};
use crate::surface::{mobius_partials, MobiusStrip};

/// Approximate the total surface area of `strip`.
pub fn surface_area(strip: &MobiusStrip, method: DerivativeMethod) -> f64 {
    let du = strip.du();
    let dv = strip.dv();

    let element_sum = match method {
        DerivativeMethod::FiniteDifference => finite_difference_element_sum(strip, du, dv),
        DerivativeMethod::Analytic => analytic_element_sum(strip),
    };

    element_sum * du * dv.abs()
}

/// Local area-scaling factor at every node, from finite-difference tangents.
pub fn area_elements(strip: &MobiusStrip, du: f64, dv: f64) -> DMatrix<f64> {
    let (x, y, z) = (strip.x(), strip.y(), strip.z());

    let xu = gradient(x, du, Axis::Cols);
    let yu = gradient(y, du, Axis::Cols);
    let zu = gradient(z, du, Axis::Cols);

    let xv = gradient(x, dv, Axis::Rows);
    let yv = gradient(y, dv, Axis::Rows);
    let zv = gradient(z, dv, Axis::Rows);

    let (rows, cols) = x.shape();
    DMatrix::from_fn(rows, cols, |r, c| {
        let tu = Vector3::new(xu[(r, c)], yu[(r, c)], zu[(r, c)]);
        let tv = Vector3::new(xv[(r, c)], yv[(r, c)], zv[(r, c)]);
        stable_norm(&tu.cross(&tv))
    })
}

fn finite_difference_element_sum(strip: &MobiusStrip, du: f64, dv: f64) -> f64 {
    area_elements(strip, du, dv).sum()
}

fn analytic_element_sum(strip: &MobiusStrip) -> f64 {
    let radius = strip.params().radius;
    strip
        .u_grid()
        .iter()
        .zip(strip.v_grid().iter())
        .map(|(&u, &v)| {
            let (pu, pv) = mobius_partials(radius, u, v);
            stable_norm(&pu.cross(&pv))
        })
        .sum()
}
