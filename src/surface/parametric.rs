//! The Möbius parametric map and its partial derivatives.
//!
//! ```text
//! x(u, v) = (R + v·cos(u/2))·cos(u)
//! y(u, v) = (R + v·cos(u/2))·sin(u)
//! z(u, v) = v·sin(u/2)
//! ```
//!
//! with `u ∈ [0, 2π]` around the loop and `v` across the strip. The half-angle
//! `u/2` is the half-twist: `(u, v)` and `(u + 2π, -v)` land on the same point,
//! which is what joins the two parametric boundaries into a single edge.

use nalgebra::Vector3;

/// Evaluate the surface at `(u, v)`.
pub fn mobius_point(radius: f64, u: f64, v: f64) -> Vector3<f64> {
    let (sin_half, cos_half) = (u / 2.0).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let r = radius + v * cos_half;
    Vector3::new(r * cos_u, r * sin_u, v * sin_half)
}

/// Closed-form tangent vectors `(∂/∂u, ∂/∂v)` at `(u, v)`.
pub fn mobius_partials(radius: f64, u: f64, v: f64) -> (Vector3<f64>, Vector3<f64>) {
    let (sin_half, cos_half) = (u / 2.0).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let r = radius + v * cos_half;
    let dr_du = -0.5 * v * sin_half;

    let du = Vector3::new(
        dr_du * cos_u - r * sin_u,
        dr_du * sin_u + r * cos_u,
        0.5 * v * cos_half,
    );
    let dv = Vector3::new(cos_half * cos_u, cos_half * sin_u, sin_half);
    (du, dv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn midline_is_a_circle_of_radius_r() {
        for i in 0..16 {
            let u = 2.0 * PI * i as f64 / 16.0;
            let p = mobius_point(3.0, u, 0.0);
            assert!((p.xy().norm() - 3.0).abs() < 1e-12);
            assert!(p.z.abs() < 1e-12);
        }
    }

    #[test]
    fn half_twist_identifies_opposite_sides() {
        for &u in &[0.0, 0.7, 2.0, 4.1] {
            let a = mobius_point(5.0, u, 0.8);
            let b = mobius_point(5.0, u + 2.0 * PI, -0.8);
            assert!((a - b).norm() < 1e-12, "u={u}: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn partials_match_central_differences() {
        let (r, u, v) = (5.0, 1.3, 0.4);
        let h = 1e-6;
        let (pu, pv) = mobius_partials(r, u, v);
        let nu = (mobius_point(r, u + h, v) - mobius_point(r, u - h, v)) / (2.0 * h);
        let nv = (mobius_point(r, u, v + h) - mobius_point(r, u, v - h)) / (2.0 * h);
        assert!((pu - nu).norm() < 1e-6, "du {pu:?} vs {nu:?}");
        assert!((pv - nv).norm() < 1e-6, "dv {pv:?} vs {nv:?}");
    }

    #[test]
    fn v_tangent_is_unit_length() {
        for &u in &[0.0, 1.0, 3.0, 5.5] {
            let (_, pv) = mobius_partials(2.0, u, 0.3);
            assert!((pv.norm() - 1.0).abs() < 1e-12);
        }
    }
}
