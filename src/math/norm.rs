//! Euclidean length that survives very large (or very small) components.

use nalgebra::Vector3;

/// `|v|` computed on `v / max|v_i|`, so squaring cannot overflow to infinity.
///
/// Returns the largest component magnitude unchanged when it is zero,
/// infinite, or NaN.
pub fn stable_norm(v: &Vector3<f64>) -> f64 {
    let scale = v.amax();
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    (v / scale).norm() * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_plain_norm_in_ordinary_range() {
        let v = Vector3::new(1.5, -2.0, 0.25);
        assert!((stable_norm(&v) - v.norm()).abs() < 1e-15);
        assert_eq!(stable_norm(&Vector3::zeros()), 0.0);
    }

    #[test]
    fn huge_components_stay_finite() {
        let v: Vector3<f64> = Vector3::new(3e200, -4e200, 0.0);
        assert!(v.norm().is_infinite());
        let n = stable_norm(&v);
        assert!((n / 5e200 - 1.0).abs() < 1e-14, "n={n}");
    }

    #[test]
    fn tiny_components_do_not_underflow() {
        let v = Vector3::new(3e-200, 0.0, 4e-200);
        let n = stable_norm(&v);
        assert!((n / 5e-200 - 1.0).abs() < 1e-14, "n={n}");
    }

    #[test]
    fn infinity_propagates() {
        let v = Vector3::new(f64::INFINITY, 1.0, 0.0);
        assert_eq!(stable_norm(&v), f64::INFINITY);
    }
}
