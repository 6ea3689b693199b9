//! Orthographic camera and screen fitting shared by the renderers.

use nalgebra::Vector3;

use crate::domain::ViewAngle;
use crate::surface::SurfaceGrids;

/// Terminal cells are roughly twice as tall as they are wide.
pub const CELL_ASPECT: f64 = 2.0;

/// A point after projection: screen coordinates plus depth (larger = nearer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub sx: f64,
    pub sy: f64,
    pub depth: f64,
}

/// Orthographic projection for a camera at `elevation` above the xy-plane,
/// rotated `azimuth` counter-clockwise about the z axis.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    right: Vector3<f64>,
    up: Vector3<f64>,
    toward_viewer: Vector3<f64>,
}

impl Projector {
    pub fn new(view: ViewAngle) -> Self {
        let (sin_el, cos_el) = view.elevation_deg.to_radians().sin_cos();
        let (sin_az, cos_az) = view.azimuth_deg.to_radians().sin_cos();
        Self {
            right: Vector3::new(-sin_az, cos_az, 0.0),
            up: Vector3::new(-sin_el * cos_az, -sin_el * sin_az, cos_el),
            toward_viewer: Vector3::new(cos_el * cos_az, cos_el * sin_az, sin_el),
        }
    }

    pub fn project(&self, p: &Vector3<f64>) -> Projected {
        Projected {
            sx: self.right.dot(p),
            sy: self.up.dot(p),
            depth: self.toward_viewer.dot(p),
        }
    }

    /// Project every grid node; the result is indexed `[row][col]`.
    pub fn project_grid(&self, grids: &SurfaceGrids<'_>) -> Vec<Vec<Projected>> {
        let (rows, cols) = grids.shape();
        (0..rows)
            .map(|r| (0..cols).map(|c| self.project(&grids.point(r, c))).collect())
            .collect()
    }
}

/// Axis-aligned bounds of projected points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ScreenBounds {
    pub fn of(points: &[Vec<Projected>]) -> Option<Self> {
        let mut b = ScreenBounds {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for p in points.iter().flatten() {
            b.x_min = b.x_min.min(p.sx);
            b.x_max = b.x_max.max(p.sx);
            b.y_min = b.y_min.min(p.sy);
            b.y_max = b.y_max.max(p.sy);
        }
        if b.x_min.is_finite() && b.x_max.is_finite() && b.y_min.is_finite() && b.y_max.is_finite() {
            Some(b)
        } else {
            None
        }
    }

    /// Grow each axis by `frac` of its span (at least a tiny absolute pad).
    pub fn padded(self, frac: f64) -> Self {
        let pad_x = ((self.x_max - self.x_min).abs() * frac).max(1e-9);
        let pad_y = ((self.y_max - self.y_min).abs() * frac).max(1e-9);
        Self {
            x_min: self.x_min - pad_x,
            x_max: self.x_max + pad_x,
            y_min: self.y_min - pad_y,
            y_max: self.y_max + pad_y,
        }
    }
}

/// Maps screen coordinates to `(col, row)` cells with a uniform scale.
#[derive(Debug, Clone, Copy)]
pub struct CellMap {
    width: usize,
    height: usize,
    scale: f64,
    cx: f64,
    cy: f64,
}

impl CellMap {
    pub fn fit(bounds: ScreenBounds, width: usize, height: usize) -> Self {
        let width = width.max(2);
        let height = height.max(2);
        let span_x = (bounds.x_max - bounds.x_min).max(1e-12);
        let span_y = (bounds.y_max - bounds.y_min).max(1e-12);

        let by_width = (width as f64 - 1.0) / span_x;
        let by_height = (height as f64 - 1.0) * CELL_ASPECT / span_y;

        Self {
            width,
            height,
            scale: by_width.min(by_height),
            cx: (bounds.x_min + bounds.x_max) / 2.0,
            cy: (bounds.y_min + bounds.y_max) / 2.0,
        }
    }

    pub fn to_cell(&self, p: &Projected) -> (usize, usize) {
        let col = (self.width as f64 - 1.0) / 2.0 + (p.sx - self.cx) * self.scale;
        let row = (self.height as f64 - 1.0) / 2.0 - (p.sy - self.cy) * self.scale / CELL_ASPECT;
        (
            col.round().clamp(0.0, self.width as f64 - 1.0) as usize,
            row.round().clamp(0.0, self.height as f64 - 1.0) as usize,
        )
    }
}

/// Indices `0..len` thinned to about `target` entries, always keeping both ends.
pub fn mesh_indices(len: usize, target: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let target = target.max(2);
    let stride = (len - 1).div_ceil(target - 1).max(1);
    let mut out: Vec<usize> = (0..len).step_by(stride).collect();
    if out.last() != Some(&(len - 1)) {
        out.push(len - 1);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_down_view_keeps_xy_and_uses_z_for_depth() {
        let proj = Projector::new(ViewAngle {
            elevation_deg: 90.0,
            azimuth_deg: -90.0,
        });
        let p = proj.project(&Vector3::new(1.0, 2.0, 3.0));
        assert!((p.sx - 1.0).abs() < 1e-12, "{p:?}");
        assert!((p.sy - 2.0).abs() < 1e-12, "{p:?}");
        assert!((p.depth - 3.0).abs() < 1e-12, "{p:?}");
    }

    #[test]
    fn cell_map_keeps_bounds_inside_the_canvas() {
        let b = ScreenBounds {
            x_min: -2.0,
            x_max: 2.0,
            y_min: -1.0,
            y_max: 1.0,
        };
        let map = CellMap::fit(b, 41, 11);
        let corner = |sx, sy| map.to_cell(&Projected { sx, sy, depth: 0.0 });
        assert_eq!(corner(-2.0, 1.0), (0, 0));
        assert_eq!(corner(2.0, -1.0), (40, 10));
        assert_eq!(corner(0.0, 0.0), (20, 5));
    }

    #[test]
    fn mesh_indices_keep_both_ends() {
        assert_eq!(mesh_indices(200, 5), vec![0, 50, 100, 150, 199]);
        assert_eq!(mesh_indices(3, 10), vec![0, 1, 2]);
        assert_eq!(mesh_indices(2, 10), vec![0, 1]);
        assert!(mesh_indices(0, 4).is_empty());
    }
}
