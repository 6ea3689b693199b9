//! ASCII rendering of the strip for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for snapshot-style tests)
//!
//! Plot elements:
//! - mesh lines: shaded by height `z`, low to high: `.:-=+*#%`
//! - the boundary rows: `@`
//!
//! Lines are rasterized with a depth buffer so nearer parts of the strip hide
//! farther ones.

use crate::domain::ViewAngle;
use crate::plot::view::{mesh_indices, CellMap, Projected, Projector, ScreenBounds};
use crate::surface::SurfaceGrids;

/// Height ramp, low `z` first.
const SHADES: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%'];

/// Boundary marker.
const EDGE: char = '@';

/// Target number of mesh lines per parameter direction.
const MESH_LINES: usize = 24;

/// Render the strip as a shaded wireframe.
pub fn render_ascii_surface(grids: &SurfaceGrids<'_>, view: ViewAngle, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let projector = Projector::new(view);
    let projected = projector.project_grid(grids);
    let (rows, cols) = grids.shape();

    let (z_min, z_max) = z_range(grids).unwrap_or((0.0, 1.0));
    let bounds = ScreenBounds::of(&projected).map(|b| b.padded(0.02));

    let mut canvas = Canvas::new(width, height);
    if let Some(bounds) = bounds {
        let map = CellMap::fit(bounds, width, height);
        let shade = |z: f64| shade_char(z, z_min, z_max);

        // Lines of constant v (along u).
        for r in mesh_indices(rows, MESH_LINES) {
            let line: Vec<(Projected, f64)> =
                (0..cols).map(|c| (projected[r][c], grids.z[(r, c)])).collect();
            let is_edge = r == 0 || r + 1 == rows;
            canvas.draw_polyline(&map, &line, |z| if is_edge { EDGE } else { shade(z) });
        }

        // Lines of constant u (across the strip).
        for c in mesh_indices(cols, MESH_LINES) {
            let line: Vec<(Projected, f64)> =
                (0..rows).map(|r| (projected[r][c], grids.z[(r, c)])).collect();
            canvas.draw_polyline(&map, &line, shade);
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Mobius strip: z=[{z_min:.3}, {z_max:.3}] | view elev={:.0} azim={:.0}\n",
        view.elevation_deg, view.azimuth_deg
    ));
    for row in canvas.cells {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

struct Canvas {
    cells: Vec<Vec<char>>,
    depth: Vec<Vec<f64>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
            depth: vec![vec![f64::NEG_INFINITY; width]; height],
        }
    }

    fn draw_polyline(&mut self, map: &CellMap, line: &[(Projected, f64)], ch: impl Fn(f64) -> char) {
        if line.len() == 1 {
            let (p, z) = line[0];
            let (x, y) = map.to_cell(&p);
            self.plot(x, y, p.depth, ch(z));
        }
        for pair in line.windows(2) {
            let (a, za) = pair[0];
            let (b, zb) = pair[1];
            self.draw_line(map.to_cell(&a), map.to_cell(&b), (a.depth, b.depth), (za, zb), &ch);
        }
    }

    /// Integer line drawing (Bresenham-ish), interpolating depth and height.
    fn draw_line(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
        depth: (f64, f64),
        z: (f64, f64),
        ch: &impl Fn(f64) -> char,
    ) {
        let mut x0 = from.0 as isize;
        let mut y0 = from.1 as isize;
        let x1 = to.0 as isize;
        let y1 = to.1 as isize;

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let steps = dx.max(-dy).max(1) as f64;
        let mut step = 0.0;

        loop {
            let t = step / steps;
            let d = depth.0 + (depth.1 - depth.0) * t;
            let zz = z.0 + (z.1 - z.0) * t;
            self.plot(x0 as usize, y0 as usize, d, ch(zz));

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
            step += 1.0;
        }
    }

    fn plot(&mut self, x: usize, y: usize, depth: f64, ch: char) {
        if y < self.cells.len() && x < self.cells[y].len() && depth >= self.depth[y][x] {
            self.depth[y][x] = depth;
            self.cells[y][x] = ch;
        }
    }
}

fn z_range(grids: &SurfaceGrids<'_>) -> Option<(f64, f64)> {
    let mut min_z = f64::INFINITY;
    let mut max_z = f64::NEG_INFINITY;
    for &z in grids.z.iter() {
        min_z = min_z.min(z);
        max_z = max_z.max(z);
    }
    if min_z.is_finite() && max_z.is_finite() {
        Some((min_z, max_z))
    } else {
        None
    }
}

fn shade_char(z: f64, z_min: f64, z_max: f64) -> char {
    let span = z_max - z_min;
    if span <= 1e-12 {
        return SHADES[SHADES.len() / 2];
    }
    let u = ((z - z_min) / span).clamp(0.0, 1.0);
    let idx = (u * (SHADES.len() as f64 - 1.0)).round() as usize;
    SHADES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StripParams;
    use crate::surface::MobiusStrip;

    fn render(n: usize, width: usize, height: usize) -> String {
        let strip = MobiusStrip::new(StripParams::new(5.0, 2.0, n)).unwrap();
        render_ascii_surface(&strip.grids(), ViewAngle::default(), width, height)
    }

    #[test]
    fn output_has_header_and_fixed_size_raster() {
        let txt = render(60, 72, 24);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 25);
        assert!(lines[0].starts_with("Mobius strip: z=[-1.000, 1.000]"), "{}", lines[0]);
        assert!(lines[0].ends_with("view elev=30 azim=60"), "{}", lines[0]);
        for row in &lines[1..] {
            assert_eq!(row.chars().count(), 72);
        }
    }

    #[test]
    fn boundary_and_mesh_are_both_visible() {
        let txt = render(60, 72, 24);
        assert!(txt.contains(EDGE));
        assert!(SHADES.iter().any(|&c| txt.contains(c)));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(40, 50, 16), render(40, 50, 16));
    }

    #[test]
    fn tiny_mesh_and_tiny_canvas_do_not_panic() {
        let txt = render(2, 1, 1);
        // Clamped to the minimum canvas.
        assert_eq!(txt.lines().count(), 6);
        assert!(txt.lines().skip(1).all(|l| l.chars().count() == 10));
    }

    #[test]
    fn shade_ramp_spans_low_to_high() {
        assert_eq!(shade_char(-1.0, -1.0, 1.0), '.');
        assert_eq!(shade_char(1.0, -1.0, 1.0), '%');
        assert_eq!(shade_char(0.3, 0.3, 0.3), SHADES[SHADES.len() / 2]);
    }
}
