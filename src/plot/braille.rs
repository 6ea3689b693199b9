//! Plotters-powered wireframe rendered with Braille dots.
//!
//! We render Plotters output into an off-screen Ratatui buffer using
//! `plotters-ratatui-backend`, then flatten the buffer to text. Nothing here
//! touches the terminal, so the result can be printed or compared in tests.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}, widgets::Widget};

use crate::domain::ViewAngle;
use crate::plot::view::{mesh_indices, Projector, ScreenBounds};
use crate::surface::SurfaceGrids;

/// Target number of mesh lines per parameter direction.
const MESH_LINES: usize = 32;

/// Smallest area Plotters can lay a chart out in.
const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 8;

/// A render-only wireframe description.
///
/// All polylines and bounds are computed before `render()`, which only draws.
pub struct WireframeChart<'a> {
    /// Projected mesh lines of constant `v` (first and last are the boundary).
    pub v_lines: &'a [Vec<(f64, f64)>],
    /// Projected mesh lines of constant `u`.
    pub u_lines: &'a [Vec<(f64, f64)>],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl<'a> Widget for WireframeChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small.",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(0)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            let mesh_color = RGBColor(68, 1, 84);
            let edge_color = RGBColor(253, 231, 37);

            for line in self.u_lines {
                chart.draw_series(LineSeries::new(line.iter().copied(), &mesh_color))?;
            }

            let last = self.v_lines.len().saturating_sub(1);
            for (idx, line) in self.v_lines.iter().enumerate() {
                let color = if idx == 0 || idx == last {
                    edge_color
                } else {
                    ramp_color(idx as f64 / last.max(1) as f64)
                };
                chart.draw_series(LineSeries::new(line.iter().copied(), &color))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Render the strip into a `width × height` character block.
pub fn render_braille_surface(grids: &SurfaceGrids<'_>, view: ViewAngle, width: u16, height: u16) -> String {
    let width = width.max(MIN_WIDTH);
    let height = height.max(MIN_HEIGHT);

    let projector = Projector::new(view);
    let projected = projector.project_grid(grids);
    let (rows, cols) = grids.shape();

    let v_lines: Vec<Vec<(f64, f64)>> = mesh_indices(rows, MESH_LINES)
        .into_iter()
        .map(|r| projected[r].iter().map(|p| (p.sx, p.sy)).collect())
        .collect();
    let u_lines: Vec<Vec<(f64, f64)>> = mesh_indices(cols, MESH_LINES)
        .into_iter()
        .map(|c| projected.iter().map(|row| (row[c].sx, row[c].sy)).collect())
        .collect();

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    if let Some(b) = ScreenBounds::of(&projected).map(|b| b.padded(0.02)) {
        WireframeChart {
            v_lines: &v_lines,
            u_lines: &u_lines,
            x_bounds: [b.x_min, b.x_max],
            y_bounds: [b.y_min, b.y_max],
        }
        .render(area, &mut buf);
    }

    buffer_to_string(&buf)
}

fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Purple-to-teal ramp for interior mesh lines.
fn ramp_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(68, 33), lerp(1, 145), lerp(84, 140))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StripParams;
    use crate::surface::MobiusStrip;

    #[test]
    fn renders_a_non_empty_block_of_the_requested_height() {
        let strip = MobiusStrip::new(StripParams::default()).unwrap();
        let txt = render_braille_surface(&strip.grids(), ViewAngle::default(), 60, 20);
        assert_eq!(txt.lines().count(), 20);
        assert!(txt.lines().all(|l| l.chars().count() <= 60));
        assert!(txt.chars().any(|c| !c.is_whitespace()), "empty render:\n{txt}");
    }

    #[test]
    fn small_requests_are_clamped_to_the_minimum_area() {
        let strip = MobiusStrip::new(StripParams::new(2.0, 1.0, 8)).unwrap();
        let txt = render_braille_surface(&strip.grids(), ViewAngle::default(), 5, 3);
        assert_eq!(txt.lines().count(), MIN_HEIGHT as usize);
    }

    #[test]
    fn ramp_endpoints() {
        let lo = ramp_color(0.0);
        let hi = ramp_color(1.0);
        assert_eq!((lo.0, lo.1, lo.2), (68, 1, 84));
        assert_eq!((hi.0, hi.1, hi.2), (33, 145, 140));
    }
}
