//! Terminal renderers for the strip.
//!
//! Renderers only consume [`crate::surface::SurfaceGrids`]; the numerical core
//! has no knowledge of them.

pub mod ascii;
pub mod braille;
pub mod view;

pub use ascii::render_ascii_surface;
pub use braille::render_braille_surface;

use crate::domain::{PlotConfig, RenderStyle};
use crate::surface::SurfaceGrids;

/// Render with whichever style `config` asks for.
pub fn render_surface(grids: &SurfaceGrids<'_>, config: &PlotConfig) -> String {
    match config.style {
        RenderStyle::Ascii => render_ascii_surface(grids, config.view, config.width, config.height),
        RenderStyle::Braille => render_braille_surface(
            grids,
            config.view,
            config.width.min(u16::MAX as usize) as u16,
            config.height.min(u16::MAX as usize) as u16,
        ),
    }
}
