//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between the numerical core, the report layer and the renderers
//! - printed as JSON run summaries

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Default radius from the strip's center to its midline.
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Default strip width.
pub const DEFAULT_WIDTH: f64 = 2.0;

/// Default mesh points per parameter axis.
pub const DEFAULT_RESOLUTION: usize = 200;

/// Smallest resolution for which step sizes and finite differences exist.
pub const MIN_RESOLUTION: usize = 2;

/// Geometry and discretization of a strip.
///
/// Only the resolution and finiteness are validated. Non-positive widths and
/// self-intersecting radius/width combinations still produce a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    /// `R`: distance from the center to the strip's midline.
    pub radius: f64,
    /// `w`: full width of the strip; `v` spans `[-w/2, w/2]`.
    pub width: f64,
    /// `n`: samples per parameter axis.
    pub resolution: usize,
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            width: DEFAULT_WIDTH,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl StripParams {
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.resolution < MIN_RESOLUTION {
            return Err(ModelError::invalid(format!(
                "resolution must be >= {MIN_RESOLUTION} (got {})",
                self.resolution
            )));
        }
        if !self.radius.is_finite() {
            return Err(ModelError::invalid(format!(
                "radius must be a finite number (got {})",
                self.radius
            )));
        }
        if !self.width.is_finite() {
            return Err(ModelError::invalid(format!(
                "width must be a finite number (got {})",
                self.width
            )));
        }
        Ok(())
    }

    /// Same geometry at a different resolution.
    pub fn with_resolution(self, resolution: usize) -> Self {
        Self { resolution, ..self }
    }
}

/// How the surface partial derivatives are obtained for the area estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DerivativeMethod {
    /// Central differences on the sampled grid, one-sided at the grid edges.
    #[default]
    FiniteDifference,
    /// Closed-form partials of the parametric map, evaluated at grid nodes.
    Analytic,
}

impl DerivativeMethod {
    pub fn display_name(self) -> &'static str {
        match self {
            DerivativeMethod::FiniteDifference => "finite differences",
            DerivativeMethod::Analytic => "analytic partials",
        }
    }
}

/// Which of the two parametric boundary rows to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Row 0, `v = -w/2`.
    Lower,
    /// Row `n - 1`, `v = +w/2`.
    Upper,
}

impl Boundary {
    pub const BOTH: [Boundary; 2] = [Boundary::Lower, Boundary::Upper];
}

/// Numerical estimates for one strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimates {
    pub surface_area: f64,
    pub edge_length: f64,
    pub method: DerivativeMethod,
}

/// One rung of a resolution ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceRow {
    pub resolution: usize,
    pub surface_area: f64,
    pub edge_length: f64,
    /// Change in area from the previous (coarser) rung.
    pub area_delta: Option<f64>,
    /// Change in edge length from the previous (coarser) rung.
    pub edge_delta: Option<f64>,
}

/// Fixed camera for the renderers (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewAngle {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl Default for ViewAngle {
    fn default() -> Self {
        Self {
            elevation_deg: 30.0,
            azimuth_deg: 60.0,
        }
    }
}

/// Terminal renderer flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Shaded character raster (deterministic, no dependencies on terminal features).
    #[default]
    Ascii,
    /// Plotters wireframe drawn with Braille dots.
    Braille,
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Plot settings shared by `estimate` and `render`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    pub style: RenderStyle,
    pub width: usize,
    pub height: usize,
    pub view: ViewAngle,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, environment and defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub params: StripParams,
    pub method: DerivativeMethod,
    pub plot: Option<PlotConfig>,
    pub format: OutputFormat,
}

/// JSON run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub tool: String,
    pub params: StripParams,
    pub du: f64,
    pub dv: f64,
    pub estimates: Estimates,
}

/// JSON convergence report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergenceReport {
    pub tool: String,
    pub radius: f64,
    pub width: f64,
    pub method: DerivativeMethod,
    pub rows: Vec<ConvergenceRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let p = StripParams::default();
        assert_eq!(p, StripParams::new(5.0, 2.0, 200));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn resolution_below_two_is_rejected() {
        for n in [0, 1] {
            let err = StripParams::new(5.0, 2.0, n).validate().unwrap_err();
            assert!(matches!(err, ModelError::InvalidConfiguration(_)));
        }
        assert!(StripParams::new(5.0, 2.0, 2).validate().is_ok());
    }

    #[test]
    fn non_finite_geometry_is_rejected_but_odd_geometry_is_not() {
        assert!(StripParams::new(f64::NAN, 2.0, 10).validate().is_err());
        assert!(StripParams::new(5.0, f64::INFINITY, 10).validate().is_err());
        // Negative width and a radius smaller than the half-width are accepted.
        assert!(StripParams::new(0.1, -3.0, 10).validate().is_ok());
    }

    #[test]
    fn method_serializes_kebab_case() {
        let json = serde_json::to_string(&DerivativeMethod::FiniteDifference).unwrap();
        assert_eq!(json, "\"finite-difference\"");
    }
}
