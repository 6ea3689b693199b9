//! Command-line parsing for the Möbius strip model.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the numerical code.

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::{DerivativeMethod, OutputFormat, PlotConfig, RenderStyle, ViewAngle};

pub mod prompt;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "mobius",
    version,
    about = "Möbius strip surface model: surface area, edge length and a terminal render"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Overrides MOBIUS_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate surface area and edge length, then render the strip.
    Estimate(EstimateArgs),
    /// Render the strip only.
    Render(RenderArgs),
    /// Re-run both estimators on a doubling resolution ladder.
    Converge(ConvergeArgs),
}

/// Strip geometry and mesh resolution.
///
/// Each value falls back to its environment variable, then to the built-in default.
#[derive(Debug, Args, Clone, Default)]
pub struct StripArgs {
    /// Radius from the center to the strip's midline [env: MOBIUS_R] [default: 5].
    #[arg(short = 'R', long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Width of the strip [env: MOBIUS_W] [default: 2].
    #[arg(short = 'w', long, allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Mesh points per parameter axis, at least 2 [env: MOBIUS_N] [default: 200].
    #[arg(short = 'n', long)]
    pub resolution: Option<usize>,

    /// Ask for radius, width and resolution on stdin instead.
    #[arg(long)]
    pub prompt: bool,
}

/// Terminal render options.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// Renderer flavor.
    #[arg(long, value_enum, default_value_t = RenderStyle::Ascii)]
    pub style: RenderStyle,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub cols: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 28)]
    pub rows: usize,

    /// Camera elevation above the xy-plane (degrees).
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    pub elev: f64,

    /// Camera azimuth about the z axis (degrees).
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    pub azim: f64,
}

impl PlotArgs {
    pub fn to_config(&self) -> PlotConfig {
        PlotConfig {
            style: self.style,
            width: self.cols,
            height: self.rows,
            view: ViewAngle {
                elevation_deg: self.elev,
                azimuth_deg: self.azim,
            },
        }
    }
}

/// Options for `mobius estimate`.
#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub strip: StripArgs,

    /// How partial derivatives are obtained for the area estimate.
    #[arg(long, value_enum, default_value_t = DerivativeMethod::FiniteDifference)]
    pub method: DerivativeMethod,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    #[command(flatten)]
    pub plot: PlotArgs,

    /// Report format (JSON output never includes the plot).
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Options for `mobius render`.
#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub strip: StripArgs,

    #[command(flatten)]
    pub plot: PlotArgs,
}

/// Options for `mobius converge`.
#[derive(Debug, Args, Clone)]
pub struct ConvergeArgs {
    /// Radius from the center to the strip's midline [env: MOBIUS_R] [default: 5].
    #[arg(short = 'R', long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Width of the strip [env: MOBIUS_W] [default: 2].
    #[arg(short = 'w', long, allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// First resolution of the ladder.
    #[arg(long, default_value_t = 25)]
    pub start: usize,

    /// Number of rungs; each doubles the previous resolution.
    #[arg(long, default_value_t = 5)]
    pub levels: usize,

    /// How partial derivatives are obtained for the area estimate.
    #[arg(long, value_enum, default_value_t = DerivativeMethod::FiniteDifference)]
    pub method: DerivativeMethod,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
