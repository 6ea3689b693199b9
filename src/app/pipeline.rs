//! Shared pipeline logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! params -> strip -> estimates (or params -> resolution ladder -> rows)
//!
//! The subcommands can then focus on presentation.

use std::time::Instant;

use crate::domain::{ConvergenceRow, DerivativeMethod, Estimates, RunConfig, StripParams};
use crate::error::AppError;
use crate::estimate::{convergence_study, estimate, resolution_ladder};
use crate::surface::MobiusStrip;

/// All computed outputs of a single `mobius estimate` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub strip: MobiusStrip,
    pub estimates: Estimates,
}

/// Build the strip and run both estimators.
pub fn run_estimate(config: &RunConfig) -> Result<RunOutput, AppError> {
    let started = Instant::now();
    let strip = build_strip(config.params)?;
    let estimates = estimate(&strip, config.method);

    tracing::info!(
        "estimated area={:.6} edge={:.6} with {} in {:?}",
        estimates.surface_area,
        estimates.edge_length,
        config.method.display_name(),
        started.elapsed()
    );

    Ok(RunOutput { strip, estimates })
}

/// Build the strip only.
pub fn build_strip(params: StripParams) -> Result<MobiusStrip, AppError> {
    let started = Instant::now();
    let strip = MobiusStrip::new(params)?;
    tracing::info!(
        "generated {n}x{n} mesh in {:?}",
        started.elapsed(),
        n = params.resolution
    );
    Ok(strip)
}

/// Run the doubling ladder for the geometry in `base`.
pub fn run_convergence(
    base: &StripParams,
    start: usize,
    levels: usize,
    method: DerivativeMethod,
) -> Result<Vec<ConvergenceRow>, AppError> {
    if levels == 0 {
        return Err(AppError::new(2, "Convergence study needs at least one level."));
    }
    let ladder = resolution_ladder(start, levels);
    tracing::info!("convergence ladder: {ladder:?}");

    let started = Instant::now();
    let rows = convergence_study(base, &ladder, method)?;
    tracing::info!("convergence study finished in {:?}", started.elapsed());
    Ok(rows)
}
