//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - strip parameters and their validation (`StripParams`)
//! - estimator options and outputs (`DerivativeMethod`, `Estimates`, `ConvergenceRow`)
//! - run/plot configuration (`RunConfig`, `PlotConfig`, `ViewAngle`)

pub mod types;

pub use types::*;
