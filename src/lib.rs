//! `mobius-strip` library crate.
//!
//! The binary (`mobius`) is a thin wrapper around this library so that:
//!
//! - the numerical core is testable without spawning processes
//! - renderers stay swappable (they only see the coordinate grids)
//!
//! ```no_run
//! use mobius_strip::domain::StripParams;
//! use mobius_strip::surface::MobiusStrip;
//!
//! let strip = MobiusStrip::new(StripParams::new(5.0, 2.0, 200))?;
//! println!("area ≈ {:.4}", strip.compute_surface_area());
//! println!("edge ≈ {:.4}", strip.compute_edge_length());
//! # Ok::<(), mobius_strip::error::ModelError>(())
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod surface;
