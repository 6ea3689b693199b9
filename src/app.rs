//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs the logger
//! - resolves strip parameters (flags, environment, prompt)
//! - runs the estimators or the convergence ladder
//! - prints reports and the terminal render

use clap::Parser;

use crate::cli::{Command, ConvergeArgs, EstimateArgs, RenderArgs, StripArgs};
use crate::domain::{OutputFormat, RunConfig, StripParams};
use crate::error::AppError;

pub mod config;
pub mod pipeline;

/// Entry point for the `mobius` binary.
pub fn run() -> Result<(), AppError> {
    // We want `mobius` and `mobius -R 3` to behave like `mobius estimate ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let dotenv_path = config::load_dotenv();
    let env_filter = config::process_env(crate::logging::LOG_ENV);
    crate::logging::init(crate::logging::filter_from(cli.verbose, env_filter.as_deref()))?;
    if let Some(path) = dotenv_path {
        tracing::debug!("loaded environment from {}", path.display());
    }

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Render(args) => handle_render(args),
        Command::Converge(args) => handle_converge(args),
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args)?;
    let run = pipeline::run_estimate(&config)?;

    match config.format {
        OutputFormat::Text => {
            println!();
            print!(
                "{}",
                crate::report::format_run_summary(run.strip.params(), &run.estimates)
            );
            println!();
        }
        OutputFormat::Json => {
            let summary = crate::report::run_summary(&run.strip, &run.estimates);
            println!("{}", crate::report::to_json(&summary)?);
        }
    }

    if let Some(plot) = &config.plot {
        print!("{}", crate::plot::render_surface(&run.strip.grids(), plot));
    }

    Ok(())
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let params = strip_params(&args.strip)?;
    let strip = pipeline::build_strip(params)?;
    print!("{}", crate::plot::render_surface(&strip.grids(), &args.plot.to_config()));
    Ok(())
}

fn handle_converge(args: ConvergeArgs) -> Result<(), AppError> {
    let (radius, width) = config::resolve_geometry(args.radius, args.width, config::process_env)?;
    let base = StripParams::new(radius, width, args.start);
    let rows = pipeline::run_convergence(&base, args.start, args.levels, args.method)?;

    match args.format {
        OutputFormat::Text => print!(
            "{}",
            crate::report::format_convergence(radius, width, args.method, &rows)
        ),
        OutputFormat::Json => {
            let report = crate::report::convergence_report(&base, args.method, &rows);
            println!("{}", crate::report::to_json(&report)?);
        }
    }
    Ok(())
}

pub fn run_config_from_args(args: &EstimateArgs) -> Result<RunConfig, AppError> {
    let params = strip_params(&args.strip)?;
    // The plot is terminal art; keep JSON output machine-readable.
    let plot = (!args.no_plot && args.format == OutputFormat::Text).then(|| args.plot.to_config());
    Ok(RunConfig {
        params,
        method: args.method,
        plot,
        format: args.format,
    })
}

fn strip_params(args: &StripArgs) -> Result<StripParams, AppError> {
    if args.prompt {
        return crate::cli::prompt::prompt_for_params();
    }
    config::resolve_params(args, config::process_env)
}

/// Rewrite argv so `mobius` defaults to `mobius estimate`.
///
/// Rules:
/// - `mobius`                      -> `mobius estimate`
/// - `mobius -R 3 ...`             -> `mobius estimate -R 3 ...`
/// - `mobius --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("estimate".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "estimate" | "render" | "converge");
    if is_subcommand {
        return argv;
    }

    // Global flags may precede the subcommand.
    let names_subcommand = argv
        .iter()
        .skip(1)
        .any(|a| matches!(a.as_str(), "estimate" | "render" | "converge"));
    if arg1.starts_with('-') && !names_subcommand {
        argv.insert(1, "estimate".to_string());
    }

    argv
}
