//! Layered parameter resolution: CLI flag, then environment, then default.
//!
//! `.env` files are loaded by `dotenvy` before lookup, so a project-local
//! `.env` with `MOBIUS_R=3` behaves like exporting the variable.

use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::StripArgs;
use crate::domain::{StripParams, DEFAULT_RADIUS, DEFAULT_RESOLUTION, DEFAULT_WIDTH};
use crate::error::{AppError, ModelError};

pub const ENV_RADIUS: &str = "MOBIUS_R";
pub const ENV_WIDTH: &str = "MOBIUS_W";
pub const ENV_RESOLUTION: &str = "MOBIUS_N";

/// Load `.env` into the process environment if one exists.
///
/// Runs before the subscriber is installed (so `.env` can set `MOBIUS_LOG`);
/// the caller logs the returned path once logging is up.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Process environment lookup.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Resolve all three strip parameters.
pub fn resolve_params(args: &StripArgs, env: impl Fn(&str) -> Option<String>) -> Result<StripParams, AppError> {
    Ok(StripParams::new(
        layered(args.radius, ENV_RADIUS, DEFAULT_RADIUS, &env)?,
        layered(args.width, ENV_WIDTH, DEFAULT_WIDTH, &env)?,
        layered(args.resolution, ENV_RESOLUTION, DEFAULT_RESOLUTION, &env)?,
    ))
}

/// Resolve radius and width only (resolution is supplied elsewhere).
pub fn resolve_geometry(
    radius: Option<f64>,
    width: Option<f64>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(f64, f64), AppError> {
    Ok((
        layered(radius, ENV_RADIUS, DEFAULT_RADIUS, &env)?,
        layered(width, ENV_WIDTH, DEFAULT_WIDTH, &env)?,
    ))
}

fn layered<T: FromStr>(
    flag: Option<T>,
    key: &str,
    default: T,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<T, AppError> {
    if let Some(value) = flag {
        return Ok(value);
    }
    match env(key) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map_err(|_| {
            ModelError::invalid(format!("{key}='{raw}' is not a valid number")).into()
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let params = resolve_params(&StripArgs::default(), env_of(&[])).unwrap();
        assert_eq!(params, StripParams::default());
    }

    #[test]
    fn flags_beat_env_and_env_beats_defaults() {
        let args = StripArgs {
            radius: Some(7.0),
            ..StripArgs::default()
        };
        let env = env_of(&[(ENV_RADIUS, "1"), (ENV_WIDTH, "0.5"), (ENV_RESOLUTION, " 64 ")]);
        let params = resolve_params(&args, env).unwrap();
        assert_eq!(params, StripParams::new(7.0, 0.5, 64));
    }

    #[test]
    fn non_numeric_env_is_rejected() {
        let err = resolve_params(&StripArgs::default(), env_of(&[(ENV_RESOLUTION, "lots")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "invalid configuration: MOBIUS_N='lots' is not a valid number"
        );
    }

    #[test]
    fn geometry_ignores_resolution() {
        let env = env_of(&[(ENV_WIDTH, "3"), (ENV_RESOLUTION, "oops")]);
        assert_eq!(resolve_geometry(None, None, env).unwrap(), (DEFAULT_RADIUS, 3.0));
    }
}
