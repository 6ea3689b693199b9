//! Logging setup: `tracing` events, formatted to stderr by `tracing-subscriber`.
//!
//! Library code only emits `tracing::{debug, info, warn}` events; the binary
//! installs the subscriber. The filter comes from `-v` flags, else
//! `MOBIUS_LOG` (any `EnvFilter` directive string), else `warn`.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::AppError;

/// Environment variable consulted when no `-v` flag is given.
pub const LOG_ENV: &str = "MOBIUS_LOG";

/// Install the global subscriber.
pub fn init(filter: EnvFilter) -> Result<(), AppError> {
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::new(4, format!("Failed to install logger: {e}")))
}

/// Resolve the filter from the `-v` count and an optional `MOBIUS_LOG` value.
///
/// An unparsable `MOBIUS_LOG` falls back to `warn`.
pub fn filter_from(verbosity: u8, env_value: Option<&str>) -> EnvFilter {
    match verbosity {
        0 => env_value
            .and_then(|v| EnvFilter::try_new(v.trim()).ok())
            .unwrap_or_else(|| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn verbosity_overrides_env() {
        assert_eq!(filter_from(1, Some("error")).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(filter_from(2, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter_from(5, None).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn env_filter_parsed_or_defaulted() {
        assert_eq!(filter_from(0, Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            filter_from(0, Some("mobius_strip=notalevel")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(filter_from(0, None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn second_install_is_reported_not_ignored() {
        // Whichever call loses the race to set the global default must surface an error.
        let first = init(filter_from(0, None));
        let second = init(filter_from(0, None));
        assert!(first.is_err() || second.is_err());
        if let Err(err) = second {
            assert_eq!(err.exit_code(), 4);
        }
    }
}
