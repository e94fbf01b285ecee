//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_DIFF_LINES, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Runtime configuration for the diff service and CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Per-side line limit checked before the engine runs; `0` disables it.
    pub max_lines: usize,
    pub max_body_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_lines: DEFAULT_MAX_DIFF_LINES,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
///
/// # Arguments
/// - `name`: Environment variable name.
///
/// # Returns
/// `true` when the value is a recognized truthy value.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn env_parse_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}='{}'; using default", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `PORT`, `MAX_DIFF_LINES`, and `MAX_BODY_SIZE`.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing
    /// or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_parse_or("PORT", defaults.port),
            max_lines: env_parse_or("MAX_DIFF_LINES", defaults.max_lines),
            max_body_size: env_parse_or("MAX_BODY_SIZE", defaults.max_body_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_env_flag, Config};
    use crate::constants::{DEFAULT_MAX_BODY_SIZE, DEFAULT_MAX_DIFF_LINES, DEFAULT_PORT};
    use crate::env::ScopedEnv;

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn from_env_reads_overrides() {
        let _env = ScopedEnv::lock()
            .set("PORT", "4242")
            .set("MAX_DIFF_LINES", " 150 ")
            .set("MAX_BODY_SIZE", "2048");

        let config = Config::from_env();
        assert_eq!(config.port, 4242);
        assert_eq!(config.max_lines, 150);
        assert_eq!(config.max_body_size, 2048);
    }

    #[test]
    fn from_env_falls_back_on_missing_or_invalid_values() {
        let _env = ScopedEnv::lock()
            .remove("PORT")
            .set("MAX_DIFF_LINES", "lots")
            .set("MAX_BODY_SIZE", "-1");

        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_lines, DEFAULT_MAX_DIFF_LINES);
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
    }
}
