//! Command-line interface parsing for holonet
//!
//! This module handles parsing of CLI arguments using clap and resolves them,
//! together with the `PORT` environment variable, into a `StartupConfig`.

use clap::Parser;
use std::time::Duration;
use thiserror::Error;

use crate::data::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Port the demo server listens on when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Error types for startup configuration
#[derive(Debug, Error)]
pub enum CliError {
    /// The `PORT` environment variable is not a valid port number
    #[error("Invalid port: '{0}'. PORT must be a number between 1 and 65535")]
    InvalidPort(String),
}

/// holonet - fetch and display Star Wars API resources
#[derive(Parser, Debug)]
#[command(name = "holonet")]
#[command(about = "Fetch, cache, and display Star Wars API resources behind a tiny HTTP server")]
#[command(version)]
pub struct Cli {
    /// Turn off debug mode (run summaries and debug-level logs)
    #[arg(long)]
    pub no_debug: bool,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Root URL of the API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Perform a single run and exit instead of starting the server
    #[arg(long)]
    pub once: bool,
}

/// Configuration derived from CLI arguments and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Whether debug mode is on
    pub debug: bool,
    /// Bound on each API request
    pub timeout: Duration,
    /// Root URL of the API
    pub base_url: String,
    /// Port for the demo server
    pub port: u16,
    /// Run once and exit
    pub once: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            debug: true,
            timeout: DEFAULT_TIMEOUT,
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            once: false,
        }
    }
}

/// Parses a port value as found in the environment
///
/// # Returns
/// * `Ok(u16)` for a non-zero port number
/// * `Err(CliError::InvalidPort)` otherwise
pub fn parse_port(s: &str) -> Result<u16, CliError> {
    match s.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(CliError::InvalidPort(s.to_string())),
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments and the raw `PORT` value.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    /// * `port` - Value of `PORT`, if set
    pub fn from_cli(cli: &Cli, port: Option<&str>) -> Result<Self, CliError> {
        let port = match port {
            Some(raw) => parse_port(raw)?,
            None => DEFAULT_PORT,
        };

        Ok(StartupConfig {
            debug: !cli.no_debug,
            timeout: Duration::from_millis(cli.timeout),
            base_url: cli.base_url.clone(),
            port,
            once: cli.once,
        })
    }

    /// Creates a StartupConfig reading `PORT` from the process environment.
    pub fn from_env(cli: &Cli) -> Result<Self, CliError> {
        let port = std::env::var(PORT_ENV).ok();
        Self::from_cli(cli, port.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
    }

    #[test]
    fn test_parse_port_invalid() {
        for raw in ["", "zero", "0", "70000", "-1"] {
            let err = parse_port(raw).unwrap_err();
            assert!(err.to_string().contains("Invalid port"), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(config.debug);
        assert_eq!(config.timeout, Duration::from_millis(5000));
        assert_eq!(config.port, 3000);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.once);
    }

    #[test]
    fn test_cli_parse_no_args_matches_default() {
        let cli = Cli::parse_from(["holonet"]);
        let config = StartupConfig::from_cli(&cli, None).unwrap();
        assert_eq!(config, StartupConfig::default());
    }

    #[test]
    fn test_cli_parse_no_debug() {
        let cli = Cli::parse_from(["holonet", "--no-debug"]);
        let config = StartupConfig::from_cli(&cli, None).unwrap();
        assert!(!config.debug);
    }

    #[test]
    fn test_cli_parse_timeout() {
        let cli = Cli::parse_from(["holonet", "--timeout", "250"]);
        let config = StartupConfig::from_cli(&cli, None).unwrap();
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        assert!(Cli::try_parse_from(["holonet", "--timeout", "0"]).is_err());
        assert!(Cli::try_parse_from(["holonet", "--timeout", "soon"]).is_err());
    }

    #[test]
    fn test_cli_parse_base_url_and_once() {
        let cli = Cli::parse_from(["holonet", "--base-url", "http://localhost:9000/api/", "--once"]);
        let config = StartupConfig::from_cli(&cli, None).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api/");
        assert!(config.once);
    }

    #[test]
    fn test_startup_config_port_override() {
        let cli = Cli::parse_from(["holonet"]);
        let config = StartupConfig::from_cli(&cli, Some("4000")).unwrap();
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_startup_config_invalid_port() {
        let cli = Cli::parse_from(["holonet"]);
        let result = StartupConfig::from_cli(&cli, Some("http"));
        assert!(result.is_err());
    }
}
