//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line argument parsing.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::geo::Provider;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for lookup results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled display panel (default)
    Panel,
    /// One JSON object per successful lookup
    Json,
}

/// Application configuration.
///
/// Doubles as the clap parser for the CLI and as a plain struct that can be
/// constructed programmatically (see `Default`) for library use and tests.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ip_tracker",
    about = "Look up geolocation metadata for an IP address or domain"
)]
pub struct Config {
    /// IP addresses or domains to look up. "-" reads queries line-by-line
    /// from stdin; no queries at all looks up the caller's own address.
    pub queries: Vec<String>,

    /// Geolocation provider to query
    #[arg(long, value_enum, default_value_t = Provider::IpApi)]
    pub provider: Provider,

    /// API key for keyed providers (defaults to the IPIFY_API_KEY
    /// environment variable, which may come from a .env file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the provider base URL (self-hosted mirrors, tests)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format for lookup results
    #[arg(long, value_enum, default_value_t = OutputFormat::Panel)]
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queries: Vec::new(),
            provider: Provider::IpApi,
            api_key: None,
            api_base: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Panel,
        }
    }
}
