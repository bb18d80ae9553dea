//! Tests for CLI argument parsing.

use clap::Parser;
use ip_tracker::{Config, OutputFormat, Provider};

#[test]
fn test_parse_no_arguments() {
    let config = Config::parse_from(["ip_tracker"]);
    assert!(config.queries.is_empty());
    assert_eq!(config.provider, Provider::IpApi);
    assert_eq!(config.output, OutputFormat::Panel);
    assert!(config.api_key.is_none());
    assert!(config.api_base.is_none());
}

#[test]
fn test_parse_positional_queries() {
    let config = Config::parse_from(["ip_tracker", "8.8.8.8", "example.com"]);
    assert_eq!(config.queries, vec!["8.8.8.8", "example.com"]);
}

#[test]
fn test_parse_stdin_indicator() {
    let config = Config::parse_from(["ip_tracker", "-"]);
    assert_eq!(config.queries, vec!["-"]);
}

#[test]
fn test_parse_provider_selection() {
    let config = Config::parse_from(["ip_tracker", "--provider", "ipify", "8.8.8.8"]);
    assert_eq!(config.provider, Provider::Ipify);

    let config = Config::parse_from(["ip_tracker", "--provider", "ip-api", "8.8.8.8"]);
    assert_eq!(config.provider, Provider::IpApi);
}

#[test]
fn test_parse_api_key_and_base() {
    let config = Config::parse_from([
        "ip_tracker",
        "--api-key",
        "at_secret",
        "--api-base",
        "http://localhost:8080/json",
    ]);
    assert_eq!(config.api_key.as_deref(), Some("at_secret"));
    assert_eq!(config.api_base.as_deref(), Some("http://localhost:8080/json"));
}

#[test]
fn test_parse_timeout_and_user_agent() {
    let config = Config::parse_from([
        "ip_tracker",
        "--timeout-seconds",
        "3",
        "--user-agent",
        "tracker-test/1.0",
    ]);
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.user_agent, "tracker-test/1.0");
}

#[test]
fn test_parse_output_format() {
    let config = Config::parse_from(["ip_tracker", "--output", "json"]);
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
fn test_parse_rejects_unknown_provider() {
    let result = Config::try_parse_from(["ip_tracker", "--provider", "nonsense"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_non_numeric_timeout() {
    let result = Config::try_parse_from(["ip_tracker", "--timeout-seconds", "soon"]);
    assert!(result.is_err());
}
