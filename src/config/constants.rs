//! Configuration constants.
//!
//! This module defines the constants used throughout the application:
//! provider endpoints, default timeouts, and display parameters.

/// Per-request timeout in seconds (default).
///
/// A hung provider must not leave the display stuck in a loading state, so
/// every request is bounded.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent header value for provider requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_tracker/", env!("CARGO_PKG_VERSION"));

/// Base URL of the free ip-api.com JSON endpoint.
///
/// The free tier is HTTP only; HTTPS requires a paid key there. The keyed
/// ipify provider is the HTTPS option.
pub const IP_API_BASE: &str = "http://ip-api.com/json";

/// Field list requested from ip-api.com.
///
/// Constraining the field list keeps the response shape stable across their
/// API revisions and includes the in-band `status`/`message` failure channel.
pub const IP_API_FIELDS: &str =
    "status,message,query,city,regionName,zip,countryCode,lat,lon,timezone,isp";

/// Base URL of the keyed geo.ipify.org endpoint.
pub const IPIFY_BASE: &str = "https://geo.ipify.org/api/v2/country,city";

/// Environment variable holding the ipify API key (read from `.env` too).
pub const IPIFY_API_KEY_ENV: &str = "IPIFY_API_KEY";

/// Fixed zoom level for generated map links.
pub const MAP_ZOOM: u8 = 13;

/// IANA identifier substituted when a record carries no timezone.
pub const FALLBACK_TIMEZONE: &str = "UTC";
