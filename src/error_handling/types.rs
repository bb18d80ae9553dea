//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for a single geolocation lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The HTTP request to the provider failed (network, timeout, non-2xx).
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The provider answered 200 but reported a failure in-band
    /// (e.g. ip-api's `"status": "fail"` channel).
    #[error("Provider rejected the query: {0}")]
    Provider(String),

    /// The provider response body did not match the expected JSON shape.
    #[error("Malformed provider response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A keyed provider was selected without an API key.
    #[error("Provider '{0}' requires an API key (--api-key or {1})")]
    MissingApiKey(&'static str, &'static str),
}

/// Error from the timezone offset formatter.
///
/// The formatter must never crash the caller; an unrecognized identifier
/// comes back as this typed error and the display layer renders a sentinel.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OffsetError {
    /// The identifier is not a known IANA timezone.
    #[error("Unrecognized timezone identifier: {0}")]
    UnknownZone(String),
}

/// Categories of request failure, used for diagnostic logging.
///
/// A single lookup makes one HTTP GET; these categories separate the ways
/// that one request can fail so the log line says more than "error".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    // Specific HTTP status code errors (common ones for better debugging)
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestForbidden,           // 403 Forbidden - typically a key/quota problem
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    // Provider-level failures (HTTP succeeded, payload did not)
    ProviderReportedFailure,
    ProviderResponseMalformed,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::ProviderReportedFailure => "Provider reported failure",
            ErrorType::ProviderResponseMalformed => "Provider response malformed",
        }
    }
}
