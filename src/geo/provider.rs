//! Provider selection and the endpoint adapter.
//!
//! One core talks to whichever provider is configured through a single
//! adapter seam: build the lookup URL, then parse the provider's JSON
//! shape into the normalized record. Adding a provider means adding a
//! variant and its two functions, nothing else.

use clap::ValueEnum;

use crate::classify::ClassificationResult;
use crate::config::{Config, IPIFY_API_KEY_ENV, IPIFY_BASE, IP_API_BASE};
use crate::error_handling::LookupError;
use crate::geo::{ip_api, ipify, GeolocationRecord};

/// The upstream geolocation APIs this tool can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    /// ip-api.com: free, no key, flat JSON response (default)
    IpApi,
    /// geo.ipify.org: keyed, HTTPS, nested JSON response
    Ipify,
}

impl Provider {
    /// Returns the provider's short name as used in logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::IpApi => "ip-api",
            Provider::Ipify => "ipify",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved provider endpoint: which API, where, and with what key.
#[derive(Debug, Clone)]
pub struct Endpoint {
    provider: Provider,
    base: String,
    api_key: Option<String>,
}

impl Endpoint {
    /// Resolves the endpoint from configuration.
    ///
    /// The base URL comes from the provider default unless overridden, and
    /// the API key falls back to the environment (which dotenvy may have
    /// populated from a `.env` file).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingApiKey`] if a keyed provider is
    /// selected and no key can be found.
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        let base = config.api_base.clone().unwrap_or_else(|| {
            match config.provider {
                Provider::IpApi => IP_API_BASE,
                Provider::Ipify => IPIFY_BASE,
            }
            .to_string()
        });
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(IPIFY_API_KEY_ENV).ok())
            .filter(|k| !k.is_empty());
        if config.provider == Provider::Ipify && api_key.is_none() {
            return Err(LookupError::MissingApiKey(
                Provider::Ipify.as_str(),
                IPIFY_API_KEY_ENV,
            ));
        }
        Ok(Self {
            provider: config.provider,
            base,
            api_key,
        })
    }

    /// The provider behind this endpoint.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Builds the templated GET URL for one query.
    pub fn lookup_url(&self, query: &str, kind: ClassificationResult) -> String {
        match self.provider {
            Provider::IpApi => ip_api::lookup_url(&self.base, query),
            Provider::Ipify => ipify::lookup_url(
                &self.base,
                self.api_key.as_deref().unwrap_or_default(),
                query,
                kind,
            ),
        }
    }

    /// Adapts a provider response body to the normalized record.
    pub fn parse(&self, body: &str) -> Result<GeolocationRecord, LookupError> {
        match self.provider {
            Provider::IpApi => ip_api::parse(body),
            Provider::Ipify => ipify::parse(body),
        }
    }
}
