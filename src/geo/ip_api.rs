//! Adapter for the free ip-api.com provider.
//!
//! The response is a flat JSON object. Failures come back in-band with
//! HTTP 200: `{"status": "fail", "message": "invalid query", ...}`.

use serde::Deserialize;

use crate::config::IP_API_FIELDS;
use crate::error_handling::LookupError;
use crate::geo::GeolocationRecord;

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    query: Option<String>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    zip: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
}

/// Builds the lookup URL. An empty query hits the bare endpoint, which
/// resolves the caller's own address (the initial-load behavior).
pub(super) fn lookup_url(base: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{base}/?fields={IP_API_FIELDS}")
    } else {
        format!("{base}/{query}?fields={IP_API_FIELDS}")
    }
}

/// Adapts the flat ip-api.com shape to a [`GeolocationRecord`].
pub(super) fn parse(body: &str) -> Result<GeolocationRecord, LookupError> {
    let response: IpApiResponse = serde_json::from_str(body)?;
    if response.status != "success" {
        return Err(LookupError::Provider(
            response
                .message
                .unwrap_or_else(|| format!("status '{}'", response.status)),
        ));
    }
    Ok(GeolocationRecord {
        ip: response.query.unwrap_or_default(),
        city: response.city,
        region: response.region_name,
        country_code: response.country_code,
        postal_code: response.zip,
        latitude: response.lat,
        longitude: response.lon,
        timezone: response.timezone,
        isp: response.isp,
    })
}
