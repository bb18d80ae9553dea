//! Adapter for the keyed geo.ipify.org provider.
//!
//! The response nests fields under `location` and `as` objects, unlike the
//! flat ip-api.com shape. Failures surface as non-2xx HTTP statuses, so the
//! fetch path's status check covers them; there is no in-band channel to
//! parse here.
//!
//! Note the `location.timezone` field: it is a raw `±HH:MM` UTC offset, not
//! an IANA name. The record carries it as-is and the display layer renders
//! it verbatim.

use serde::Deserialize;

use crate::classify::ClassificationResult;
use crate::error_handling::LookupError;
use crate::geo::GeolocationRecord;

#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
    location: Option<IpifyLocation>,
    #[serde(rename = "as")]
    autonomous_system: Option<IpifyAs>,
    isp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpifyLocation {
    region: Option<String>,
    city: Option<String>,
    country: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    #[serde(rename = "postalCode")]
    postal_code: Option<String>,
    timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpifyAs {
    name: Option<String>,
}

/// Builds the lookup URL.
///
/// The endpoint distinguishes IP and domain queries by parameter name;
/// the classification already made that call. An empty query sends neither
/// parameter and the service resolves the caller's own address.
pub(super) fn lookup_url(
    base: &str,
    api_key: &str,
    query: &str,
    kind: ClassificationResult,
) -> String {
    if query.is_empty() {
        return format!("{base}?apiKey={api_key}");
    }
    let param = match kind {
        ClassificationResult::Domain => "domain",
        _ => "ipAddress",
    };
    format!("{base}?apiKey={api_key}&{param}={query}")
}

/// Adapts the nested ipify shape to a [`GeolocationRecord`].
pub(super) fn parse(body: &str) -> Result<GeolocationRecord, LookupError> {
    let response: IpifyResponse = serde_json::from_str(body)?;
    let location = response.location;
    // ISP field is preferred; the AS name is the fallback operator label
    let isp = response
        .isp
        .filter(|s| !s.is_empty())
        .or(response.autonomous_system.and_then(|a| a.name));
    Ok(GeolocationRecord {
        ip: response.ip,
        city: location.as_ref().and_then(|l| l.city.clone()),
        region: location.as_ref().and_then(|l| l.region.clone()),
        country_code: location.as_ref().and_then(|l| l.country.clone()),
        postal_code: location.as_ref().and_then(|l| l.postal_code.clone()),
        latitude: location.as_ref().and_then(|l| l.lat),
        longitude: location.as_ref().and_then(|l| l.lng),
        timezone: location.as_ref().and_then(|l| l.timezone.clone()),
        isp,
    })
}
