//! Normalized geolocation record.
//!
//! Providers answer in different JSON shapes; everything downstream of the
//! adapter layer (display, tracker, JSON output) depends only on this
//! struct.

use serde::{Deserialize, Serialize};

use crate::config::MAP_ZOOM;

/// Geolocation metadata for one looked-up address.
///
/// Owned by the tracker for the duration of one display cycle and replaced
/// wholesale on each successful lookup; no field is ever mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeolocationRecord {
    /// The IP address the provider resolved (also echoes the query for
    /// IP-literal lookups).
    pub ip: String,
    /// City name.
    pub city: Option<String>,
    /// Region or state name.
    pub region: Option<String>,
    /// ISO country code.
    pub country_code: Option<String>,
    /// Postal/ZIP code.
    pub postal_code: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// IANA timezone name, or a raw `±HH:MM` offset for providers that
    /// report offsets instead of names.
    pub timezone: Option<String>,
    /// ISP or network operator name.
    pub isp: Option<String>,
}

impl GeolocationRecord {
    /// Builds the panel's location line from whichever administrative
    /// fields are present, e.g. `"Brooklyn, NY 10001"`.
    pub fn location_line(&self) -> String {
        let mut line = String::new();
        if let Some(city) = self.city.as_deref().filter(|s| !s.is_empty()) {
            line.push_str(city);
        }
        if let Some(region) = self.region.as_deref().filter(|s| !s.is_empty()) {
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(region);
        }
        if let Some(postal) = self.postal_code.as_deref().filter(|s| !s.is_empty()) {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(postal);
        }
        if line.is_empty() {
            line.push('-');
        }
        line
    }

    /// Latitude/longitude pair, if the provider reported both.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// OpenStreetMap marker URL for the record's coordinates.
    ///
    /// The map itself stays an external collaborator; this link is the whole
    /// extent of the integration.
    pub fn map_url(&self) -> Option<String> {
        self.coordinates().map(|(lat, lon)| {
            format!(
                "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}",
                zoom = MAP_ZOOM
            )
        })
    }
}
