//! Geolocation lookup: normalized record, provider adapters, fetch path.
//!
//! Everything provider-specific lives behind [`Endpoint`]; the rest of the
//! crate sees only [`GeolocationRecord`].

mod fetch;
mod ip_api;
mod ipify;
mod provider;
mod record;

// Re-export public API
pub use fetch::fetch_geolocation;
pub use provider::{Endpoint, Provider};
pub use record::GeolocationRecord;
