//! Timezone offset formatting.
//!
//! Turns an IANA timezone identifier into the display string the panel
//! shows, e.g. `"UTC -05:00"`. Offsets are computed at a concrete instant
//! because daylight-saving rules make them instant-dependent, not a static
//! per-zone constant.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

use crate::config::FALLBACK_TIMEZONE;
use crate::error_handling::OffsetError;

/// Sentinel rendered when a record carries an identifier no tzdb knows.
pub const OFFSET_SENTINEL: &str = "UTC ?";

/// Formats the UTC offset of `tz` at the instant `at`.
///
/// Output is the literal prefix `"UTC "` followed by a signed `±HH:MM`
/// offset, e.g. `"UTC -05:00"` or `"UTC +05:30"`.
///
/// # Errors
///
/// Returns [`OffsetError::UnknownZone`] if `tz` is not a known IANA
/// identifier. Never panics.
pub fn format_offset(tz: &str, at: DateTime<Utc>) -> Result<String, OffsetError> {
    let zone: Tz = tz
        .parse()
        .map_err(|_| OffsetError::UnknownZone(tz.to_string()))?;
    let offset_secs = at.with_timezone(&zone).offset().fix().local_minus_utc();
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.unsigned_abs();
    Ok(format!("UTC {}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60))
}

/// Renders the timezone field of a record for display.
///
/// Three record shapes reach this point:
/// - `None`: the fallback identifier (`"UTC"`) is substituted
/// - an IANA name (`"America/New_York"`): formatted at `at`
/// - a raw `±HH:MM` offset (the keyed provider reports offsets, not zone
///   names): rendered verbatim after the `"UTC "` prefix
///
/// An unrecognized identifier renders the `"UTC ?"` sentinel rather than
/// failing the whole display cycle.
pub fn display_offset(tz: Option<&str>, at: DateTime<Utc>) -> String {
    let zone = match tz {
        Some(z) if !z.is_empty() => z,
        _ => FALLBACK_TIMEZONE,
    };
    if is_raw_offset(zone) {
        return format!("UTC {}", zone);
    }
    format_offset(zone, at).unwrap_or_else(|_| OFFSET_SENTINEL.to_string())
}

/// True for strings already in signed `±HH:MM` offset form.
fn is_raw_offset(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 6
        && (bytes[0] == b'+' || bytes[0] == b'-')
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
        && bytes[3] == b':'
        && bytes[4].is_ascii_digit()
        && bytes[5].is_ascii_digit()
}
