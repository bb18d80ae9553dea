//! Terminal rendering of the display state.
//!
//! The panel shows four labeled fields (IP Address, Location, Timezone,
//! ISP) plus a map link for the record's coordinates. Row building is pure
//! so tests can assert on the text; printing and coloring stay in one
//! place.

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::geo::GeolocationRecord;
use crate::timezone::display_offset;
use crate::tracker::DisplayState;

const LABEL_WIDTH: usize = 12;

/// Builds the panel as (label, value) rows.
///
/// The timezone offset is computed at `at`; callers pass the current
/// instant, tests pass a pinned one.
fn panel_rows(state: &DisplayState, at: DateTime<Utc>) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();

    if let Some(error) = &state.error {
        rows.push(("Error", error.clone()));
    }

    match &state.record {
        Some(record) => {
            rows.push(("IP Address", record.ip.clone()));
            rows.push(("Location", record.location_line()));
            rows.push((
                "Timezone",
                display_offset(record.timezone.as_deref(), at),
            ));
            rows.push((
                "ISP",
                record
                    .isp
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| "-".to_string()),
            ));
            if let Some(map_url) = record.map_url() {
                rows.push(("Map", map_url));
            }
        }
        None => {
            for label in ["IP Address", "Location", "Timezone", "ISP"] {
                rows.push((label, "-".to_string()));
            }
        }
    }

    rows
}

/// Renders the display panel as plain text.
pub fn render_panel(state: &DisplayState, at: DateTime<Utc>) -> String {
    panel_rows(state, at)
        .into_iter()
        .map(|(label, value)| format!("{label:<LABEL_WIDTH$} {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints the panel with colored labels.
pub fn print_panel(state: &DisplayState, at: DateTime<Utc>) {
    for (label, value) in panel_rows(state, at) {
        let padded = format!("{label:<LABEL_WIDTH$}");
        let colored_label = if label == "Error" {
            padded.red().bold()
        } else {
            padded.cyan()
        };
        println!("{colored_label} {value}");
    }
    println!();
}

/// Serializes a record as one JSON object (the `--output json` path).
pub fn render_json(record: &GeolocationRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}
