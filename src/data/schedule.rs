//! Derivation of the rendered prayer grid and tab content.
//!
//! Everything here is a pure function of the view state and the directory,
//! so the TUI, `--print` and `--export` all show the same rows.

use serde::Serialize;

use super::venue::{Directory, Prayer, Venue};
use crate::app::{Tab, ViewState};

/// Shown when no venue is selected or the selection does not resolve.
pub const EMPTY_PROMPT: &str = "Select a masjid to view prayer times.";

/// Body of the Events tab.
pub const EVENTS_PLACEHOLDER: &str = "Events coming soon!";

/// Body of the About tab.
pub const ABOUT_TEXT: &str = "TampaMuslim.com exists to make it easy to keep up with prayer \
timings and happenings across the community. Stay tuned as we add more!";

/// One labeled row of the prayer grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerRow {
    pub label: String,
    pub time: String,
}

impl PrayerRow {
    fn new(label: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            time: time.into(),
        }
    }
}

/// Build the prayer grid for a venue.
///
/// The five daily prayers come straight from the scheduled times. The Jumuah
/// row prefers the first sermon time and falls back to the scheduled Jumuah
/// time. Extra sittings ("Jumuah 2", "Jumuah 3", ...) are listed only when the
/// venue is flagged for multiple sermons *and* has more than one entry.
pub fn prayer_rows(venue: &Venue) -> Vec<PrayerRow> {
    let mut rows: Vec<PrayerRow> = Prayer::ALL
        .iter()
        .map(|&prayer| match prayer {
            Prayer::Jumuah => {
                let primary = venue
                    .sermon_times
                    .first()
                    .map(String::as_str)
                    .unwrap_or_else(|| venue.scheduled_times.get(Prayer::Jumuah));
                PrayerRow::new(prayer.label(), primary)
            }
            _ => PrayerRow::new(prayer.label(), venue.scheduled_times.get(prayer)),
        })
        .collect();

    if venue.has_multiple_sermons && venue.sermon_times.len() > 1 {
        rows.extend(
            venue.sermon_times[1..]
                .iter()
                .enumerate()
                .map(|(i, time)| PrayerRow::new(format!("Jumuah {}", i + 2), time.as_str())),
        );
    }

    rows
}

/// What the main card shows for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<'a> {
    /// Prayers tab with a resolved venue.
    Schedule {
        venue: &'a Venue,
        rows: Vec<PrayerRow>,
    },
    /// Prayers tab with nothing (or an unknown id) selected.
    Empty,
    Events,
    About,
}

impl Content<'_> {
    /// Text body for the non-schedule variants.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Content::Schedule { .. } => None,
            Content::Empty => Some(EMPTY_PROMPT),
            Content::Events => Some(EVENTS_PLACEHOLDER),
            Content::About => Some(ABOUT_TEXT),
        }
    }
}

/// Derive the main card content from the view state.
pub fn content<'a>(state: &ViewState, directory: &'a Directory) -> Content<'a> {
    match state.active_tab {
        Tab::Prayers => match state
            .selected_venue_id
            .as_deref()
            .and_then(|id| directory.get(id))
        {
            Some(venue) => Content::Schedule {
                venue,
                rows: prayer_rows(venue),
            },
            None => Content::Empty,
        },
        Tab::Events => Content::Events,
        Tab::About => Content::About,
    }
}
