//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::data::{self, Content, Directory, Venue};
use crate::ui::Theme;
use crate::viewport::{Viewport, DEFAULT_BREAKPOINT};

/// The section shown in the main card, picked from the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Iqamah times for the selected venue.
    #[default]
    Prayers,
    /// Community events (placeholder).
    Events,
    /// Static about text.
    About,
}

impl Tab {
    /// All tabs in drawer order.
    pub const ALL: [Tab; 3] = [Tab::Prayers, Tab::Events, Tab::About];

    /// Cycle to the next tab.
    pub fn next(self) -> Self {
        match self {
            Tab::Prayers => Tab::Events,
            Tab::Events => Tab::About,
            Tab::About => Tab::Prayers,
        }
    }

    /// Cycle to the previous tab.
    pub fn prev(self) -> Self {
        match self {
            Tab::Prayers => Tab::About,
            Tab::Events => Tab::Prayers,
            Tab::About => Tab::Events,
        }
    }

    /// Label of the drawer entry.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Prayers => "Prayer Times",
            Tab::Events => "Events",
            Tab::About => "About",
        }
    }

    /// Heading of the main card.
    pub fn heading(&self) -> &'static str {
        match self {
            Tab::Prayers => "Prayer Times",
            Tab::Events => "Community Events",
            Tab::About => "About TampaMuslim",
        }
    }

    /// Parse a tab name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "prayers" | "prayer" => Some(Tab::Prayers),
            "events" => Some(Tab::Events),
            "about" => Some(Tab::About),
            _ => None,
        }
    }
}

/// The three pieces of UI state everything else is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Chosen venue key; resolved against the directory at render time.
    pub selected_venue_id: Option<String>,
    pub active_tab: Tab,
    pub drawer_open: bool,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub state: ViewState,

    directory: Directory,
    viewport: Option<Viewport>,
    breakpoint: u32,
    /// Whether resize events currently drive the drawer.
    listening: bool,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App over the given directory.
    ///
    /// The drawer starts open only when a viewport is present and at least
    /// [`DEFAULT_BREAKPOINT`] wide. Pass `None` for non-interactive rendering.
    pub fn new(directory: Directory, viewport: Option<Viewport>) -> Self {
        Self::with_breakpoint(directory, viewport, DEFAULT_BREAKPOINT)
    }

    /// Create a new App with a custom drawer breakpoint.
    pub fn with_breakpoint(
        directory: Directory,
        viewport: Option<Viewport>,
        breakpoint: u32,
    ) -> Self {
        let drawer_open = viewport.is_some_and(|v| v.is_wide(breakpoint));
        Self {
            running: true,
            show_help: false,
            state: ViewState {
                drawer_open,
                ..ViewState::default()
            },
            directory,
            viewport,
            breakpoint,
            listening: false,
            theme: Theme::default(),
            status_message: None,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Whether the viewport is known and narrower than the breakpoint.
    pub fn is_narrow(&self) -> bool {
        self.viewport.is_some_and(|v| !v.is_wide(self.breakpoint))
    }

    /// Set the selected venue. The id is not checked against the directory.
    pub fn select_venue(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(venue = %id, "select venue");
        self.state.selected_venue_id = Some(id);
    }

    /// Return to "no venue selected".
    pub fn clear_venue(&mut self) {
        self.state.selected_venue_id = None;
    }

    /// Resolve the selected venue, if any.
    pub fn selected_venue(&self) -> Option<&Venue> {
        self.state
            .selected_venue_id
            .as_deref()
            .and_then(|id| self.directory.get(id))
    }

    /// Switch tabs. On a narrow viewport the drawer is collapsed as well.
    pub fn select_tab(&mut self, tab: Tab) {
        tracing::debug!(?tab, "select tab");
        self.state.active_tab = tab;
        if self.is_narrow() {
            self.state.drawer_open = false;
        }
    }

    /// Switch to the next tab.
    pub fn next_tab(&mut self) {
        self.select_tab(self.state.active_tab.next());
    }

    /// Switch to the previous tab.
    pub fn prev_tab(&mut self) {
        self.select_tab(self.state.active_tab.prev());
    }

    pub fn toggle_drawer(&mut self) {
        self.state.drawer_open = !self.state.drawer_open;
    }

    /// Close the drawer (backdrop dismissal).
    pub fn close_drawer(&mut self) {
        self.state.drawer_open = false;
    }

    /// Start following viewport resizes.
    pub fn mount(&mut self) {
        self.listening = true;
    }

    /// Stop following viewport resizes.
    pub fn unmount(&mut self) {
        self.listening = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.listening
    }

    /// Record a new viewport width.
    ///
    /// While mounted the drawer is reset to match the width, discarding any
    /// manual toggle.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        if self.listening {
            self.state.drawer_open = viewport.is_wide(self.breakpoint);
            tracing::debug!(
                width = viewport.width,
                drawer_open = self.state.drawer_open,
                "viewport resized"
            );
        }
    }

    /// Heading of the main card.
    pub fn heading(&self) -> &'static str {
        self.state.active_tab.heading()
    }

    /// Content of the main card for the current state.
    pub fn content(&self) -> Content<'_> {
        data::content(&self.state, &self.directory)
    }

    /// Select the venue after the current one (or the first if none).
    pub fn picker_next(&mut self) {
        if self.directory.is_empty() {
            return;
        }
        let next = match self.selected_position() {
            Some(i) => (i + 1).min(self.directory.len() - 1),
            None => 0,
        };
        self.select_venue_at(next);
    }

    /// Select the venue before the current one (or the first if none).
    pub fn picker_prev(&mut self) {
        if self.directory.is_empty() {
            return;
        }
        let prev = self.selected_position().map_or(0, |i| i.saturating_sub(1));
        self.select_venue_at(prev);
    }

    /// Select the first venue.
    pub fn picker_first(&mut self) {
        if !self.directory.is_empty() {
            self.select_venue_at(0);
        }
    }

    /// Select the last venue.
    pub fn picker_last(&mut self) {
        if !self.directory.is_empty() {
            self.select_venue_at(self.directory.len() - 1);
        }
    }

    fn selected_position(&self) -> Option<usize> {
        self.state
            .selected_venue_id
            .as_deref()
            .and_then(|id| self.directory.position(id))
    }

    fn select_venue_at(&mut self, index: usize) {
        if let Some(id) = self.directory.venues().get(index).map(|v| v.id.clone()) {
            self.select_venue(id);
        }
    }

    /// Website of the selected venue.
    pub fn website_url(&self) -> Option<&str> {
        self.selected_venue().map(|v| v.website.as_str())
    }

    /// Map search link for the selected venue.
    pub fn maps_url(&self) -> Option<String> {
        self.selected_venue().map(|v| data::maps_url(&v.address))
    }

    /// Open the selected venue's website in the default browser.
    pub fn open_website(&mut self) {
        let url = self.website_url().map(str::to_string);
        self.open_link("website", url);
    }

    /// Open the selected venue's address in a map search.
    pub fn open_maps(&mut self) {
        let url = self.maps_url();
        self.open_link("map", url);
    }

    fn open_link(&mut self, kind: &str, url: Option<String>) {
        let Some(url) = url else {
            self.set_status_message("Select a masjid first".to_string());
            return;
        };
        match open::that_detached(&url) {
            Ok(()) => {
                tracing::info!(%url, "opened {kind} link");
                self.set_status_message(format!("Opened {}", url));
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to open {kind} link");
                self.set_status_message(format!("Could not open {}: {}", kind, e));
            }
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the directory and every venue's derived schedule to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        use std::io::Write;

        let venues: Vec<serde_json::Value> = self
            .directory
            .iter()
            .map(|v| {
                serde_json::json!({
                    "id": v.id,
                    "name": v.name,
                    "address": v.address,
                    "website": v.website,
                    "maps": data::maps_url(&v.address),
                    "has_multiple_sermons": v.has_multiple_sermons,
                    "sermon_times": v.sermon_times,
                    "rows": data::prayer_rows(v),
                })
            })
            .collect();

        let export = serde_json::json!({
            "selected": self.state.selected_venue_id,
            "venues": venues,
        });

        let json = serde_json::to_string_pretty(&export)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> Option<Viewport> {
        Some(Viewport::new(1280))
    }

    fn narrow() -> Option<Viewport> {
        Some(Viewport::new(600))
    }

    #[test]
    fn test_initial_drawer_follows_width() {
        assert!(App::new(Directory::builtin(), wide()).state.drawer_open);
        assert!(App::new(Directory::builtin(), Some(Viewport::new(1024))).state.drawer_open);
        assert!(!App::new(Directory::builtin(), narrow()).state.drawer_open);
        assert!(!App::new(Directory::builtin(), None).state.drawer_open);
    }

    #[test]
    fn test_initial_state() {
        let app = App::new(Directory::builtin(), wide());
        assert_eq!(app.state.active_tab, Tab::Prayers);
        assert!(app.state.selected_venue_id.is_none());
        assert!(app.selected_venue().is_none());
        assert!(!app.is_mounted());
    }

    #[test]
    fn test_select_tab_updates_tab() {
        for viewport in [wide(), narrow(), None] {
            let mut app = App::new(Directory::builtin(), viewport);
            for open in [true, false] {
                app.state.drawer_open = open;
                for tab in Tab::ALL {
                    app.select_tab(tab);
                    assert_eq!(app.state.active_tab, tab);
                }
            }
        }
    }

    #[test]
    fn test_select_tab_closes_drawer_when_narrow() {
        let mut app = App::new(Directory::builtin(), narrow());
        app.state.drawer_open = true;
        app.select_tab(Tab::About);
        assert!(!app.state.drawer_open);
    }

    #[test]
    fn test_select_tab_keeps_drawer_when_wide() {
        let mut app = App::new(Directory::builtin(), wide());
        app.select_tab(Tab::Events);
        assert!(app.state.drawer_open);

        app.state.drawer_open = false;
        app.select_tab(Tab::About);
        assert!(!app.state.drawer_open);
    }

    #[test]
    fn test_select_tab_without_viewport_keeps_drawer() {
        let mut app = App::new(Directory::builtin(), None);
        app.state.drawer_open = true;
        app.select_tab(Tab::Events);
        assert!(app.state.drawer_open);
    }

    #[test]
    fn test_toggle_drawer_twice() {
        let mut app = App::new(Directory::builtin(), wide());
        let before = app.state.drawer_open;
        app.toggle_drawer();
        assert_ne!(app.state.drawer_open, before);
        app.toggle_drawer();
        assert_eq!(app.state.drawer_open, before);
    }

    #[test]
    fn test_close_drawer() {
        let mut app = App::new(Directory::builtin(), wide());
        app.close_drawer();
        assert!(!app.state.drawer_open);
        app.close_drawer();
        assert!(!app.state.drawer_open);
    }

    #[test]
    fn test_resize_overrides_manual_toggle() {
        let mut app = App::new(Directory::builtin(), wide());
        app.mount();

        app.toggle_drawer();
        assert!(!app.state.drawer_open);
        app.on_resize(Viewport::new(1300));
        assert!(app.state.drawer_open);

        app.on_resize(Viewport::new(700));
        assert!(!app.state.drawer_open);
        app.toggle_drawer();
        app.on_resize(Viewport::new(710));
        assert!(!app.state.drawer_open);
    }

    #[test]
    fn test_resize_ignored_when_unmounted() {
        let mut app = App::new(Directory::builtin(), wide());
        app.on_resize(Viewport::new(500));
        assert!(app.state.drawer_open);

        app.mount();
        app.unmount();
        app.on_resize(Viewport::new(400));
        assert!(app.state.drawer_open);
        // The width is still recorded for tab selection.
        assert!(app.is_narrow());
    }

    #[test]
    fn test_select_venue_not_validated() {
        let mut app = App::new(Directory::builtin(), None);
        app.select_venue("unknown");
        assert_eq!(app.state.selected_venue_id.as_deref(), Some("unknown"));
        assert!(app.selected_venue().is_none());
        assert_eq!(app.content(), Content::Empty);
        assert!(app.maps_url().is_none());

        app.select_venue("qassam");
        assert_eq!(app.selected_venue().unwrap().name, "Masjid Al-Qassam (ICT)");

        app.clear_venue();
        assert!(app.selected_venue().is_none());
    }

    #[test]
    fn test_heading_per_tab() {
        let mut app = App::new(Directory::builtin(), None);
        assert_eq!(app.heading(), "Prayer Times");
        app.select_tab(Tab::Events);
        assert_eq!(app.heading(), "Community Events");
        app.select_tab(Tab::About);
        assert_eq!(app.heading(), "About TampaMuslim");
    }

    #[test]
    fn test_picker_navigation() {
        let mut app = App::new(Directory::builtin(), None);
        app.picker_prev();
        assert_eq!(app.state.selected_venue_id.as_deref(), Some("istaba"));

        app.picker_next();
        assert_eq!(app.state.selected_venue_id.as_deref(), Some("isonet"));

        app.picker_last();
        app.picker_next();
        assert_eq!(app.state.selected_venue_id.as_deref(), Some("brndon"));

        app.picker_first();
        assert_eq!(app.state.selected_venue_id.as_deref(), Some("istaba"));

        app.select_venue("missing");
        app.picker_next();
        assert_eq!(app.state.selected_venue_id.as_deref(), Some("istaba"));
    }

    #[test]
    fn test_links_for_selected_venue() {
        let mut app = App::new(Directory::builtin(), None);
        app.select_venue("isonet");
        assert_eq!(app.website_url(), Some("https://www.isonet.org/"));
        assert_eq!(
            app.maps_url().as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=15830%20Morris%20Bridge%20Rd%2C%20Tampa%2C%20FL")
        );
    }

    #[test]
    fn test_open_link_without_selection() {
        let mut app = App::new(Directory::builtin(), None);
        app.open_website();
        assert_eq!(app.get_status_message(), Some("Select a masjid first"));
    }

    #[test]
    fn test_tab_from_name() {
        assert_eq!(Tab::from_name("Prayers"), Some(Tab::Prayers));
        assert_eq!(Tab::from_name("events"), Some(Tab::Events));
        assert_eq!(Tab::from_name("ABOUT"), Some(Tab::About));
        assert_eq!(Tab::from_name("home"), None);
    }

    #[test]
    fn test_export_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let mut app = App::new(Directory::builtin(), None);
        app.select_venue("istaba");
        app.export_state(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["selected"], "istaba");
        assert_eq!(value["venues"].as_array().unwrap().len(), 4);
        assert_eq!(value["venues"][0]["rows"][6]["label"], "Jumuah 2");
        assert_eq!(value["venues"][2]["rows"].as_array().unwrap().len(), 6);
    }
}
