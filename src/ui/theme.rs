//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::settings::ThemeChoice;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for the brand bar.
    pub brand: Style,
    /// Style for the card heading.
    pub heading: Style,
    /// Style for prayer names in the grid.
    pub prayer_name: Style,
    /// Style for prayer times in the grid.
    pub prayer_time: Style,
    /// Style for the active drawer entry.
    pub nav_active: Style,
    /// Style for inactive drawer entries.
    pub nav_inactive: Style,
    /// Style for the backdrop behind an overlaid drawer.
    pub backdrop: Style,
    /// Style for link actions.
    pub action: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Green,
            border: Color::Gray,
            brand: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            heading: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            prayer_name: Style::default().fg(Color::Gray),
            prayer_time: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            nav_active: Style::default().bg(Color::DarkGray).fg(Color::Green).add_modifier(Modifier::BOLD),
            nav_inactive: Style::default().fg(Color::Gray),
            backdrop: Style::default().bg(Color::Black).add_modifier(Modifier::DIM),
            action: Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            brand: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            heading: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            prayer_name: Style::default().fg(Color::DarkGray),
            prayer_time: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            nav_active: Style::default().bg(Color::LightBlue).fg(Color::Black).add_modifier(Modifier::BOLD),
            nav_inactive: Style::default().fg(Color::DarkGray),
            backdrop: Style::default().bg(Color::Gray).add_modifier(Modifier::DIM),
            action: Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a configured theme choice.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
