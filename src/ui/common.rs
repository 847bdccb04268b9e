//! Common UI components shared across views.
//!
//! This module contains the brand bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Tab};

/// Render the brand bar with the drawer toggle button.
pub fn render_brand(frame: &mut Frame, app: &App, area: Rect) {
    let toggle = if app.state.drawer_open { "[×]" } else { "[≡]" };
    let line = Line::from(vec![
        Span::styled(toggle, Style::default().fg(app.theme.highlight)),
        Span::raw(" "),
        Span::styled("TampaMuslim.com", app.theme.brand),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the active section and context-sensitive controls, or a
/// temporary status message when one is pending.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.state.active_tab {
        Tab::Prayers if app.selected_venue().is_some() => {
            "↑↓:masjid w:website o:maps d:drawer Tab:section ?:help q:quit"
        }
        Tab::Prayers => "↑↓:masjid d:drawer Tab:section ?:help q:quit",
        Tab::Events | Tab::About => "d:drawer Tab:section ?:help q:quit",
    };

    let status = format!(" {} | {}", app.state.active_tab.label(), controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.heading)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Sections",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  1/2/3       Prayer Times/Events/About"),
        Line::from("  Tab ←/→ h/l Next/previous section"),
        Line::from("  d/m         Toggle drawer"),
        Line::from("  Esc         Close drawer"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Prayer Times",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Choose masjid"),
        Line::from("  Home/End    First/last masjid"),
        Line::from("  x           Clear selection"),
        Line::from("  w           Visit website"),
        Line::from("  o           Open in maps"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 44u16.min(area.width.saturating_sub(4));
    let help_height = 25u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
