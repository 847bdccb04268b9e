//! Navigation drawer and its backdrop.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Tab};

/// Render the drawer panel with one entry per tab.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("tampamuslim.com", app.theme.brand)),
        Line::from(Span::styled(
            "Your community quick links",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
    ];

    lines.extend(Tab::ALL.iter().enumerate().map(|(i, tab)| {
        let style = if *tab == app.state.active_tab {
            app.theme.nav_active
        } else {
            app.theme.nav_inactive
        };
        Line::from(Span::styled(format!(" {}:{:<22}", i + 1, tab.label()), style))
    }));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Dim the part of the card left visible beside an overlaid drawer.
pub fn render_backdrop(frame: &mut Frame, app: &App, area: Rect) {
    frame.buffer_mut().set_style(area, app.theme.backdrop);
}
