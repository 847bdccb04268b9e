//! Main card: heading plus the content of the active tab.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::{App, Tab};
use crate::data::{Content, PrayerRow, Venue};

/// Render the card for the active tab.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", app.heading()),
            app.theme.heading,
        )))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.state.active_tab == Tab::Prayers {
        let [picker, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
        render_picker(frame, app, picker);
        render_content(frame, app, app.content(), body);
    } else {
        render_content(frame, app, app.content(), inner);
    }
}

/// The venue selector line ("Masjid: ...").
fn render_picker(frame: &mut Frame, app: &App, area: Rect) {
    let value = match app.selected_venue() {
        Some(venue) => Span::styled(venue.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        None => Span::styled(
            "Choose a masjid...",
            Style::default().add_modifier(Modifier::DIM),
        ),
    };

    let line = Line::from(vec![
        Span::styled(" Masjid ", app.theme.prayer_name),
        Span::raw("◂ "),
        value,
        Span::raw(" ▸"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_content(frame: &mut Frame, app: &App, content: Content<'_>, area: Rect) {
    match content {
        Content::Schedule { venue, rows } => render_schedule(frame, app, venue, &rows, area),
        other => {
            let text = other.message().unwrap_or_default();
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" {}", text),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
            .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_schedule(frame: &mut Frame, app: &App, venue: &Venue, rows: &[PrayerRow], area: Rect) {
    let [info, grid, actions] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(rows.len() as u16 + 1),
        Constraint::Length(2),
    ])
    .areas(area);

    let info_lines = vec![
        Line::from(Span::styled(
            format!(" {}", venue.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", venue.address),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(info_lines), info);

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(format!(" {}", r.label)).style(app.theme.prayer_name),
                Cell::from(r.time.clone()).style(app.theme.prayer_time),
            ])
        })
        .collect();
    let table = Table::new(table_rows, [Constraint::Length(12), Constraint::Min(10)]);
    frame.render_widget(table, grid);

    let action_line = Line::from(vec![
        Span::raw(" "),
        Span::styled("[w] Visit Website", app.theme.action),
        Span::raw("   "),
        Span::styled("[o] Open in Maps", app.theme.action),
    ]);
    frame.render_widget(Paragraph::new(vec![Line::from(""), action_line]), actions);
}
