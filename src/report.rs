//! Plain-text rendering for non-interactive output (`--print`).

use std::fmt::Write;

use crate::app::App;
use crate::data::{self, Content};

/// Render the heading and current card content as plain text.
pub fn render_text(app: &App) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", app.heading());
    let _ = writeln!(out, "{}", "=".repeat(app.heading().len()));

    match app.content() {
        Content::Schedule { venue, rows } => {
            let _ = writeln!(out, "{}", venue.name);
            let _ = writeln!(out, "{}", venue.address);
            let _ = writeln!(out);
            for row in &rows {
                let _ = writeln!(out, "{:<10} {}", row.label, row.time);
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "Website: {}", venue.website);
            let _ = writeln!(out, "Maps:    {}", data::maps_url(&venue.address));
        }
        other => {
            let _ = writeln!(out, "{}", other.message().unwrap_or_default());
        }
    }

    out
}
