//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`layout`]: Screen regions, shared with mouse hit-testing
//! - [`card`]: Main card with the heading and the active tab's content
//! - [`drawer`]: Navigation drawer and backdrop
//! - [`common`]: Shared components (brand bar, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Brand (common::render_brand)         │
//! ├──────────┬───────────────────────────┤
//! │ Drawer   │ Card (card::render)       │
//! │ (drawer) │                           │
//! ├──────────┴───────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Drawn on top when applicable:
//!    - drawer::render_backdrop + drawer::render (narrow viewport)
//!    - common::render_help
//! ```

pub mod card;
pub mod common;
pub mod drawer;
pub mod layout;
pub mod theme;

pub use layout::{AppLayout, Hit};
pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 14;

/// Draw one full frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
            .intersection(area);
        frame.render_widget(paragraph, centered);
        return;
    }

    let layout = AppLayout::compute(area, app);

    common::render_brand(frame, app, layout.brand);
    card::render(frame, app, layout.main);

    if let Some(backdrop) = layout.backdrop {
        drawer::render_backdrop(frame, app, backdrop);
    }
    if let Some(drawer_area) = layout.drawer {
        drawer::render(frame, app, drawer_area);
    }

    common::render_status_bar(frame, app, layout.status);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}
