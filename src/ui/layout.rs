//! Screen layout shared by rendering and mouse hit-testing.
//!
//! ```text
//! wide, drawer open            narrow, drawer open
//! ┌────────────────────────┐   ┌────────────────────────┐
//! │ [≡] brand              │   │ [≡] brand              │
//! ├───────┬────────────────┤   ├───────┬────────────────┤
//! │drawer │ main card      │   │drawer │░░ backdrop ░░░░│
//! │       │                │   │       │░░ (over card) ░│
//! ├───────┴────────────────┤   ├───────┴────────────────┤
//! │ status                 │   │ status                 │
//! └────────────────────────┘   └────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::app::{App, Tab};

/// Width of the drawer panel in columns.
pub const DRAWER_WIDTH: u16 = 30;

/// Width of the drawer toggle button in the brand bar.
pub const TOGGLE_WIDTH: u16 = 4;

/// Rows between the top of the drawer and its first nav entry
/// (border, title, subtitle, blank line).
pub const NAV_OFFSET: u16 = 4;

/// Regions of the screen for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub brand: Rect,
    pub toggle: Rect,
    /// Drawer panel, when open.
    pub drawer: Option<Rect>,
    /// Dimmed region covering the card while the drawer overlays it.
    pub backdrop: Option<Rect>,
    pub main: Rect,
    pub status: Rect,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Toggle,
    Nav(Tab),
    Backdrop,
    Main,
    Nothing,
}

impl AppLayout {
    /// Compute the layout for the current drawer state.
    ///
    /// On a narrow viewport the open drawer floats over the card instead of
    /// pushing it aside.
    pub fn compute(area: Rect, app: &App) -> Self {
        let [brand, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let toggle = Rect::new(brand.x, brand.y, TOGGLE_WIDTH.min(brand.width), brand.height);

        if !app.state.drawer_open {
            return Self {
                brand,
                toggle,
                drawer: None,
                backdrop: None,
                main: body,
                status,
            };
        }

        let drawer_width = DRAWER_WIDTH.min(body.width);
        if app.is_narrow() {
            let drawer = Rect::new(body.x, body.y, drawer_width, body.height);
            let backdrop = Rect::new(
                body.x + drawer_width,
                body.y,
                body.width - drawer_width,
                body.height,
            );
            Self {
                brand,
                toggle,
                drawer: Some(drawer),
                backdrop: Some(backdrop),
                main: body,
                status,
            }
        } else {
            let [drawer, main] =
                Layout::horizontal([Constraint::Length(drawer_width), Constraint::Min(0)])
                    .areas(body);
            Self {
                brand,
                toggle,
                drawer: Some(drawer),
                backdrop: None,
                main,
                status,
            }
        }
    }

    /// Drawer entry on a given row, if the drawer is open.
    pub fn tab_at(&self, row: u16) -> Option<Tab> {
        let drawer = self.drawer?;
        let first = drawer.y + NAV_OFFSET;
        let index = row.checked_sub(first)? as usize;
        Tab::ALL.get(index).copied()
    }

    /// Resolve a click position.
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let pos = Position::new(column, row);

        if self.toggle.contains(pos) {
            return Hit::Toggle;
        }
        if let Some(drawer) = self.drawer {
            if drawer.contains(pos) {
                return self.tab_at(row).map_or(Hit::Nothing, Hit::Nav);
            }
        }
        if self.backdrop.is_some_and(|b| b.contains(pos)) {
            return Hit::Backdrop;
        }
        if self.main.contains(pos) {
            return Hit::Main;
        }
        Hit::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Directory;
    use crate::viewport::Viewport;

    fn area() -> Rect {
        Rect::new(0, 0, 100, 30)
    }

    #[test]
    fn test_wide_drawer_pushes_main() {
        let app = App::new(Directory::builtin(), Some(Viewport::new(1280)));
        let layout = AppLayout::compute(area(), &app);

        let drawer = layout.drawer.unwrap();
        assert_eq!(drawer.width, DRAWER_WIDTH);
        assert_eq!(layout.main.x, DRAWER_WIDTH);
        assert!(layout.backdrop.is_none());
    }

    #[test]
    fn test_narrow_drawer_overlays_main() {
        let mut app = App::new(Directory::builtin(), Some(Viewport::new(640)));
        app.toggle_drawer();
        let layout = AppLayout::compute(area(), &app);

        assert_eq!(layout.main.x, 0);
        assert_eq!(layout.main.width, 100);
        let backdrop = layout.backdrop.unwrap();
        assert_eq!(backdrop.x, DRAWER_WIDTH);
        assert_eq!(backdrop.width, 100 - DRAWER_WIDTH);
    }

    #[test]
    fn test_closed_drawer() {
        let app = App::new(Directory::builtin(), Some(Viewport::new(640)));
        let layout = AppLayout::compute(area(), &app);
        assert!(layout.drawer.is_none());
        assert!(layout.backdrop.is_none());
        assert_eq!(layout.main, Rect::new(0, 1, 100, 28));
    }

    #[test]
    fn test_hit_testing() {
        let mut app = App::new(Directory::builtin(), Some(Viewport::new(640)));
        app.toggle_drawer();
        let layout = AppLayout::compute(area(), &app);
        let nav_row = layout.drawer.unwrap().y + NAV_OFFSET;

        assert_eq!(layout.hit(1, 0), Hit::Toggle);
        assert_eq!(layout.hit(5, nav_row), Hit::Nav(Tab::Prayers));
        assert_eq!(layout.hit(5, nav_row + 2), Hit::Nav(Tab::About));
        assert_eq!(layout.hit(5, nav_row + 3), Hit::Nothing);
        assert_eq!(layout.hit(60, 10), Hit::Backdrop);
        assert_eq!(layout.hit(60, 29), Hit::Nothing);
    }
}
