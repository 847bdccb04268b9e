use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Tab};
use crate::ui::{AppLayout, Hit, MIN_HEIGHT, MIN_WIDTH};
use crate::viewport::Viewport;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Section switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_tab();
            } else {
                app.next_tab();
            }
        }
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::Char('1') => app.select_tab(Tab::Prayers),
        KeyCode::Char('2') => app.select_tab(Tab::Events),
        KeyCode::Char('3') => app.select_tab(Tab::About),

        // Drawer
        KeyCode::Char('d') | KeyCode::Char('m') => app.toggle_drawer(),
        KeyCode::Esc => app.close_drawer(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from("prayer_times.json");
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ if app.state.active_tab == Tab::Prayers => handle_prayers_key(app, key),
        _ => {}
    }
}

/// Keys that only apply on the Prayer Times section.
fn handle_prayers_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.picker_next(),
        KeyCode::Up | KeyCode::Char('k') => app.picker_prev(),
        KeyCode::Home => app.picker_first(),
        KeyCode::End => app.picker_last(),
        KeyCode::Char('x') | KeyCode::Backspace => app.clear_venue(),
        KeyCode::Char('w') => app.open_website(),
        KeyCode::Char('o') => app.open_maps(),
        _ => {}
    }
}

/// Handle mouse events against the layout of the last drawn frame.
///
/// Ignored while the terminal is too small to draw anything but the resize
/// message.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, area: Rect) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown if app.state.active_tab == Tab::Prayers => app.picker_next(),
        MouseEventKind::ScrollUp if app.state.active_tab == Tab::Prayers => app.picker_prev(),

        MouseEventKind::Down(MouseButton::Left) => {
            let layout = AppLayout::compute(area, app);
            match layout.hit(mouse.column, mouse.row) {
                Hit::Toggle => app.toggle_drawer(),
                Hit::Nav(tab) => app.select_tab(tab),
                Hit::Backdrop => app.close_drawer(),
                Hit::Main | Hit::Nothing => {}
            }
        }

        _ => {}
    }
}

/// Feed a terminal resize into the app.
pub fn handle_resize(app: &mut App, columns: u16, cell_width: u16) {
    app.on_resize(Viewport::from_columns(columns, cell_width));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Directory;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_number_keys_select_tab() {
        let mut app = App::new(Directory::builtin(), None);
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.state.active_tab, Tab::About);
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.state.active_tab, Tab::Events);
        handle_key_event(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.state.active_tab, Tab::Prayers);
    }

    #[test]
    fn test_tab_cycles() {
        let mut app = App::new(Directory::builtin(), None);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.state.active_tab, Tab::Events);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.state.active_tab, Tab::About);
    }

    #[test]
    fn test_picker_keys_only_on_prayers() {
        let mut app = App::new(Directory::builtin(), None);
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.state.selected_venue_id.as_deref(), Some("istaba"));

        handle_key_event(&mut app, key(KeyCode::Char('2')));
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.state.selected_venue_id.as_deref(), Some("istaba"));

        handle_key_event(&mut app, key(KeyCode::Char('1')));
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert!(app.state.selected_venue_id.is_none());
    }

    #[test]
    fn test_drawer_keys() {
        let mut app = App::new(Directory::builtin(), Some(Viewport::new(1280)));
        handle_key_event(&mut app, key(KeyCode::Char('d')));
        assert!(!app.state.drawer_open);
        handle_key_event(&mut app, key(KeyCode::Char('d')));
        assert!(app.state.drawer_open);
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.state.drawer_open);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = App::new(Directory::builtin(), None);
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(Directory::builtin(), None);
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn test_click_nav_and_backdrop_on_narrow() {
        let area = Rect::new(0, 0, 80, 24);
        let mut app = App::new(Directory::builtin(), Some(Viewport::from_columns(80, 8)));
        assert!(!app.state.drawer_open);

        // Toggle button opens the drawer.
        handle_mouse_event(&mut app, click(1, 0), area);
        assert!(app.state.drawer_open);

        // Clicking "About" selects it and collapses the drawer on a narrow viewport.
        let about_row = 1 + crate::ui::layout::NAV_OFFSET + 2;
        handle_mouse_event(&mut app, click(4, about_row), area);
        assert_eq!(app.state.active_tab, Tab::About);
        assert!(!app.state.drawer_open);

        // Backdrop click closes it.
        handle_mouse_event(&mut app, click(1, 0), area);
        handle_mouse_event(&mut app, click(60, 10), area);
        assert!(!app.state.drawer_open);
    }

    #[test]
    fn test_click_ignored_on_tiny_terminal() {
        let area = Rect::new(0, 0, 30, 10);
        let mut app = App::new(Directory::builtin(), Some(Viewport::from_columns(30, 8)));

        handle_mouse_event(&mut app, click(1, 0), area);
        assert!(!app.state.drawer_open);

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..click(5, 5)
        };
        handle_mouse_event(&mut app, scroll, area);
        assert!(app.state.selected_venue_id.is_none());
    }

    #[test]
    fn test_vim_and_menu_keys() {
        let mut app = App::new(Directory::builtin(), Some(Viewport::new(1280)));
        handle_key_event(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.state.active_tab, Tab::Events);
        handle_key_event(&mut app, key(KeyCode::Char('h')));
        assert_eq!(app.state.active_tab, Tab::Prayers);
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert!(!app.state.drawer_open);
    }

    #[test]
    fn test_resize_event_drives_drawer_when_mounted() {
        let mut app = App::new(Directory::builtin(), Some(Viewport::from_columns(80, 8)));
        app.mount();
        handle_resize(&mut app, 160, 8);
        assert!(app.state.drawer_open);
        handle_resize(&mut app, 100, 8);
        assert!(!app.state.drawer_open);
    }
}
