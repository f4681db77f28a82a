use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::app::{App, InputMode};
use crate::router::Page;
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick(chrono::Utc::now().timestamp_millis()),
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // The panel captures list navigation while open
    if app.show_notifications {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => return app.notifications_nav_down(),
            KeyCode::Char('k') | KeyCode::Up => return app.notifications_nav_up(),
            KeyCode::Enter | KeyCode::Delete => return app.dismiss_notification(),
            KeyCode::Esc => return app.toggle_notifications_panel(),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Page shortcuts
        KeyCode::Char('1') => app.open(Page::Dashboard),
        KeyCode::Char('2') => app.open(Page::Practice),
        KeyCode::Char('3') => app.open(Page::Test),
        KeyCode::Char('4') => app.open(Page::Analytics),
        KeyCode::Char('p') => app.open(Page::Profile),
        KeyCode::Char('L') => app.open(Page::Login),
        KeyCode::Char('R') => app.open(Page::Register),

        // Location bar
        KeyCode::Char(':') | KeyCode::Char('/') => app.start_editing(),
        KeyCode::Char('b') | KeyCode::Backspace => app.go_back(),

        // UI state
        KeyCode::Char('s') => {
            // The sidebar only exists inside the layout
            if app.current().layout {
                app.store.toggle_sidebar();
            }
        }
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char('r') => app.toggle_loading(),
        KeyCode::Char('n') => app.toggle_notifications_panel(),
        KeyCode::Char('x') => app.dismiss_notification(),
        KeyCode::Char('c') => app.clear_notifications(),

        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Enter => app.submit_path(),
        KeyCode::Char(c) => {
            let byte_idx = char_to_byte_index(&app.path_input, app.path_cursor);
            app.path_input.insert(byte_idx, c);
            app.path_cursor += 1;
        }
        KeyCode::Backspace => {
            if app.path_cursor > 0 {
                app.path_cursor -= 1;
                let byte_idx = char_to_byte_index(&app.path_input, app.path_cursor);
                app.path_input.remove(byte_idx);
            }
        }
        KeyCode::Delete => {
            if app.path_cursor < app.path_input.chars().count() {
                let byte_idx = char_to_byte_index(&app.path_input, app.path_cursor);
                app.path_input.remove(byte_idx);
            }
        }
        KeyCode::Left => app.path_cursor = app.path_cursor.saturating_sub(1),
        KeyCode::Right => {
            app.path_cursor = (app.path_cursor + 1).min(app.path_input.chars().count());
        }
        KeyCode::Home => app.path_cursor = 0,
        KeyCode::End => app.path_cursor = app.path_input.chars().count(),
        _ => {}
    }
}
