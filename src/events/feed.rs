//! Events-tab key handling: plain list navigation.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// What: Handle one key on the Events tab.
pub fn handle_key(key: KeyEvent, app: &mut AppState) {
    let len = app.events_len();
    match key.code {
        KeyCode::Up => app.events_cursor = app.events_cursor.saturating_sub(1),
        KeyCode::Down => {
            app.events_cursor = (app.events_cursor + 1).min(len.saturating_sub(1));
        }
        KeyCode::Home => app.events_cursor = 0,
        _ => {}
    }
}
