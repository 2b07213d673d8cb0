//! Bindings that apply on every tab.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, AppTab, ContactField, Focus, Modal};

/// What: Handle tab-independent keys.
///
/// Inputs:
/// - `key`: Pressed key
/// - `app`: Application state
///
/// Output:
/// - `Some(true)` to exit, `Some(false)` when the key was consumed,
///   `None` to pass the key on to the active tab.
///
/// Details:
/// - `q` only quits outside text-entry contexts (search box, contact
///   fields), where the letter must type instead.
pub fn handle_key(key: KeyEvent, app: &mut AppState) -> Option<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(true),
            KeyCode::Char('l') => {
                app.toggle_language();
                return Some(false);
            }
            _ => {}
        }
    }
    match key.code {
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            Some(false)
        }
        KeyCode::F(2) => {
            app.tab = AppTab::Browse;
            Some(false)
        }
        KeyCode::F(3) => {
            app.tab = AppTab::Events;
            Some(false)
        }
        KeyCode::F(4) => {
            app.tab = AppTab::Contact;
            Some(false)
        }
        KeyCode::Char('q') if !in_text_entry(app) => Some(true),
        _ => None,
    }
}

/// What: Whether keystrokes currently go into a text field.
fn in_text_entry(app: &AppState) -> bool {
    match app.tab {
        AppTab::Browse => app.focus == Focus::Search,
        AppTab::Contact => matches!(
            app.contact.focus,
            ContactField::Name | ContactField::Email | ContactField::Message
        ),
        AppTab::Events => false,
    }
}
