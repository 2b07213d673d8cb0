//! Key handling while a modal dialog is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};

/// What: Handle one key while a modal is open.
///
/// Details:
/// - Esc and Enter dismiss every dialog. Closing the thank-you modal also
///   resets the contact form, mirroring the site's redirect-after-thanks.
pub fn handle_key(key: KeyEvent, app: &mut AppState) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            if app.modal == Modal::ThankYou {
                app.contact = Default::default();
            }
            app.modal = Modal::None;
        }
        _ => {}
    }
}
