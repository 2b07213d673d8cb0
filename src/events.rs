//! Keyboard event handling, split per tab.

mod browse;
mod contact;
mod feed;
mod global;
mod modals;

use crossterm::event::{Event as CEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{AppState, AppTab, ContactFormState, LoadInput};

pub use browse::request_game_load;

/// What: Handle one terminal event against the current state.
///
/// Inputs:
/// - `ev`: Raw crossterm event
/// - `app`: Application state
/// - `load_tx`: Channel issuing catalog load requests
/// - `contact_tx`: Channel issuing contact submissions
///
/// Output:
/// - `true` when the application should exit.
///
/// Details:
/// - Modals swallow keys first; otherwise keys route to the active tab
///   after the global bindings get a chance.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    load_tx: &mpsc::UnboundedSender<LoadInput>,
    contact_tx: &mpsc::UnboundedSender<ContactFormState>,
) -> bool {
    let CEvent::Key(key) = ev else {
        return false;
    };
    if key.kind == KeyEventKind::Release {
        return false;
    }
    handle_key(key, app, load_tx, contact_tx)
}

/// What: Route one key press through modal, global, and tab handlers.
fn handle_key(
    key: KeyEvent,
    app: &mut AppState,
    load_tx: &mpsc::UnboundedSender<LoadInput>,
    contact_tx: &mpsc::UnboundedSender<ContactFormState>,
) -> bool {
    if app.modal.is_open() {
        modals::handle_key(key, app);
        return false;
    }
    if let Some(exit) = global::handle_key(key, app) {
        return exit;
    }
    match app.tab {
        AppTab::Browse => browse::handle_key(key, app, load_tx),
        AppTab::Events => feed::handle_key(key, app),
        AppTab::Contact => contact::handle_key(key, app, contact_tx),
    }
    false
}
