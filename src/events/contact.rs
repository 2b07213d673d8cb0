//! Contact-tab key handling: field editing, validation, and submission.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::sources::contact::validate;
use crate::state::{AppState, ContactField, ContactFormState};

/// What: Handle one key on the Contact tab.
///
/// Details:
/// - Tab/Shift+Tab (and Enter on single-line fields) move between fields.
///   Ctrl+S validates and, when clean, hands the form to the submission
///   worker; validation errors stay on screen until the next attempt.
pub fn handle_key(
    key: KeyEvent,
    app: &mut AppState,
    contact_tx: &mpsc::UnboundedSender<ContactFormState>,
) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            try_submit(app, contact_tx);
        }
        return;
    }
    match key.code {
        KeyCode::Tab => app.contact.focus = app.contact.focus.next(),
        KeyCode::BackTab => app.contact.focus = app.contact.focus.prev(),
        KeyCode::Enter => match app.contact.focus {
            // Enter inside the message body inserts a line break.
            ContactField::Message => app.contact.message.push('\n'),
            _ => app.contact.focus = app.contact.focus.next(),
        },
        KeyCode::Char(c) => field_mut(app).push(c),
        KeyCode::Backspace => {
            field_mut(app).pop();
        }
        _ => {}
    }
}

/// What: The string behind the currently focused field.
fn field_mut(app: &mut AppState) -> &mut String {
    match app.contact.focus {
        ContactField::Name => &mut app.contact.name,
        ContactField::Email => &mut app.contact.email,
        ContactField::Message => &mut app.contact.message,
    }
}

/// What: Validate and dispatch the form to the submission worker.
fn try_submit(app: &mut AppState, contact_tx: &mpsc::UnboundedSender<ContactFormState>) {
    if app.contact.submitting {
        return;
    }
    app.contact.errors = validate(&app.contact);
    if !app.contact.errors.is_empty() {
        tracing::debug!(errors = app.contact.errors.len(), "contact form invalid");
        return;
    }
    app.contact.submitting = true;
    let _ = contact_tx.send(app.contact.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppTab;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_s() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    #[test]
    /// What: Typing lands in the focused field and Tab advances
    ///
    /// - Input: Type into name, Tab, type into email
    /// - Output: Both fields hold their text
    fn contact_typing_follows_focus() {
        let mut app = AppState::default();
        app.tab = AppTab::Contact;
        let (tx, _rx) = mpsc::unbounded_channel();
        for c in "Ana".chars() {
            handle_key(press(KeyCode::Char(c)), &mut app, &tx);
        }
        handle_key(press(KeyCode::Tab), &mut app, &tx);
        handle_key(press(KeyCode::Char('a')), &mut app, &tx);
        assert_eq!(app.contact.name, "Ana");
        assert_eq!(app.contact.email, "a");
    }

    #[test]
    /// What: Submission is blocked until validation passes
    ///
    /// - Input: Ctrl+S on an empty form, then on a filled one
    /// - Output: Errors and no send first; then a queued submission
    fn contact_submit_gated_by_validation() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_key(ctrl_s(), &mut app, &tx);
        assert_eq!(app.contact.errors.len(), 3);
        assert!(rx.try_recv().is_err());
        assert!(!app.contact.submitting);

        app.contact.name = "Ana".into();
        app.contact.email = "ana@risingflow.com.br".into();
        app.contact.message = "olá".into();
        handle_key(ctrl_s(), &mut app, &tx);
        assert!(app.contact.errors.is_empty());
        assert!(app.contact.submitting);
        let sent = rx.try_recv().expect("submission queued");
        assert_eq!(sent.name, "Ana");
    }

    #[test]
    /// What: A submission in flight cannot be double-sent
    ///
    /// - Input: Ctrl+S twice on a valid form
    /// - Output: Only one message on the channel
    fn contact_no_double_submit() {
        let mut app = AppState::default();
        app.contact.name = "Ana".into();
        app.contact.email = "ana@mail.example".into();
        app.contact.message = "hi".into();
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_key(ctrl_s(), &mut app, &tx);
        handle_key(ctrl_s(), &mut app, &tx);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
