//! Handlers for worker results arriving on the event loop.

use tracing::{debug, info};

use crate::i18n::t;
use crate::logic::CatalogSession;
use crate::sources::events::EventsFeed;
use crate::state::{AppState, CatalogStatus, Focus, LoadResults, Modal};

/// What: Apply a catalog load result, discarding stale responses.
///
/// Inputs:
/// - `app`: Application state
/// - `results`: Loader output with the echoed request token
///
/// Details:
/// - A token older than `latest_load_id` belongs to a superseded selection
///   and is dropped, so slow fetches cannot clobber newer state. A fresh
///   but empty catalog surfaces the "no songs available" state.
pub fn handle_load_results(app: &mut AppState, results: LoadResults) {
    if results.id != app.latest_load_id {
        debug!(
            stale = results.id,
            latest = app.latest_load_id,
            game = %results.game,
            "discarding stale catalog load"
        );
        return;
    }
    info!(
        game = %results.game,
        categories = results.categories.len(),
        "catalog load applied"
    );
    let session = CatalogSession::new(results.game, results.categories, results.declared_order);
    app.catalog_status = if session.catalog_is_empty() {
        CatalogStatus::Empty
    } else {
        CatalogStatus::Ready
    };
    app.session = Some(session);
    app.category_cursor = 0;
    app.focus = Focus::Search;
}

/// What: Apply a contact submission outcome.
///
/// Details:
/// - Success opens the thank-you modal; failure opens an alert carrying the
///   processor's error text (or the generic localized message when there is
///   none). The form stays filled on failure so the user can retry.
pub fn handle_contact_result(app: &mut AppState, outcome: Result<(), String>) {
    app.contact.submitting = false;
    match outcome {
        Ok(()) => app.modal = Modal::ThankYou,
        Err(message) => {
            let text = if message.trim().is_empty() {
                t(app, "contact.failed")
            } else {
                message
            };
            app.modal = Modal::Alert(text);
        }
    }
}

/// What: Install the loaded community event feed.
pub fn handle_feed_results(app: &mut AppState, feed: EventsFeed) {
    info!(
        upcoming = feed.upcoming.len(),
        past = feed.past.len(),
        "event feed applied"
    );
    app.events = feed;
    app.events_loaded = true;
    app.events_cursor = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Song};

    fn results(id: u64, songs: usize) -> LoadResults {
        LoadResults {
            id,
            game: "Dance Dance Revolution".to_string(),
            categories: vec![Category {
                name: "Anime Channel".to_string(),
                songs: (0..songs)
                    .map(|i| Song {
                        title: Some(format!("Song {i}")),
                        ..Default::default()
                    })
                    .collect(),
            }],
            declared_order: true,
        }
    }

    #[test]
    /// What: Stale load results are dropped, current ones applied
    ///
    /// - Input: Latest id 2; results with id 1 then id 2
    /// - Output: First ignored, second installs the session
    fn handlers_stale_load_discarded() {
        let mut app = AppState::default();
        app.latest_load_id = 2;
        app.catalog_status = CatalogStatus::Loading;
        handle_load_results(&mut app, results(1, 3));
        assert!(app.session.is_none());
        assert_eq!(app.catalog_status, CatalogStatus::Loading);
        handle_load_results(&mut app, results(2, 3));
        assert!(app.session.is_some());
        assert_eq!(app.catalog_status, CatalogStatus::Ready);
        assert_eq!(app.focus, Focus::Search);
    }

    #[test]
    /// What: An empty catalog lands in the Empty status
    ///
    /// - Input: Matching-token result whose only category has no songs
    /// - Output: Status Empty with a session installed
    fn handlers_empty_catalog_status() {
        let mut app = AppState::default();
        app.latest_load_id = 1;
        handle_load_results(&mut app, results(1, 0));
        assert_eq!(app.catalog_status, CatalogStatus::Empty);
        assert!(app.session.is_some());
    }

    #[test]
    /// What: Contact outcomes map to the right modal
    ///
    /// - Input: Ok, an error with text, and an error with blank text
    /// - Output: ThankYou, Alert with the text, Alert with the generic key
    fn handlers_contact_outcomes() {
        let mut app = AppState::default();
        app.contact.submitting = true;
        handle_contact_result(&mut app, Ok(()));
        assert_eq!(app.modal, Modal::ThankYou);
        assert!(!app.contact.submitting);

        handle_contact_result(&mut app, Err("quota exceeded".to_string()));
        assert_eq!(app.modal, Modal::Alert("quota exceeded".to_string()));

        handle_contact_result(&mut app, Err("  ".to_string()));
        assert!(matches!(app.modal, Modal::Alert(_)));
    }
}
