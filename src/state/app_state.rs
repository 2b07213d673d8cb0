//! Central [`AppState`] container shared by the event, networking, and UI
//! layers.

use std::path::PathBuf;

use ratatui::widgets::ListState;

use crate::i18n::{self, TranslationMap};
use crate::logic::CatalogSession;
use crate::net::DataRoot;
use crate::sources::events::EventsFeed;
use crate::state::modal::Modal;
use crate::state::types::{AppTab, CatalogStatus, ContactFormState, Focus};

/// Global application state.
///
/// Mutated by input handlers and worker results; rendered declaratively
/// every frame. Nothing here is persisted: the browser is stateless across
/// runs, like the site it replaces.
#[derive(Debug)]
pub struct AppState {
    /// Active top-level tab.
    pub tab: AppTab,
    /// Focused pane within the Browse tab.
    pub focus: Focus,
    /// Active modal dialog, if any.
    pub modal: Modal,

    // Browse tab
    /// Cursor into the game selector list.
    pub game_cursor: usize,
    /// List widget state for the game selector.
    pub games_state: ListState,
    /// Search session for the selected game; `None` until a game is picked.
    pub session: Option<CatalogSession>,
    /// Lifecycle of the current catalog load.
    pub catalog_status: CatalogStatus,
    /// Cursor into the visible category list.
    pub category_cursor: usize,
    /// Identifier of the newest catalog load request issued.
    pub latest_load_id: u64,
    /// Next load identifier to allocate.
    pub next_load_id: u64,

    // Events tab
    /// Loaded community event feed.
    pub events: EventsFeed,
    /// Whether the feed request has completed (empty feed is a valid
    /// outcome).
    pub events_loaded: bool,
    /// Cursor into the combined events listing.
    pub events_cursor: usize,

    // Contact tab
    /// Contact form fields and validation state.
    pub contact: ContactFormState,
    /// Form processor endpoint.
    pub contact_endpoint: String,

    // Localization
    /// Active locale tag.
    pub locale: String,
    /// Active-locale translations.
    pub translations: TranslationMap,
    /// Fallback (en-GB) translations.
    pub translations_fallback: TranslationMap,

    /// Root of the static data tree.
    pub data_root: DataRoot,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tab: AppTab::Browse,
            focus: Focus::Games,
            modal: Modal::None,
            game_cursor: 0,
            games_state: ListState::default(),
            session: None,
            catalog_status: CatalogStatus::Idle,
            category_cursor: 0,
            latest_load_id: 0,
            next_load_id: 1,
            events: EventsFeed::default(),
            events_loaded: false,
            events_cursor: 0,
            contact: ContactFormState::default(),
            contact_endpoint: crate::sources::contact::DEFAULT_ENDPOINT.to_string(),
            locale: i18n::DEFAULT_LOCALE.to_string(),
            translations: TranslationMap::new(),
            translations_fallback: TranslationMap::new(),
            data_root: DataRoot::Dir(PathBuf::from("data")),
        }
    }
}

impl AppState {
    /// What: Display name of the game under the selector cursor.
    #[must_use]
    pub fn game_under_cursor(&self) -> Option<&'static str> {
        crate::games::GAMES.get(self.game_cursor).map(|g| g.name)
    }

    /// What: Load translation maps for a locale and make it active.
    ///
    /// Inputs:
    /// - `locale`: Supported locale tag
    ///
    /// Details:
    /// - The fallback map always holds en-GB. Load failures are logged and
    ///   leave the previous maps in place; lookups then degrade to keys,
    ///   never to a crash.
    pub fn set_locale(&mut self, locale: &str) {
        let Some(dir) = i18n::find_locales_dir() else {
            tracing::warn!("locales directory not found; UI will render keys");
            self.locale = locale.to_string();
            return;
        };
        match i18n::load_locale_file(locale, &dir) {
            Ok(map) => {
                self.translations = map;
                self.locale = locale.to_string();
            }
            Err(err) => tracing::warn!(locale, error = %err, "locale load failed"),
        }
        if self.translations_fallback.is_empty() {
            match i18n::load_locale_file(i18n::FALLBACK_LOCALE, &dir) {
                Ok(map) => self.translations_fallback = map,
                Err(err) => tracing::warn!(error = %err, "fallback locale load failed"),
            }
        }
    }

    /// What: Toggle between the two supported UI languages.
    pub fn toggle_language(&mut self) {
        let next = i18n::toggled(&self.locale);
        self.set_locale(next);
        tracing::info!(locale = %self.locale, "language switched");
    }

    /// What: Clamp the category cursor to the current view length.
    ///
    /// Details:
    /// - Called after every filter mutation so the cursor never points past
    ///   the (possibly shrunken) visible list.
    pub fn clamp_category_cursor(&mut self) {
        let len = self.session.as_ref().map_or(0, |s| s.view().len());
        if len == 0 {
            self.category_cursor = 0;
        } else {
            self.category_cursor = self.category_cursor.min(len - 1);
        }
    }

    /// What: Total number of rows on the Events tab (both buckets).
    #[must_use]
    pub fn events_len(&self) -> usize {
        self.events.upcoming.len() + self.events.past.len()
    }
}
