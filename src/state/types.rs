//! Core value types used by riseflow state.

use crate::catalog::Category;
use crate::util::initial_letter;

/// Top-level tab shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    /// Song database browser (game selector, search, categories).
    Browse,
    /// Community events listing (upcoming and past).
    Events,
    /// Contact form.
    Contact,
}

/// Which Browse pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Left pane: game selector.
    Games,
    /// Top center: search input and filter tags.
    Search,
    /// Center: category/result list.
    Categories,
}

/// Lifecycle of the currently selected game's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// No game picked yet; the UI shows "select a game".
    #[default]
    Idle,
    /// A load request is in flight.
    Loading,
    /// Catalog loaded with at least one category.
    Ready,
    /// Load finished but produced no categories ("no songs available").
    Empty,
}

/// Letter quick-filter applied inside one expanded category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterFilter {
    /// No restriction (the default).
    #[default]
    All,
    /// Titles whose first character is this ASCII letter (lowercase).
    Letter(char),
    /// Titles whose first character is not `a`-`z` (the `#` bucket).
    Other,
}

impl LetterFilter {
    /// What: Whether a display title falls in this letter bucket.
    ///
    /// Inputs:
    /// - `title`: Display title (transliteration-preferred)
    ///
    /// Output:
    /// - `true` when the title's first character matches the bucket.
    #[must_use]
    pub fn matches(self, title: &str) -> bool {
        match self {
            Self::All => true,
            Self::Letter(l) => initial_letter(title) == Some(l),
            Self::Other => initial_letter(title).is_none(),
        }
    }

    /// What: Label shown on the letter bar for this bucket.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Letter(l) => l.to_ascii_uppercase().to_string(),
            Self::Other => "#".to_string(),
        }
    }

    /// What: The next bucket in bar order (`All`, `A`..`Z`, `#`, wrap).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Letter('a'),
            Self::Letter('z') => Self::Other,
            Self::Letter(l) => Self::Letter((l as u8 + 1) as char),
            Self::Other => Self::All,
        }
    }

    /// What: The previous bucket in bar order (wraps from `All` to `#`).
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::All => Self::Other,
            Self::Letter('a') => Self::All,
            Self::Letter(l) => Self::Letter((l as u8 - 1) as char),
            Self::Other => Self::Letter('z'),
        }
    }
}

/// Catalog load request sent to the background loader worker.
#[derive(Clone, Debug)]
pub struct LoadInput {
    /// Monotonic identifier used to discard stale responses.
    pub id: u64,
    /// Display name of the game whose catalog to load.
    pub game: String,
}

/// Loader response corresponding to a prior [`LoadInput`].
#[derive(Clone, Debug)]
pub struct LoadResults {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Game the categories belong to.
    pub game: String,
    /// Categories in their final order (declared or alphabetical).
    pub categories: Vec<Category>,
    /// Whether the order above is source-declared rather than alphabetical.
    pub declared_order: bool,
}

/// Field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    /// Sender name.
    #[default]
    Name,
    /// Sender address.
    Email,
    /// Message body.
    Message,
}

impl ContactField {
    /// What: The next field in tab order (wraps).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    /// What: The previous field in tab order (wraps).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// Editable state of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    /// Sender name input.
    pub name: String,
    /// Sender email input.
    pub email: String,
    /// Message body input.
    pub message: String,
    /// Field currently receiving keystrokes.
    pub focus: ContactField,
    /// Translation keys of the validation errors from the last submit
    /// attempt, by field.
    pub errors: Vec<(ContactField, &'static str)>,
    /// Whether a submission is currently in flight.
    pub submitting: bool,
}

impl ContactFormState {
    /// What: Validation error key for one field, if any.
    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, key)| *key)
    }
}
