//! Internationalization (i18n) for riseflow.
//!
//! The UI ships Portuguese (`pt-BR`, the default) and British English
//! (`en-GB`) and toggles between them at runtime. Locale files live in
//! `config/locales/{tag}.yml` as nested YAML flattened into dot-notation
//! keys (`search.no_songs_available`), with `en-GB` as the fallback chain
//! for missing keys. A key missing from both maps renders as itself, which
//! keeps gaps visible without crashing anything.

mod detection;
mod loader;
pub mod translations;

pub use detection::detect_system_locale;
pub use loader::load_locale_file;
pub use translations::{TranslationMap, translate_with_fallback};

use std::path::PathBuf;

/// Locale used when nothing else resolves, and the site's historical
/// default.
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Locale every missing key falls back to.
pub const FALLBACK_LOCALE: &str = "en-GB";

/// Locales the UI can present.
pub const SUPPORTED_LOCALES: [&str; 2] = [DEFAULT_LOCALE, FALLBACK_LOCALE];

/// What: Find the locales directory in development and installed locations.
///
/// Output:
/// - `Some(PathBuf)` of the first existing directory, or `None`.
///
/// Details:
/// - Checks `CARGO_MANIFEST_DIR/config/locales` first so repo checkouts
///   work without installing, then `/usr/share/riseflow/locales`.
#[must_use]
pub fn find_locales_dir() -> Option<PathBuf> {
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.is_dir() {
        return Some(dev_path);
    }
    let installed = PathBuf::from("/usr/share/riseflow/locales");
    if installed.is_dir() {
        return Some(installed);
    }
    None
}

/// What: Resolve the startup locale.
///
/// Inputs:
/// - `configured`: Locale from settings/CLI, if any
///
/// Output:
/// - A supported locale tag: configured when valid, else the system
///   environment's language, else [`DEFAULT_LOCALE`].
#[must_use]
pub fn resolve_locale(configured: Option<&str>) -> String {
    if let Some(tag) = configured {
        let tag = tag.trim();
        if SUPPORTED_LOCALES.contains(&tag) {
            return tag.to_string();
        }
        if !tag.is_empty() {
            tracing::warn!(locale = tag, "unsupported locale in settings; ignoring");
        }
    }
    detect_system_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// What: The other supported locale (the language-toggle target).
#[must_use]
pub fn toggled(locale: &str) -> &'static str {
    if locale == DEFAULT_LOCALE {
        FALLBACK_LOCALE
    } else {
        DEFAULT_LOCALE
    }
}

/// What: Get a translation for a key from `AppState`.
///
/// Inputs:
/// - `app`: State carrying the active and fallback translation maps
/// - `key`: Dot-notation key (e.g. `"search.loading"`)
///
/// Output:
/// - Translated string, or the key itself when unknown everywhere.
#[must_use]
pub fn t(app: &crate::state::AppState, key: &str) -> String {
    translate_with_fallback(key, &app.translations, &app.translations_fallback)
}

/// What: Get a translation with a single `{}` placeholder filled in.
///
/// Inputs:
/// - `app`: State carrying the translation maps
/// - `key`: Dot-notation key
/// - `arg`: Value substituted for the first `{}`
#[must_use]
pub fn t_fmt1<T: std::fmt::Display>(app: &crate::state::AppState, key: &str, arg: T) -> String {
    t(app, key).replacen("{}", &arg.to_string(), 1)
}
