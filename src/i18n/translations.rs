//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation with fallback to the secondary map.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Active-locale map
/// - `fallback_translations`: Fallback map (en-GB)
///
/// Output:
/// - The translated string from the first map that has the key; the key
///   itself when neither does.
///
/// Details:
/// - Misses log at debug level only, so a partially translated locale stays
///   usable without flooding the log file.
pub fn translate_with_fallback(
    key: &str,
    translations: &TranslationMap,
    fallback_translations: &TranslationMap,
) -> String {
    if let Some(text) = translations.get(key) {
        return text.clone();
    }
    if let Some(text) = fallback_translations.get(key) {
        tracing::debug!(key, "translation missing in active locale; using fallback");
        return text.clone();
    }
    tracing::debug!(key, "translation missing everywhere; rendering key");
    key.to_string()
}
