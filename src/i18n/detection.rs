//! System locale detection from environment variables.

use std::env;

/// Environment variables consulted for the session language, in priority
/// order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// What: Detect a supported locale from the environment.
///
/// Output:
/// - `Some("pt-BR")` for Portuguese environments, `Some("en-GB")` for
///   English ones, `None` when nothing recognizable is set.
///
/// Details:
/// - Only the language part matters: `pt_BR.UTF-8`, `pt_PT`, and `pt` all
///   resolve to `pt-BR`; any `en_*` resolves to `en-GB`.
#[must_use]
pub fn detect_system_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find_map(|value| language_of(&value))
}

/// What: Map one raw environment value to a supported locale tag.
fn language_of(raw: &str) -> Option<String> {
    let lang = raw
        .split(['.', '@'])
        .next()
        .unwrap_or(raw)
        .split(['_', '-'])
        .next()
        .unwrap_or(raw)
        .to_ascii_lowercase();
    match lang.as_str() {
        "pt" => Some("pt-BR".to_string()),
        "en" => Some("en-GB".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Raw environment values map to the two supported tags
    ///
    /// - Input: Common POSIX locale spellings plus an unknown language
    /// - Output: pt-* -> pt-BR, en-* -> en-GB, unknown -> None
    fn i18n_detection_language_mapping() {
        assert_eq!(language_of("pt_BR.UTF-8").as_deref(), Some("pt-BR"));
        assert_eq!(language_of("pt").as_deref(), Some("pt-BR"));
        assert_eq!(language_of("en_US.UTF-8").as_deref(), Some("en-GB"));
        assert_eq!(language_of("en-GB").as_deref(), Some("en-GB"));
        assert_eq!(language_of("ja_JP.UTF-8"), None);
        assert_eq!(language_of("C"), None);
    }
}
