//! Locale file loading and parsing.

use std::fs;
use std::path::Path;

use crate::i18n::translations::TranslationMap;

/// What: Load a locale YAML file and flatten it into a `TranslationMap`.
///
/// Inputs:
/// - `locale`: Locale tag (e.g. `"pt-BR"`)
/// - `locales_dir`: Directory holding `{tag}.yml` files
///
/// Output:
/// - Flattened dot-notation map on success.
///
/// # Errors
/// - Returns `Err` when the tag is empty or malformed, the file is missing,
///   unreadable, or empty, or the YAML does not parse.
pub fn load_locale_file(locale: &str, locales_dir: &Path) -> Result<TranslationMap, String> {
    if locale.is_empty() || !is_valid_locale_tag(locale) {
        return Err(format!(
            "Invalid locale tag: '{locale}'. Expected language[-region] such as 'pt-BR'"
        ));
    }
    let file_path = locales_dir.join(format!("{locale}.yml"));
    if !file_path.exists() {
        return Err(format!("Locale file not found: {}", file_path.display()));
    }
    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;
    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }
    parse_locale_yaml(&contents)
        .map_err(|e| format!("Failed to parse locale file {}: {e}", file_path.display()))
}

/// What: Validate the `language[-region]` shape of a locale tag.
fn is_valid_locale_tag(locale: &str) -> bool {
    locale.len() <= 20
        && locale.chars().all(|c| c.is_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}

/// What: Parse locale YAML into a flattened map.
///
/// Details:
/// - The file's single top-level key is the locale tag itself; flattening
///   starts below it so keys read `search.loading`, not
///   `pt-BR.search.loading`.
fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("invalid YAML: {e}"))?;
    let mut translations = TranslationMap::new();
    if let Some(top) = doc.as_mapping() {
        for (_tag, below) in top {
            flatten_yaml_value(below, "", &mut translations);
        }
    }
    Ok(translations)
}

/// What: Recursively flatten nested mappings into dot-notation keys.
fn flatten_yaml_value(value: &serde_norway::Value, prefix: &str, translations: &mut TranslationMap) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let child = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &child, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
pt-BR:
  tabs:
    browse: \"Buscador de Músicas\"
    events: \"Eventos\"
  search:
    loading: \"Carregando músicas...\"
";

    #[test]
    /// What: Nested YAML flattens to dot-notation under the locale key
    ///
    /// - Input: A two-level pt-BR document
    /// - Output: Keys without the locale prefix, values intact
    fn i18n_loader_flattens_nested_yaml() {
        let map = parse_locale_yaml(SAMPLE).expect("parse");
        assert_eq!(map.get("tabs.events").map(String::as_str), Some("Eventos"));
        assert_eq!(
            map.get("search.loading").map(String::as_str),
            Some("Carregando músicas...")
        );
        assert!(!map.contains_key("pt-BR.tabs.events"));
    }

    #[test]
    /// What: File loading validates tags and surfaces missing files
    ///
    /// - Input: A written locale file, a bad tag, and a missing tag
    /// - Output: Map for the real file; errors otherwise
    fn i18n_loader_file_roundtrip_and_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("pt-BR.yml"), SAMPLE).expect("write");
        let map = load_locale_file("pt-BR", dir.path()).expect("load");
        assert!(map.contains_key("tabs.browse"));
        assert!(load_locale_file("pt//BR", dir.path()).is_err());
        assert!(load_locale_file("en-GB", dir.path()).is_err());
    }
}
