//! Song and category value types shared by the loader, filter, and UI layers.

use std::collections::BTreeMap;

/// Difficulty tier order used by the stepped (single/double) charts.
///
/// Tiers absent from a song's map are skipped; unknown tiers never occur in
/// the stepped format.
pub const STEPPED_TIER_ORDER: [&str; 5] = ["Beginner", "Easy", "Medium", "Hard", "Challenge"];

/// Rating placeholders that mean "this tier has no chart".
const MISSING_RATINGS: [&str; 2] = ["N/A", "Not available"];

/// One song record as loaded from a catalog JSON file.
///
/// Records are immutable once loaded; filtering only derives views over
/// them. Either the stepped difficulty maps (`single_difficulties` /
/// `double_difficulties`) or the flat `difficulties` map is present,
/// depending on the game's export format.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Song {
    /// Original title, possibly in a non-Latin script.
    pub title: Option<String>,
    /// Latin-script rendering of the title, preferred for display and sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_translit: Option<String>,
    /// Original artist name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Latin-script rendering of the artist name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_translit: Option<String>,
    /// Optional subtitle (mix name, source work, etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Latin-script rendering of the subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_translit: Option<String>,
    /// Stepped single-play charts: tier name -> rating string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_difficulties: Option<BTreeMap<String, String>>,
    /// Stepped double-play charts: tier name -> rating string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_difficulties: Option<BTreeMap<String, String>>,
    /// Flat difficulty map used by the alternate export format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulties: Option<BTreeMap<String, String>>,
}

/// What: Pick the display form of a field, preferring the transliteration.
///
/// Inputs:
/// - `original`: Source-script field value, possibly absent
/// - `translit`: Latin-script rendering, possibly absent or blank
///
/// Output:
/// - The transliteration when present and non-blank; otherwise the original;
///   otherwise the empty string.
#[must_use]
pub fn display_text(original: Option<&str>, translit: Option<&str>) -> String {
    match translit {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => original.unwrap_or_default().to_string(),
    }
}

impl Song {
    /// What: Title used for display, sorting, and letter bucketing.
    ///
    /// Output:
    /// - Transliterated title when present and non-blank, else the original.
    #[must_use]
    pub fn display_title(&self) -> String {
        display_text(self.title.as_deref(), self.title_translit.as_deref())
    }

    /// What: Artist name used for display and matching.
    #[must_use]
    pub fn display_artist(&self) -> String {
        display_text(self.artist.as_deref(), self.artist_translit.as_deref())
    }

    /// What: Subtitle used for display and matching (may be empty).
    #[must_use]
    pub fn display_subtitle(&self) -> String {
        display_text(self.subtitle.as_deref(), self.subtitle_translit.as_deref())
    }

    /// What: Whether the record carries any difficulty chart at all.
    ///
    /// Details:
    /// - Songs without charts are dropped from file-ordered catalogs at load
    ///   time; other games keep them.
    #[must_use]
    pub fn has_difficulties(&self) -> bool {
        self.single_difficulties.is_some()
            || self.double_difficulties.is_some()
            || self.difficulties.is_some()
    }

    /// What: Format the stepped charts of one play style for display.
    ///
    /// Inputs:
    /// - `map`: Tier -> rating map (single or double)
    ///
    /// Output:
    /// - `"Beginner: 2 | Easy: 4"`-style string, or `None` when every tier is
    ///   absent or a missing-rating placeholder.
    #[must_use]
    pub fn format_stepped(map: &BTreeMap<String, String>) -> Option<String> {
        let parts: Vec<String> = STEPPED_TIER_ORDER
            .iter()
            .filter_map(|tier| {
                map.get(*tier)
                    .filter(|rating| !MISSING_RATINGS.contains(&rating.as_str()))
                    .map(|rating| format!("{tier}: {rating}"))
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" | "))
        }
    }

    /// What: Format the flat difficulty map for display.
    ///
    /// Output:
    /// - `"Easy: 3 | Oni: 9"`-style string in the map's key order, or `None`
    ///   when nothing usable remains.
    ///
    /// Details:
    /// - Only consulted when neither stepped map is present, mirroring the
    ///   alternate export format.
    #[must_use]
    pub fn format_flat(&self) -> Option<String> {
        if self.single_difficulties.is_some() || self.double_difficulties.is_some() {
            return None;
        }
        let map = self.difficulties.as_ref()?;
        let parts: Vec<String> = map
            .iter()
            .filter(|(_, rating)| !MISSING_RATINGS.contains(&rating.as_str()))
            .map(|(tier, rating)| format!("{tier}: {rating}"))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" | "))
        }
    }

    /// What: All difficulty lines to render for this song, in display order.
    ///
    /// Output:
    /// - Zero or more `(label, formatted)` pairs: `Single`, `Doubles`, then
    ///   the flat map with an empty label.
    #[must_use]
    pub fn difficulty_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();
        if let Some(text) = self.single_difficulties.as_ref().and_then(Self::format_stepped) {
            lines.push(("Single", text));
        }
        if let Some(text) = self.double_difficulties.as_ref().and_then(Self::format_stepped) {
            lines.push(("Doubles", text));
        }
        if let Some(text) = self.format_flat() {
            lines.push(("", text));
        }
        lines
    }
}

/// A named grouping of songs, typically one source file per game pack.
#[derive(Clone, Debug, Default)]
pub struct Category {
    /// Category name derived from the source file name.
    pub name: String,
    /// Songs in source order; sorting happens when views are derived.
    pub songs: Vec<Song>,
}
