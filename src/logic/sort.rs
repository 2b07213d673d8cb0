//! Ordering rules for songs within a category and for categories overall.

use crate::catalog::{Category, Song};

/// What: Sort songs ascending by case-folded display title.
///
/// Inputs:
/// - `songs`: Slice to sort in place
///
/// Details:
/// - Uses the transliteration-preferred title, so Latin renderings sort
///   alongside native-Latin titles. Ties keep source order (stable sort).
pub fn sort_songs(songs: &mut [Song]) {
    songs.sort_by_key(|s| s.display_title().to_lowercase());
}

/// What: Apply the category ordering policy in place.
///
/// Inputs:
/// - `categories`: Categories as produced by the loader
/// - `declared_order`: `true` when the source declares the order (numeric
///   file prefixes); `false` for the alphabetical default
///
/// Details:
/// - Declared order is established at load time, so this only re-sorts for
///   the alphabetical case (case-folded, ties stable).
pub fn sort_categories(categories: &mut [Category], declared_order: bool) {
    if !declared_order {
        categories.sort_by_key(|c| c.name.to_lowercase());
    }
}
