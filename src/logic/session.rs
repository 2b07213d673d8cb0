//! Per-game search session: catalog, filter state, and the derived view.
//!
//! One session is constructed per game selection and dropped wholesale on
//! the next selection, so no filter state can leak between games.

use std::collections::{HashMap, HashSet};

use crate::catalog::{Category, Song};
use crate::logic::{song_matches, sort_categories, sort_songs};
use crate::state::LetterFilter;

/// One category as currently visible: filtered, sorted, with match count.
#[derive(Clone, Debug)]
pub struct CategoryView {
    /// Category name.
    pub name: String,
    /// Matching songs, sorted by display title.
    pub songs: Vec<Song>,
}

/// Catalog plus session-local filter state for one selected game.
///
/// The loaded catalog is never mutated; every filter change only recomputes
/// the `view` vector.
#[derive(Debug, Default)]
pub struct CatalogSession {
    /// Display name of the selected game.
    pub game: String,
    /// Whether category order is source-declared (vs. alphabetical).
    pub declared_order: bool,
    /// Live search-box text.
    pub query: String,
    /// Persisted filter tags, unique, in insertion order.
    pub tags: Vec<String>,
    /// Loaded catalog in final category order.
    categories: Vec<Category>,
    /// Names of currently expanded categories.
    expanded: HashSet<String>,
    /// Active letter bucket per category (absent means `All`).
    letters: HashMap<String, LetterFilter>,
    /// Derived view, recomputed on every filter mutation.
    view: Vec<CategoryView>,
}

impl CatalogSession {
    /// What: Build a fresh session around a loaded catalog.
    ///
    /// Inputs:
    /// - `game`: Display name of the game
    /// - `categories`: Loader output (already in declared order when
    ///   applicable)
    /// - `declared_order`: Category ordering policy
    ///
    /// Output:
    /// - Session with empty filter state and an up-to-date view.
    #[must_use]
    pub fn new(game: String, mut categories: Vec<Category>, declared_order: bool) -> Self {
        sort_categories(&mut categories, declared_order);
        let mut session = Self {
            game,
            declared_order,
            categories,
            ..Default::default()
        };
        session.refresh();
        session
    }

    /// What: Replace the live query and recompute the view.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.refresh();
    }

    /// What: Promote the current query to a filter tag.
    ///
    /// Output:
    /// - `true` when a tag was added (non-blank and not already present);
    ///   the query box is cleared on success, as in the original flow.
    pub fn add_tag_from_query(&mut self) -> bool {
        let term = self.query.trim().to_string();
        if term.is_empty() || self.tags.iter().any(|t| t == &term) {
            return false;
        }
        self.tags.push(term);
        self.query.clear();
        self.refresh();
        true
    }

    /// What: Remove one tag by position, recomputing the view.
    pub fn remove_tag(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
            self.refresh();
        }
    }

    /// What: Drop all tags and the query ("clear all filters").
    pub fn clear_filters(&mut self) {
        self.tags.clear();
        self.query.clear();
        self.refresh();
    }

    /// What: Whether any filter (query or tag) is active.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.tags.is_empty() || !self.query.trim().is_empty()
    }

    /// What: Toggle a category between collapsed and expanded.
    ///
    /// Details:
    /// - Expansion state survives view recomputation; the letter bucket of a
    ///   collapsed category resets to `All`, mirroring the original's
    ///   content teardown on collapse.
    pub fn toggle_expanded(&mut self, name: &str) {
        if self.expanded.remove(name) {
            self.letters.remove(name);
        } else {
            self.expanded.insert(name.to_string());
        }
    }

    /// What: Whether a category is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    /// What: Active letter bucket for a category (default `All`).
    #[must_use]
    pub fn letter(&self, name: &str) -> LetterFilter {
        self.letters.get(name).copied().unwrap_or_default()
    }

    /// What: Cycle a category's letter bucket forward or backward.
    pub fn cycle_letter(&mut self, name: &str, forward: bool) {
        let current = self.letter(name);
        let next = if forward { current.next() } else { current.prev() };
        self.letters.insert(name.to_string(), next);
    }

    /// What: The current filtered view, one entry per non-empty category.
    #[must_use]
    pub fn view(&self) -> &[CategoryView] {
        &self.view
    }

    /// What: Songs of one expanded category restricted to its letter bucket.
    ///
    /// Inputs:
    /// - `name`: Category name (must be present in the view)
    ///
    /// Output:
    /// - Matching songs in sorted order; empty when the bucket has none
    ///   ("no songs found starting with this letter").
    #[must_use]
    pub fn letter_rows(&self, name: &str) -> Vec<&Song> {
        let letter = self.letter(name);
        self.view
            .iter()
            .find(|v| v.name == name)
            .map(|v| {
                v.songs
                    .iter()
                    .filter(|s| letter.matches(&s.display_title()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// What: Total number of matching songs across all visible categories.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.view.iter().map(|v| v.songs.len()).sum()
    }

    /// What: Whether the loaded catalog itself has any songs at all.
    #[must_use]
    pub fn catalog_is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.songs.is_empty())
    }

    /// What: Recompute the derived view from catalog plus filter state.
    ///
    /// Details:
    /// - Categories with zero matches are omitted entirely. Matching songs
    ///   are sorted per category; category order follows the session policy
    ///   (already established on `categories`). Recomputing with identical
    ///   state yields an identical view.
    fn refresh(&mut self) {
        self.view = self
            .categories
            .iter()
            .filter_map(|cat| {
                let mut songs: Vec<Song> = cat
                    .songs
                    .iter()
                    .filter(|s| song_matches(s, &cat.name, &self.query, &self.tags))
                    .cloned()
                    .collect();
                if songs.is_empty() {
                    return None;
                }
                sort_songs(&mut songs);
                Some(CategoryView {
                    name: cat.name.clone(),
                    songs,
                })
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, artist: &str) -> Song {
        Song {
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            ..Default::default()
        }
    }

    fn fixture() -> Vec<Category> {
        vec![
            Category {
                name: "Anime Channel".to_string(),
                songs: vec![song("Freedom Dive", "xi"), song("Zealandia", "void")],
            },
            Category {
                name: "KPOP Channel".to_string(),
                songs: vec![song("Gee", "Girls' Generation")],
            },
        ]
    }

    #[test]
    /// What: Query matching the category name keeps all its songs
    ///
    /// - Input: Query "anime" over the fixture
    /// - Output: Anime Channel fully visible, KPOP omitted
    fn session_category_match_keeps_songs() {
        let mut s = CatalogSession::new("DDR".into(), fixture(), true);
        s.set_query("anime".into());
        assert_eq!(s.view().len(), 1);
        assert_eq!(s.view()[0].name, "Anime Channel");
        assert_eq!(s.view()[0].songs.len(), 2);
    }

    #[test]
    /// What: Adding then removing a tag restores the previous match count
    ///
    /// - Input: Tag "xi" added from the query, then removed
    /// - Output: Counts shrink under the tag and return exactly after removal
    fn session_tag_roundtrip_restores_counts() {
        let mut s = CatalogSession::new("DDR".into(), fixture(), true);
        let before = s.total_matches();
        s.set_query("xi".into());
        assert!(s.add_tag_from_query());
        assert!(s.query.is_empty());
        assert_eq!(s.total_matches(), 1);
        s.remove_tag(0);
        assert_eq!(s.total_matches(), before);
    }

    #[test]
    /// What: Duplicate and blank tags are rejected
    ///
    /// - Input: The same term twice, then a blank query
    /// - Output: Only one tag stored; blank adds nothing
    fn session_tags_are_unique() {
        let mut s = CatalogSession::new("DDR".into(), fixture(), true);
        s.set_query("dive".into());
        assert!(s.add_tag_from_query());
        s.set_query("dive".into());
        assert!(!s.add_tag_from_query());
        s.set_query("   ".into());
        assert!(!s.add_tag_from_query());
        assert_eq!(s.tags.len(), 1);
    }

    #[test]
    /// What: Letter buckets restrict expanded rows and reset on collapse
    ///
    /// - Input: Expand a category, pick `Z`, collapse, re-expand
    /// - Output: Rows restricted while set; bucket back to `All` after
    ///   collapse
    fn session_letter_rows_and_collapse_reset() {
        let mut s = CatalogSession::new("DDR".into(), fixture(), true);
        s.toggle_expanded("Anime Channel");
        s.cycle_letter("Anime Channel", false); // All -> '#'
        s.cycle_letter("Anime Channel", false); // '#' -> 'z'
        assert_eq!(s.letter("Anime Channel"), LetterFilter::Letter('z'));
        let rows = s.letter_rows("Anime Channel");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_title(), "Zealandia");
        s.toggle_expanded("Anime Channel");
        s.toggle_expanded("Anime Channel");
        assert_eq!(s.letter("Anime Channel"), LetterFilter::All);
    }

    #[test]
    /// What: Recomputing with identical state is idempotent
    ///
    /// - Input: The same query applied twice
    /// - Output: Identical category names and per-category counts
    fn session_refresh_is_idempotent() {
        let mut s = CatalogSession::new("DDR".into(), fixture(), true);
        s.set_query("e".into());
        let first: Vec<(String, usize)> = s
            .view()
            .iter()
            .map(|v| (v.name.clone(), v.songs.len()))
            .collect();
        s.set_query("e".into());
        let second: Vec<(String, usize)> = s
            .view()
            .iter()
            .map(|v| (v.name.clone(), v.songs.len()))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    /// What: Alphabetical policy reorders categories at session build
    ///
    /// - Input: Fixture reversed, declared_order = false
    /// - Output: View lists categories alphabetically
    fn session_alphabetical_category_order() {
        let mut cats = fixture();
        cats.reverse();
        let s = CatalogSession::new("Taiko no Tatsujin".into(), cats, false);
        let names: Vec<&str> = s.view().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Anime Channel", "KPOP Channel"]);
    }
}
