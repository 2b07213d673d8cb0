//! Substring matching of songs against the live query and filter tags.

use crate::catalog::Song;

/// What: Collect the lowercased haystacks a term is matched against.
///
/// Inputs:
/// - `song`: Candidate song
/// - `category_name`: Name of the category the song belongs to
///
/// Output:
/// - Display title, artist, subtitle (transliteration-preferred), and the
///   category name, all lowercased.
fn haystacks(song: &Song, category_name: &str) -> [String; 4] {
    [
        song.display_title().to_lowercase(),
        song.display_artist().to_lowercase(),
        song.display_subtitle().to_lowercase(),
        category_name.to_lowercase(),
    ]
}

/// What: Whether one lowercased term matches any searchable field.
fn term_matches(fields: &[String; 4], term: &str) -> bool {
    fields.iter().any(|f| f.contains(term))
}

/// What: Decide whether a song survives the current filter state.
///
/// Inputs:
/// - `song`: Candidate song
/// - `category_name`: Name of its category (itself a searchable field)
/// - `query`: Live search-box text (matched as one term, may be empty)
/// - `tags`: Persisted filter tags, AND-ed together
///
/// Output:
/// - `true` iff the query is empty or matches at least one field, and every
///   tag independently matches at least one field.
///
/// Details:
/// - All comparisons are case-insensitive substring tests; fields are the
///   transliteration-preferred display forms.
#[must_use]
pub fn song_matches(song: &Song, category_name: &str, query: &str, tags: &[String]) -> bool {
    let fields = haystacks(song, category_name);
    let q = query.trim().to_lowercase();
    if !q.is_empty() && !term_matches(&fields, &q) {
        return false;
    }
    tags.iter()
        .all(|tag| term_matches(&fields, &tag.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, artist: &str, subtitle: Option<&str>) -> Song {
        Song {
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            subtitle: subtitle.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    /// What: Empty query matches everything; non-empty requires a field hit
    ///
    /// - Input: One song, queries hitting title, artist, and nothing
    /// - Output: Match on field hits, reject otherwise
    fn filter_query_over_fields() {
        let s = song("Freedom Dive", "xi", Some("from parousia"));
        assert!(song_matches(&s, "Games Channel", "", &[]));
        assert!(song_matches(&s, "Games Channel", "freedom", &[]));
        assert!(song_matches(&s, "Games Channel", "XI", &[]));
        assert!(song_matches(&s, "Games Channel", "parousia", &[]));
        assert!(!song_matches(&s, "Games Channel", "chrono", &[]));
    }

    #[test]
    /// What: The category name is itself a searchable field
    ///
    /// - Input: Query "anime" against a song in "Anime Channel" whose own
    ///   fields never mention anime
    /// - Output: The song matches via its category name
    fn filter_category_name_is_searchable() {
        let s = song("Freedom Dive", "xi", None);
        assert!(song_matches(&s, "Anime Channel", "anime", &[]));
        assert!(!song_matches(&s, "Games Channel", "anime", &[]));
    }

    #[test]
    /// What: Tags AND together while each tag ORs across fields
    ///
    /// - Input: Tag sets where all, one, or none match
    /// - Output: Every tag must hit some field for the song to survive
    fn filter_tags_are_anded() {
        let s = song("夜に駆ける", "YOASOBI", None);
        let both = vec!["yoasobi".to_string(), "駆け".to_string()];
        assert!(song_matches(&s, "JPOP Channel", "", &both));
        let one_bad = vec!["yoasobi".to_string(), "zutomayo".to_string()];
        assert!(!song_matches(&s, "JPOP Channel", "", &one_bad));
    }

    #[test]
    /// What: Transliterations are matched in place of originals
    ///
    /// - Input: Song with translit title; queries against both forms
    /// - Output: Translit matches; the replaced original does not
    fn filter_prefers_transliteration() {
        let s = Song {
            title: Some("夜に駆ける".to_string()),
            title_translit: Some("Yoru ni Kakeru".to_string()),
            ..Default::default()
        };
        assert!(song_matches(&s, "JPOP Channel", "kakeru", &[]));
        assert!(!song_matches(&s, "JPOP Channel", "駆ける", &[]));
    }

    #[test]
    /// What: Query and tags combine conjunctively
    ///
    /// - Input: Query matching plus a tag that does not
    /// - Output: Song rejected despite the query hit
    fn filter_query_and_tags_combine() {
        let s = song("Butterfly", "smile.dk", None);
        assert!(song_matches(
            &s,
            "DDR 1st Mix",
            "butter",
            &["smile".to_string()]
        ));
        assert!(!song_matches(
            &s,
            "DDR 1st Mix",
            "butter",
            &["vocaloid".to_string()]
        ));
    }
}
