#![cfg(test)]
//! End-to-end search flow: catalog fixtures on disk through the loader into
//! a search session, exercising the documented filter properties.

use std::path::Path;

use riseflow::catalog::Song;
use riseflow::games::{DataSource, GameSpec};
use riseflow::logic::{CatalogSession, song_matches};
use riseflow::net::DataRoot;
use riseflow::sources::catalog::load_game;
use riseflow::state::LetterFilter;

fn write(dir: &Path, rel: &str, body: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("mkdir");
    }
    std::fs::write(path, body).expect("write fixture");
}

fn ddr_spec() -> GameSpec {
    GameSpec {
        name: "Dance Dance Revolution",
        source: DataSource::Folder {
            path: "Stepmania",
            fallback_files: &["1 - Anime Channel.json", "2 - Games Channel.json"],
        },
    }
}

async fn ddr_session(dir: &Path) -> CatalogSession {
    write(
        dir,
        "Stepmania/1 - Anime Channel.json",
        r#"[
            {"title":"紅蓮華","title_translit":"Gurenge","artist":"LiSA",
             "single_difficulties":{"Easy":"4","Hard":"10"}},
            {"title":"God Knows...","artist":"平野綾","artist_translit":"Aya Hirano",
             "single_difficulties":{"Medium":"8"}}
        ]"#,
    );
    write(
        dir,
        "Stepmania/2 - Games Channel.json",
        r#"[
            {"title":"FREEDOM DiVE","artist":"xi",
             "single_difficulties":{"Challenge":"14"}},
            {"title":"39","artist":"supercell",
             "single_difficulties":{"Easy":"3"}}
        ]"#,
    );
    let root = DataRoot::Dir(dir.to_path_buf());
    let (categories, declared) = load_game(&root, &ddr_spec()).await;
    CatalogSession::new("Dance Dance Revolution".to_string(), categories, declared)
}

#[tokio::test]
/// What: A query matching a category name returns songs whose own fields
/// never match
///
/// - Input: Query "anime" over the loaded DDR fixture
/// - Output: Both Anime Channel songs visible, Games Channel omitted
async fn query_matches_via_category_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = ddr_session(dir.path()).await;
    session.set_query("anime".to_string());
    assert_eq!(session.view().len(), 1);
    assert_eq!(session.view()[0].name, "Anime Channel");
    assert_eq!(session.view()[0].songs.len(), 2);
}

#[tokio::test]
/// What: Every returned song matches the query in some searchable field
///
/// - Input: Query "a" (broad) over the fixture
/// - Output: `song_matches` re-verifies for each returned song
async fn all_results_actually_match() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = ddr_session(dir.path()).await;
    session.set_query("a".to_string());
    for view in session.view() {
        for song in &view.songs {
            assert!(
                song_matches(song, &view.name, "a", &[]),
                "{} leaked through the filter",
                song.display_title()
            );
        }
    }
}

#[tokio::test]
/// What: Tag add/remove restores the exact previous result count
///
/// - Input: Tag "lisa" added from the query, then removed
/// - Output: Total matches shrink, then return to the original number
async fn tag_roundtrip_restores_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = ddr_session(dir.path()).await;
    let before = session.total_matches();
    assert_eq!(before, 4);
    session.set_query("lisa".to_string());
    assert!(session.add_tag_from_query());
    assert_eq!(session.total_matches(), 1);
    session.remove_tag(0);
    assert_eq!(session.total_matches(), before);
}

#[tokio::test]
/// What: The `#` bucket holds exactly the non a-z initial titles
///
/// - Input: Expanded Games Channel cycled back to `#`
/// - Output: Only "39" in the bucket; letter rows re-verified by initial
async fn hash_bucket_is_non_alphabetic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = ddr_session(dir.path()).await;
    session.toggle_expanded("Games Channel");
    session.cycle_letter("Games Channel", false); // All -> '#'
    let rows: Vec<String> = session
        .letter_rows("Games Channel")
        .iter()
        .map(|s| s.display_title())
        .collect();
    assert_eq!(rows, vec!["39".to_string()]);
    for title in rows {
        assert!(LetterFilter::Other.matches(&title));
    }
}

#[tokio::test]
/// What: Sorting within a category is ascending by display title
///
/// - Input: The loaded fixture, no filters
/// - Output: Each category's titles are sorted case-insensitively
async fn songs_sorted_by_display_title() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = ddr_session(dir.path()).await;
    for view in session.view() {
        let titles: Vec<String> = view
            .songs
            .iter()
            .map(|s| s.display_title().to_lowercase())
            .collect();
        let mut sorted = titles.clone();
        sorted.sort();
        assert_eq!(titles, sorted, "category {} out of order", view.name);
    }
}

#[tokio::test]
/// What: Filtering never mutates the loaded catalog
///
/// - Input: A narrowing query followed by clearing all filters
/// - Output: The full catalog view is back, identical counts
async fn filtering_derives_views_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = ddr_session(dir.path()).await;
    let baseline: Vec<(String, usize)> = session
        .view()
        .iter()
        .map(|v| (v.name.clone(), v.songs.len()))
        .collect();
    session.set_query("freedom".to_string());
    assert_eq!(session.total_matches(), 1);
    session.clear_filters();
    let restored: Vec<(String, usize)> = session
        .view()
        .iter()
        .map(|v| (v.name.clone(), v.songs.len()))
        .collect();
    assert_eq!(baseline, restored);
}

#[test]
/// What: Display titles prefer non-blank transliterations
///
/// - Input: Songs with populated, blank, and absent translit fields
/// - Output: Translit wins only when non-blank
fn display_title_transliteration_preference() {
    let with = Song {
        title: Some("紅蓮華".to_string()),
        title_translit: Some("Gurenge".to_string()),
        ..Default::default()
    };
    assert_eq!(with.display_title(), "Gurenge");
    let blank = Song {
        title: Some("紅蓮華".to_string()),
        title_translit: Some("  ".to_string()),
        ..Default::default()
    };
    assert_eq!(blank.display_title(), "紅蓮華");
}
