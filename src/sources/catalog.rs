//! Catalog loading: resolve a game's data source, fetch every file, and
//! produce ordered categories.

use futures::future::join_all;
use tracing::{info, warn};

use crate::catalog::{Category, Song};
use crate::games::{DataSource, GameSpec, category_from_file_name};
use crate::net::{DataRoot, fetch_json};

/// What: Load the full catalog for one game.
///
/// Inputs:
/// - `root`: Active data root
/// - `game`: Registry entry describing the data source
///
/// Output:
/// - `(categories, declared_order)`: categories in final order, plus whether
///   that order is source-declared (numeric prefixes) rather than
///   alphabetical.
///
/// Details:
/// - Per-file failures are logged and skipped; they never fail the load. An
///   empty vector means "no songs available".
/// - Folder files fetch concurrently and join before indexing.
/// - For declared-order catalogs, songs without any difficulty chart are
///   dropped (the historical export contains placeholder rows).
pub async fn load_game(root: &DataRoot, game: &GameSpec) -> (Vec<Category>, bool) {
    match &game.source {
        DataSource::File { path } => (load_single_file(root, game.name, path).await, false),
        DataSource::Folder {
            path,
            fallback_files,
        } => {
            let declared = !fallback_files.is_empty();
            let categories = load_folder(root, path, fallback_files, declared).await;
            (categories, declared)
        }
    }
}

/// What: Load a single-file catalog as one category named after the game.
async fn load_single_file(root: &DataRoot, game_name: &str, rel: &str) -> Vec<Category> {
    match fetch_json::<Vec<Song>>(root, rel).await {
        Ok(songs) => {
            info!(game = game_name, songs = songs.len(), "catalog file loaded");
            vec![Category {
                name: game_name.to_string(),
                songs,
            }]
        }
        Err(err) => {
            warn!(game = game_name, file = rel, error = %err, "catalog file skipped");
            Vec::new()
        }
    }
}

/// What: Load a folder catalog, one category per file.
///
/// Details:
/// - File order comes from the manifest (or fallback list); declared-order
///   folders are then sorted by the numeric prefix rank so a shuffled
///   manifest cannot scramble the pack order.
async fn load_folder(
    root: &DataRoot,
    folder: &str,
    fallback_files: &[&str],
    declared_order: bool,
) -> Vec<Category> {
    let files = super::manifest::folder_files(root, folder, fallback_files).await;
    let fetches = files.iter().map(|file| async move {
        let rel = format!("{folder}/{file}");
        match fetch_json::<Vec<Song>>(root, &rel).await {
            Ok(songs) => {
                let (name, rank) = category_from_file_name(file);
                Some((rank, name, songs))
            }
            Err(err) => {
                warn!(file = rel, error = %err, "category file skipped");
                None
            }
        }
    });
    let mut loaded: Vec<(u32, String, Vec<Song>)> =
        join_all(fetches).await.into_iter().flatten().collect();
    if declared_order {
        loaded.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    }
    let total: usize = loaded.iter().map(|(_, _, songs)| songs.len()).sum();
    info!(
        folder,
        categories = loaded.len(),
        songs = total,
        "folder catalog loaded"
    );
    loaded
        .into_iter()
        .map(|(_, name, mut songs)| {
            if declared_order {
                songs.retain(Song::has_difficulties);
            }
            Category { name, songs }
        })
        .collect()
}
