//! Folder enumeration via the `manifest.json` convention.

use tracing::debug;

use crate::net::{DataRoot, fetch_json};

/// What: List the JSON files of a catalog folder.
///
/// Inputs:
/// - `root`: Active data root
/// - `folder`: Folder path relative to the root
/// - `fallback`: Hardcoded file list used when no manifest is present
///
/// Output:
/// - Relative file names (within `folder`), `.json` entries only.
///
/// Details:
/// - A `manifest.json` holding an array of relative paths wins when it
///   exists and parses; anything else falls back to the static list. An
///   empty result simply means the folder has no data yet.
pub async fn folder_files(root: &DataRoot, folder: &str, fallback: &[&str]) -> Vec<String> {
    match fetch_json::<Vec<String>>(root, &format!("{folder}/manifest.json")).await {
        Ok(entries) => entries
            .into_iter()
            .filter(|f| f.ends_with(".json"))
            .collect(),
        Err(err) => {
            debug!(folder, error = %err, "no usable manifest; using fallback list");
            fallback.iter().map(|f| (*f).to_string()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    /// What: A manifest enumerates the folder and filters non-JSON entries
    ///
    /// - Input: Temp folder with a manifest listing two .json and one .txt
    /// - Output: Only the .json entries, in manifest order
    async fn manifest_lists_json_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let folder = dir.path().join("Taiko no Tatsujin");
        std::fs::create_dir_all(&folder).expect("mkdir");
        std::fs::write(
            folder.join("manifest.json"),
            r#"["pops.json", "notes.txt", "anime.json"]"#,
        )
        .expect("write manifest");
        let root = DataRoot::Dir(dir.path().to_path_buf());
        let files = folder_files(&root, "Taiko no Tatsujin", &["unused.json"]).await;
        assert_eq!(files, vec!["pops.json".to_string(), "anime.json".to_string()]);
    }

    #[tokio::test]
    /// What: Missing or malformed manifests fall back to the static list
    ///
    /// - Input: Folder without a manifest, then one with invalid JSON
    /// - Output: The fallback list both times
    async fn manifest_fallback_on_missing_or_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = DataRoot::Dir(PathBuf::from(dir.path()));
        let files = folder_files(&root, "Stepmania", &["1 - Anime Channel.json"]).await;
        assert_eq!(files, vec!["1 - Anime Channel.json".to_string()]);

        let folder = dir.path().join("Stepmania");
        std::fs::create_dir_all(&folder).expect("mkdir");
        std::fs::write(folder.join("manifest.json"), "{ not json").expect("write");
        let files = folder_files(&root, "Stepmania", &["1 - Anime Channel.json"]).await;
        assert_eq!(files, vec!["1 - Anime Channel.json".to_string()]);
    }
}
