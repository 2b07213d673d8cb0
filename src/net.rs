//! Transport layer: catalog/event JSON retrieval and the contact POST.
//!
//! Catalogs can live on disk (the common deployment: a `data/` directory
//! next to the binary) or behind an HTTP(S) base URL. Both roots expose the
//! same relative-path addressing so the loaders above never care which one
//! is active.

use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::util::percent_encode_path;

/// Boxed error alias used across the transport seam.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Where the static data files live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataRoot {
    /// Local directory containing the deployed JSON tree.
    Dir(PathBuf),
    /// HTTP(S) base URL serving the same tree.
    Url(String),
}

impl DataRoot {
    /// What: Build a root from a CLI/settings string.
    ///
    /// Inputs:
    /// - `raw`: Either an `http(s)://` base URL or a filesystem path
    ///
    /// Output:
    /// - `DataRoot::Url` for URL-looking strings, `DataRoot::Dir` otherwise.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.trim_end_matches('/').to_string())
        } else {
            Self::Dir(PathBuf::from(raw))
        }
    }
}

/// Shared HTTP client with connection pooling for catalog fetching and the
/// contact POST.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("riseflow/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Read one relative path from the data root as a UTF-8 string.
///
/// Inputs:
/// - `root`: Active data root
/// - `rel`: Relative path, e.g. `"Stepmania/1 - Anime Channel.json"`
///
/// Output:
/// - File/body contents on success.
///
/// # Errors
/// - Returns `Err` on missing files, I/O failures, non-success HTTP status,
///   or a non-UTF-8 body.
pub async fn fetch_text(root: &DataRoot, rel: &str) -> Result<String> {
    match root {
        DataRoot::Dir(dir) => {
            let path = dir.join(rel);
            Ok(tokio::fs::read_to_string(&path).await?)
        }
        DataRoot::Url(base) => {
            let url = format!("{base}/{}", percent_encode_path(rel));
            let resp = HTTP_CLIENT.get(&url).send().await?.error_for_status()?;
            Ok(resp.text().await?)
        }
    }
}

/// What: Fetch and deserialize one JSON document from the data root.
///
/// Inputs:
/// - `root`: Active data root
/// - `rel`: Relative path of the JSON file
///
/// Output:
/// - The deserialized value.
///
/// # Errors
/// - Returns `Err` when the file cannot be read (see [`fetch_text`]) or the
///   body is not valid JSON for `T`.
pub async fn fetch_json<T: DeserializeOwned>(root: &DataRoot, rel: &str) -> Result<T> {
    let body = fetch_text(root, rel).await?;
    Ok(serde_json::from_str(&body)?)
}

/// What: POST form-encoded fields to a form-processing endpoint.
///
/// Inputs:
/// - `endpoint`: Absolute HTTPS URL of the processor
/// - `fields`: `(name, value)` pairs, sent `application/x-www-form-urlencoded`
///
/// Output:
/// - `Ok(())` on a success status.
///
/// # Errors
/// - Returns `Err` with the processor's JSON `error` string when the body
///   carries one, the HTTP status otherwise, or the transport error.
pub async fn post_form(endpoint: &str, fields: &[(&str, &str)]) -> Result<()> {
    let resp = HTTP_CLIENT
        .post(endpoint)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(fields)
        .send()
        .await?;
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let detail = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("error").and_then(serde_json::Value::as_str).map(String::from))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    Err(detail.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Root parsing distinguishes URLs from directories
    ///
    /// - Input: An https base with trailing slash and a plain path
    /// - Output: Url root with slash trimmed; Dir root otherwise
    fn net_data_root_parse() {
        assert_eq!(
            DataRoot::parse("https://risingflow.com.br/data/"),
            DataRoot::Url("https://risingflow.com.br/data".to_string())
        );
        assert_eq!(
            DataRoot::parse("./data"),
            DataRoot::Dir(PathBuf::from("./data"))
        );
    }

    #[tokio::test]
    /// What: Directory roots read files and surface missing ones as errors
    ///
    /// - Input: A temp dir with one JSON file
    /// - Output: Contents round-trip; a missing path yields `Err`
    async fn net_fetch_text_from_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("songs.json");
        tokio::fs::write(&file, r#"[{"title":"x"}]"#)
            .await
            .expect("write fixture");
        let root = DataRoot::Dir(dir.path().to_path_buf());
        let body = fetch_text(&root, "songs.json").await.expect("read back");
        assert!(body.contains("title"));
        assert!(fetch_text(&root, "absent.json").await.is_err());
    }

    #[tokio::test]
    /// What: JSON fetching deserializes typed values
    ///
    /// - Input: A fixture containing a JSON array of songs
    /// - Output: Typed `Vec<Song>` with the expected title
    async fn net_fetch_json_typed() {
        let dir = tempfile::tempdir().expect("tempdir");
        tokio::fs::write(
            dir.path().join("cat.json"),
            r#"[{"title":"Freedom Dive","artist":"xi"}]"#,
        )
        .await
        .expect("write fixture");
        let root = DataRoot::Dir(dir.path().to_path_buf());
        let songs: Vec<crate::catalog::Song> =
            fetch_json(&root, "cat.json").await.expect("parse");
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].display_title(), "Freedom Dive");
    }
}
