//! Small shared helpers with no better home.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthChar;

/// What: Percent-encode a path segment for use in a catalog URL.
///
/// Inputs:
/// - `input`: Raw segment (category file names may contain spaces and `&`)
///
/// Output:
/// - RFC 3986 unreserved characters and `/` pass through; everything else is
///   `%XX`-encoded. Spaces become `%20`.
///
/// Details:
/// - `/` is preserved so relative paths like `Stepmania/1 - Anime
///   Channel.json` keep their separators.
#[must_use]
pub fn percent_encode_path(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Truncate a string to a display-column budget, appending an ellipsis.
///
/// Inputs:
/// - `text`: Source string (may contain wide CJK characters)
/// - `max_width`: Column budget, including the ellipsis when truncating
///
/// Output:
/// - The original string when it fits; otherwise a prefix plus `…` whose
///   total display width does not exceed `max_width`.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Classify the first character of a display title for the letter bar.
///
/// Inputs:
/// - `title`: Display title (leading whitespace ignored)
///
/// Output:
/// - `Some('a'..='z')` for ASCII-alphabetic initials (lowercased); `None`
///   for everything else, which buckets under `#`.
#[must_use]
pub fn initial_letter(title: &str) -> Option<char> {
    let first = title.trim().chars().next()?;
    if first.is_ascii_alphabetic() {
        Some(first.to_ascii_lowercase())
    } else {
        None
    }
}
