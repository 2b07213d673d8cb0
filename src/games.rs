//! Static registry of supported games and their catalog data sources.

/// How a game's catalog is laid out under the data directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// A single JSON file holding the whole catalog as one category.
    File {
        /// Path relative to the data directory.
        path: &'static str,
    },
    /// A folder of per-category JSON files enumerated by `manifest.json`,
    /// with an optional hardcoded fallback list for folders that predate
    /// the manifest convention.
    Folder {
        /// Folder path relative to the data directory (trailing slash free).
        path: &'static str,
        /// Ordered fallback file list used when no manifest is present.
        fallback_files: &'static [&'static str],
    },
}

/// One supported game and where its catalog lives.
#[derive(Clone, Debug)]
pub struct GameSpec {
    /// Display name, also used as the category name for single-file games.
    pub name: &'static str,
    /// Catalog layout for this game.
    pub source: DataSource,
}

/// Ordered per-category files for the Dance Dance Revolution catalog.
///
/// The numeric prefix fixes the category display order; it is stripped from
/// the derived category name.
pub const DDR_FILES: [&str; 36] = [
    "1 - Anime Channel.json",
    "2 - KPOP Channel.json",
    "3 - World POP Channel.json",
    "4 - JPOP Channel.json",
    "5 - Vocaloid Channel.json",
    "6 - Touhou Channel.json",
    "7 - Games Channel.json",
    "8 - Dance Dance Revolution 1st Mix.json",
    "9 - Dance Dance Revolution 2nd Mix.json",
    "10 - Dance Dance Revolution 2nd Mix Club & Link Versions.json",
    "11 - Dance Dance Revolution 3rd Mix.json",
    "12 - Dance Dance Revolution 3rd Mix Plus & Korea Versions.json",
    "13 - Dance Dance Revolution 4th Mix.json",
    "14 - Dance Dance Revolution 4th Mix Plus.json",
    "15 - Dance Dance Revolution 5th Mix.json",
    "16 - Dance Dance Revolution 6th Mix - MAX.json",
    "17 - Dance Dance Revolution 7th Mix - MAX2.json",
    "18 - Dance Dance Revolution 8th Mix -  Extreme.json",
    "19 - Dance Dance Revolution SuperNOVA.json",
    "20 - Dance Dance Revolution SuperNOVA 2.json",
    "21 - Dance Dance Revolution X.json",
    "22 - Dance Dance Revolution X2.json",
    "23 - Dance Dance Revolution X3.json",
    "24 - Dance Dance Revolution 2013.json",
    "25 - Dance Dance Revolution 2014.json",
    "26 - Dance Dance Revolution A.json",
    "27 - Dance Dance Revolution A20.json",
    "28 - Dance Dance Revolution A20 Plus.json",
    "29 - Dance Dance Revolution A3.json",
    "30 - Dance Dance Revolution Grand Prix.json",
    "31 - Dance Dance Revolution PS1 Exclusives.json",
    "32 - Dance Dance Revolution PS2 Exclusives.json",
    "33 - Dance Dance Revolution PS3 Exclusives.json",
    "34 - Dance Dance Revolution Xbox Exclusives.json",
    "35 - Dance Dance Revolution Xbox 360 Exclusives.json",
    "36 -Dance Dance Revolution Wii Exclusives.json",
];

/// All games shown in the selector, in display order.
pub static GAMES: [GameSpec; 4] = [
    GameSpec {
        name: "Dance Dance Revolution",
        source: DataSource::Folder {
            path: "Stepmania",
            fallback_files: &DDR_FILES,
        },
    },
    GameSpec {
        name: "Project Diva",
        source: DataSource::File {
            path: "Project Diva/project_diva.json",
        },
    },
    GameSpec {
        name: "Taiko no Tatsujin",
        source: DataSource::Folder {
            path: "Taiko no Tatsujin",
            fallback_files: &[],
        },
    },
    GameSpec {
        name: "YARG",
        source: DataSource::Folder {
            path: "YARG",
            fallback_files: &[],
        },
    },
];

/// What: Look up a game spec by its display name.
///
/// Inputs:
/// - `name`: Exact display name as shown in the selector
///
/// Output:
/// - `Some(&GameSpec)` for registered games; `None` otherwise.
#[must_use]
pub fn find(name: &str) -> Option<&'static GameSpec> {
    GAMES.iter().find(|g| g.name == name)
}

/// What: Derive a category name and sort rank from a catalog file name.
///
/// Inputs:
/// - `file_name`: Bare file name, e.g. `"7 - Games Channel.json"`
///
/// Output:
/// - `(name, rank)` where `name` has the numeric prefix and `.json` suffix
///   stripped, and `rank` is the parsed prefix (files without a prefix rank
///   last).
///
/// Details:
/// - The prefix separator tolerates `-`/`_` and uneven spacing, matching the
///   historical file naming.
#[must_use]
pub fn category_from_file_name(file_name: &str) -> (String, u32) {
    let stem = file_name.strip_suffix(".json").unwrap_or(file_name);
    let digits: String = stem.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return (stem.trim().to_string(), u32::MAX);
    }
    let rank = digits.parse::<u32>().unwrap_or(u32::MAX);
    let rest = stem[digits.len()..]
        .trim_start()
        .trim_start_matches(['-', '_'])
        .trim_start();
    if rest.is_empty() {
        (stem.trim().to_string(), rank)
    } else {
        (rest.to_string(), rank)
    }
}
