//! Color palette, config-directory discovery, and user settings.

use std::env;
use std::path::PathBuf;

use ratatui::style::Color;
use serde::Deserialize;
use tracing::warn;

/// Fixed UI palette (Catppuccin Mocha values, matching the site's dark
/// look).
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Default text.
    pub text: Color,
    /// Dimmed/secondary text.
    pub overlay: Color,
    /// Pane borders and headers.
    pub accent: Color,
    /// Success/confirmation accents.
    pub green: Color,
    /// Warnings and the AUR-style highlight color.
    pub yellow: Color,
    /// Errors and validation failures.
    pub red: Color,
    /// Selection background.
    pub selection: Color,
}

/// What: The application palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        text: Color::Rgb(0xcd, 0xd6, 0xf4),
        overlay: Color::Rgb(0x7f, 0x84, 0x9c),
        accent: Color::Rgb(0x89, 0xb4, 0xfa),
        green: Color::Rgb(0xa6, 0xe3, 0xa1),
        yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
        red: Color::Rgb(0xf3, 0x8b, 0xa8),
        selection: Color::Rgb(0x45, 0x47, 0x5a),
    }
}

/// What: Return `$HOME/.config/riseflow` (or `$XDG_CONFIG_HOME/riseflow`),
/// creating it when missing.
///
/// Output:
/// - The config directory; falls back to the current directory when no
///   home is available (containers, stripped environments).
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME").ok().filter(|p| !p.trim().is_empty()).map_or_else(
        || {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        },
        PathBuf::from,
    );
    let dir = base.join("riseflow");
    if let Err(err) = std::fs::create_dir_all(&dir) {
        warn!(dir = %dir.display(), error = %err, "cannot create config dir");
    }
    dir
}

/// What: Return the log directory under the config dir, creating it.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    if let Err(err) = std::fs::create_dir_all(&dir) {
        warn!(dir = %dir.display(), error = %err, "cannot create log dir");
    }
    dir
}

/// User settings from `settings.toml`. All fields optional; CLI flags win.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Settings {
    /// UI locale tag (`pt-BR` / `en-GB`).
    #[serde(default)]
    pub locale: Option<String>,
    /// Data root: directory path or HTTP(S) base URL.
    #[serde(default)]
    pub data_root: Option<String>,
    /// Contact form processor endpoint.
    #[serde(default)]
    pub contact_endpoint: Option<String>,
}

/// What: Load `settings.toml` from the config directory.
///
/// Output:
/// - Parsed settings; defaults when the file is missing or malformed (a
///   malformed file is logged, never fatal).
#[must_use]
pub fn load_settings() -> Settings {
    let path = config_dir().join("settings.toml");
    let Ok(raw) = std::fs::read_to_string(&path) else {
        return Settings::default();
    };
    match toml::from_str::<Settings>(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(file = %path.display(), error = %err, "ignoring malformed settings");
            Settings::default()
        }
    }
}
