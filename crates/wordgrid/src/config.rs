#![forbid(unsafe_code)]

//! Application configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults,
//! an optional TOML file, and command-line flags. Every field in the file
//! is optional.
//!
//! ```toml
//! wordlist_dir = "/usr/share/bip39"
//! language = "japanese"
//! theme = "light"
//! preferences_path = "~/.config/wordgrid/prefs.json"
//!
//! [timings]
//! toast_ms = 5000
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wordgrid_i18n::Language;
use wordgrid_style::ThemeMode;

use crate::error::{AppError, Result};

/// Preference key holding the wordlist language.
pub const LANGUAGE_KEY: &str = "language";
/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

/// Delays and limits used by the interactive views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timings {
    /// Delay between losing input focus and hiding the suggestion list.
    pub suggestion_hide_ms: u64,
    /// Lifetime of ordinary toasts.
    pub toast_ms: u64,
    /// Lifetime of the wordlist load error toast.
    pub load_error_toast_ms: u64,
    /// The announcement line clears this long after the last update.
    pub announcement_clear_ms: u64,
    /// Rolling window for blocked grid clicks.
    pub nudge_window_ms: u64,
    /// Blocked clicks within the window before the notice fires.
    pub nudge_threshold: u32,
    /// How long the input keeps its error style.
    pub input_error_clear_ms: u64,
    /// Suggestions listed at most.
    pub max_suggestions: usize,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            suggestion_hide_ms: 200,
            toast_ms: 3000,
            load_error_toast_ms: 10_000,
            announcement_clear_ms: 1000,
            nudge_window_ms: 2000,
            nudge_threshold: 2,
            input_error_clear_ms: 3500,
            max_suggestions: 10,
        }
    }
}

impl Timings {
    pub fn suggestion_hide(&self) -> Duration {
        Duration::from_millis(self.suggestion_hide_ms)
    }

    pub fn toast(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn load_error_toast(&self) -> Duration {
        Duration::from_millis(self.load_error_toast_ms)
    }

    pub fn announcement_clear(&self) -> Duration {
        Duration::from_millis(self.announcement_clear_ms)
    }

    pub fn nudge_window(&self) -> Duration {
        Duration::from_millis(self.nudge_window_ms)
    }

    pub fn input_error_clear(&self) -> Duration {
        Duration::from_millis(self.input_error_clear_ms)
    }
}

/// Settings read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding `<language>.txt` wordlists.
    pub wordlist_dir: PathBuf,
    /// Initial wordlist language, e.g. `"spanish"`.
    pub language: Option<String>,
    pub theme: Option<ThemeMode>,
    /// JSON preference file. `None` keeps preferences in memory.
    pub preferences_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive for the log file.
    pub log_filter: Option<String>,
    pub timings: Timings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wordlist_dir: PathBuf::from("wordlists"),
            language: None,
            theme: None,
            preferences_path: None,
            log_file: None,
            log_filter: None,
            timings: Timings::default(),
        }
    }
}

impl AppConfig {
    /// Parse TOML text.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pick the starting language: this config, then the stored
    /// preference, then the locale tag from the environment, then English.
    ///
    /// A bad value in the config is an error. A bad stored value is
    /// skipped, since the file may predate a rename.
    pub fn resolve_language(
        &self,
        stored: Option<&str>,
        env_tag: Option<&str>,
    ) -> Result<Language> {
        if let Some(name) = &self.language {
            return name
                .parse::<Language>()
                .map_err(|err| AppError::invalid(err.to_string()));
        }
        if let Some(value) = stored {
            match value.parse::<Language>() {
                Ok(language) => return Ok(language),
                Err(err) => tracing::warn!(%err, "ignoring stored language"),
            }
        }
        Ok(env_tag.map(Language::detect).unwrap_or_default())
    }

    /// Pick the starting theme: this config, then the stored preference,
    /// then dark.
    pub fn resolve_theme(&self, stored: Option<&str>) -> ThemeMode {
        self.theme.unwrap_or_else(|| ThemeMode::parse_or_default(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.wordlist_dir, PathBuf::from("wordlists"));
        assert_eq!(config.timings.nudge_threshold, 2);
        assert_eq!(config.timings.max_suggestions, 10);
    }

    #[test]
    fn partial_timings_keep_other_defaults() {
        let config = AppConfig::parse(
            r#"
            theme = "light"
            language = "czech"

            [timings]
            toast_ms = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, Some(ThemeMode::Light));
        assert_eq!(config.timings.toast(), Duration::from_secs(5));
        assert_eq!(config.timings.load_error_toast(), Duration::from_secs(10));
        assert_eq!(config.timings.suggestion_hide(), Duration::from_millis(200));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::parse("colour = \"red\"").is_err());
        assert!(AppConfig::parse("theme = \"sepia\"").is_err());
    }

    #[test]
    fn load_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordgrid.toml");
        fs::write(&path, "timings = 3").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains("wordgrid.toml"));

        let missing = AppConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, AppError::Io(_)));
    }

    #[test]
    fn language_resolution_order() {
        let mut config = AppConfig::default();
        assert_eq!(config.resolve_language(None, None).unwrap(), Language::English);
        assert_eq!(
            config.resolve_language(None, Some("fr_FR.UTF-8")).unwrap(),
            Language::French
        );
        assert_eq!(
            config.resolve_language(Some("korean"), Some("fr_FR.UTF-8")).unwrap(),
            Language::Korean
        );
        assert_eq!(
            config.resolve_language(Some("klingon"), Some("it")).unwrap(),
            Language::Italian
        );

        config.language = Some("japanese".into());
        assert_eq!(
            config.resolve_language(Some("korean"), None).unwrap(),
            Language::Japanese
        );

        config.language = Some("klingon".into());
        let err = config.resolve_language(None, None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn theme_resolution_order() {
        let mut config = AppConfig::default();
        assert_eq!(config.resolve_theme(None), ThemeMode::Dark);
        assert_eq!(config.resolve_theme(Some("light")), ThemeMode::Light);
        assert_eq!(config.resolve_theme(Some("neon")), ThemeMode::Dark);
        config.theme = Some(ThemeMode::Dark);
        assert_eq!(config.resolve_theme(Some("light")), ThemeMode::Dark);
    }
}
