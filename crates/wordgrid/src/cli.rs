#![forbid(unsafe_code)]

//! Command-line entry point.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use wordgrid_core::{Clock, SystemClock};
use wordgrid_i18n::Language;
use wordgrid_runtime::{
    FileStorage, LogConfig, LogFormat, MemoryStorage, Program, ProgramConfig, StorageBackend,
    init_logging,
};
use wordgrid_style::ThemeMode;

use crate::app::App;
use crate::config::{AppConfig, LANGUAGE_KEY, THEME_KEY};
use crate::error::{AppError, Result};
use crate::loader::DirectorySource;

/// Rows reserved below the prompt in inline mode.
pub const INLINE_HEIGHT: u16 = 20;

#[derive(Debug, Default, Parser)]
#[command(
    name = "wordgrid",
    about = "Pick a BIP39 word by toggling its twelve bits",
    version
)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding `<language>.txt` wordlists.
    #[arg(long = "wordlists", value_name = "DIR")]
    pub wordlists: Option<PathBuf>,

    /// Wordlist language, e.g. `spanish`.
    #[arg(long, value_name = "NAME")]
    pub language: Option<String>,

    /// Color theme: `dark` or `light`.
    #[arg(long, value_name = "MODE")]
    pub theme: Option<ThemeMode>,

    /// JSON file for remembered preferences.
    #[arg(long, value_name = "PATH")]
    pub preferences: Option<PathBuf>,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `wordgrid=debug`.
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_filter: Option<String>,

    /// Log as JSON lines.
    #[arg(long)]
    pub log_json: bool,

    /// Draw below the prompt instead of on the alternate screen.
    #[arg(long)]
    pub inline: bool,

    /// Leave mouse reporting off.
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the supported languages and exit.
    #[arg(long)]
    pub list_languages: bool,
}

impl Cli {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.wordlists {
            config.wordlist_dir = dir.clone();
        }
        if let Some(language) = &self.language {
            config.language = Some(language.clone());
        }
        if let Some(theme) = self.theme {
            config.theme = Some(theme);
        }
        if let Some(path) = &self.preferences {
            config.preferences_path = Some(path.clone());
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(filter) = &self.log_filter {
            config.log_filter = Some(filter.clone());
        }
    }

    pub fn log_config(&self, config: &AppConfig) -> LogConfig {
        let format = if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Text
        };
        LogConfig::default()
            .with_file(config.log_file.clone())
            .with_filter(config.log_filter.clone())
            .with_format(format)
    }

    pub fn program_config(&self) -> ProgramConfig {
        let config = if self.inline {
            ProgramConfig::inline(INLINE_HEIGHT)
        } else {
            ProgramConfig::fullscreen()
        };
        if self.no_mouse {
            config
        } else {
            config.with_mouse()
        }
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.apply(&mut config);

    if cli.list_languages {
        let source = DirectorySource::new(&config.wordlist_dir);
        print_languages(&mut io::stdout().lock(), &source)?;
        return Ok(());
    }

    init_logging(&cli.log_config(&config))?;

    let storage = open_storage(config.preferences_path.as_deref()).unwrap_or_else(|err| {
        tracing::warn!(%err, "preferences unavailable, keeping them in memory");
        Box::new(MemoryStorage::new())
    });
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let env_tag = Language::env_tag();
    let app = build_app(&config, storage, Arc::clone(&clock), env_tag.as_deref())?;

    let mut program = Program::with_clock(app, cli.program_config(), clock);
    program.run().map_err(AppError::Terminal)?;
    tracing::info!("wordgrid exited");
    Ok(())
}

/// Preference storage at `path`, or memory when no path is configured.
pub fn open_storage(path: Option<&Path>) -> Result<Box<dyn StorageBackend>> {
    match path {
        Some(path) => Ok(Box::new(FileStorage::open(path)?)),
        None => Ok(Box::new(MemoryStorage::new())),
    }
}

/// Assemble the app from `config` and the stored preferences.
pub fn build_app(
    config: &AppConfig,
    storage: Box<dyn StorageBackend>,
    clock: Arc<dyn Clock>,
    env_tag: Option<&str>,
) -> Result<App> {
    let stored = |key: &str| match storage.get(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "stored preference unreadable");
            None
        }
    };
    let stored_language = stored(LANGUAGE_KEY);
    let stored_theme = stored(THEME_KEY);
    let language = config.resolve_language(stored_language.as_deref(), env_tag)?;
    let theme = config.resolve_theme(stored_theme.as_deref());

    let source = Arc::new(DirectorySource::new(&config.wordlist_dir));
    Ok(App::new(source, storage, clock)
        .with_timings(config.timings.clone())
        .with_language(language)
        .with_theme(theme))
}

/// One line per language: code, badge, native name, and whether its file
/// is present.
pub fn print_languages(out: &mut impl Write, source: &DirectorySource) -> io::Result<()> {
    let available = source.available();
    for language in Language::ALL {
        let state = if available.contains(&language) {
            "available"
        } else {
            "missing"
        };
        writeln!(
            out,
            "{:<20} [{}] {:<12} {state}",
            language.code(),
            language.badge(),
            language.native_name()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use wordgrid_core::ManualClock;
    use wordgrid_runtime::ScreenMode;

    use super::*;

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "wordgrid",
            "--wordlists",
            "/tmp/lists",
            "--language",
            "korean",
            "--theme",
            "light",
            "--log-json",
            "--inline",
            "--no-mouse",
        ])
        .unwrap();
        assert_eq!(cli.wordlists, Some(PathBuf::from("/tmp/lists")));
        assert_eq!(cli.language.as_deref(), Some("korean"));
        assert_eq!(cli.theme, Some(ThemeMode::Light));
        assert!(cli.log_json && cli.inline && cli.no_mouse);
        assert!(!cli.list_languages);
    }

    #[test]
    fn bad_theme_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["wordgrid", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn flags_override_the_file() {
        let mut config = AppConfig::parse("language = \"czech\"\ntheme = \"dark\"").unwrap();
        let cli = Cli::try_parse_from(["wordgrid", "--theme", "light"]).unwrap();
        cli.apply(&mut config);
        assert_eq!(config.theme, Some(ThemeMode::Light));
        assert_eq!(config.language.as_deref(), Some("czech"));
    }

    #[test]
    fn program_config_follows_flags() {
        let cli = Cli::default();
        let config = cli.program_config();
        assert_eq!(config.screen_mode, ScreenMode::AltScreen);
        assert!(config.mouse);

        let cli = Cli::try_parse_from(["wordgrid", "--inline", "--no-mouse"]).unwrap();
        let config = cli.program_config();
        assert_eq!(
            config.screen_mode,
            ScreenMode::Inline {
                ui_height: INLINE_HEIGHT
            }
        );
        assert!(!config.mouse);
    }

    #[test]
    fn log_format_follows_flag() {
        let cli = Cli::try_parse_from(["wordgrid", "--log-json"]).unwrap();
        let log = cli.log_config(&AppConfig::default());
        assert_eq!(log.format, LogFormat::Json);
        assert!(log.file.is_none());
    }

    #[test]
    fn language_listing_marks_present_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("italian.txt"), "abaco\n").unwrap();
        let mut out = Vec::new();
        print_languages(&mut out, &DirectorySource::new(dir.path())).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), Language::ALL.len());
        let italian = text.lines().find(|l| l.starts_with("italian")).unwrap();
        assert!(italian.ends_with("available"));
        let english = text.lines().find(|l| l.starts_with("english")).unwrap();
        assert!(english.ends_with("missing"));
    }

    #[test]
    fn stored_preferences_seed_the_app() {
        let storage = MemoryStorage::with_entries([(LANGUAGE_KEY, "french"), (THEME_KEY, "light")]);
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new());
        let app =
            build_app(&AppConfig::default(), Box::new(storage), clock, Some("ko_KR")).unwrap();
        assert_eq!(app.language(), Language::French);
        assert_eq!(app.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn environment_used_without_preferences() {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new());
        let app = build_app(
            &AppConfig::default(),
            Box::new(MemoryStorage::new()),
            clock,
            Some("ko_KR.UTF-8"),
        )
        .unwrap();
        assert_eq!(app.language(), Language::Korean);
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn unreadable_preferences_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        let err = open_storage(Some(&path)).err().unwrap();
        assert!(matches!(err, AppError::Storage(_)));
        assert!(open_storage(None).is_ok());
    }
}
