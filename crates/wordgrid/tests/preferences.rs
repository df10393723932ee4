#![forbid(unsafe_code)]

//! Theme and language preferences survive a restart through the JSON
//! preference file.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use wordgrid::cli::{build_app, open_storage};
use wordgrid::config::{LANGUAGE_KEY, THEME_KEY};
use wordgrid::{App, AppConfig};
use wordgrid_core::ManualClock;
use wordgrid_core::event::KeyCode;
use wordgrid_i18n::Language;
use wordgrid_runtime::{FileStorage, ProgramSimulator, StorageBackend};
use wordgrid_style::ThemeMode;

fn config_for(dir: &Path) -> AppConfig {
    fs::write(dir.join("english.txt"), "abandon\nability\n").unwrap();
    fs::write(dir.join("spanish.txt"), "ábaco\nabdomen\n").unwrap();
    AppConfig {
        wordlist_dir: dir.to_path_buf(),
        preferences_path: Some(dir.join("prefs.json")),
        ..AppConfig::default()
    }
}

fn launch(config: &AppConfig) -> ProgramSimulator<App> {
    let clock = ManualClock::new();
    let storage = open_storage(config.preferences_path.as_deref()).unwrap();
    let app = build_app(config, storage, Arc::new(clock.clone()), None).unwrap();
    let mut sim = ProgramSimulator::with_clock(app, clock);
    sim.init();
    sim
}

#[test]
fn theme_choice_is_remembered() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let mut sim = launch(&config);
    assert_eq!(sim.model().theme_mode(), ThemeMode::Dark);
    assert!(sim.render().contains_text("Dark"));
    sim.press(KeyCode::Char('t'));
    assert_eq!(sim.model().theme_mode(), ThemeMode::Light);
    assert!(sim.render().contains_text("Light"));
    assert_eq!(
        sim.model().storage().get(THEME_KEY).unwrap().as_deref(),
        Some("light")
    );
    drop(sim);

    let sim = launch(&config);
    assert_eq!(sim.model().theme_mode(), ThemeMode::Light);
}

#[test]
fn language_choice_is_remembered() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let mut sim = launch(&config);
    assert_eq!(sim.model().language(), Language::English);
    sim.press(KeyCode::Char('l'));
    sim.press(KeyCode::Down);
    sim.press(KeyCode::Enter);
    assert_eq!(sim.model().wordlist().word(0), Some("ábaco"));
    drop(sim);

    let stored = FileStorage::open(dir.path().join("prefs.json")).unwrap();
    assert_eq!(stored.get(LANGUAGE_KEY).unwrap().as_deref(), Some("spanish"));

    let sim = launch(&config);
    assert_eq!(sim.model().language(), Language::Spanish);
    assert_eq!(sim.model().wordlist().word(1), Some("abdomen"));
}

#[test]
fn config_overrides_stored_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path());

    let mut sim = launch(&config);
    sim.press(KeyCode::Char('t'));
    drop(sim);

    config.theme = Some(ThemeMode::Dark);
    config.language = Some("spanish".into());
    let sim = launch(&config);
    assert_eq!(sim.model().theme_mode(), ThemeMode::Dark);
    assert_eq!(sim.model().language(), Language::Spanish);
}

#[test]
fn bad_configured_language_is_an_argument_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(dir.path());
    config.language = Some("elvish".into());
    let storage = open_storage(None).unwrap();
    let err = build_app(&config, storage, Arc::new(ManualClock::new()), None)
        .err()
        .unwrap();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("elvish"));
}
