//! Settings and statistics persistence
//!
//! A small JSON file holds the sound preference and lifetime statistics. Any
//! failure falls back to defaults; nothing here can affect game rules.

use crate::engine::{GameStatus, Phase};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Version tag written into exports
pub const EXPORT_VERSION: &str = "1.0";

/// Persisted preferences and statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    /// UNIX seconds of the last started round
    pub last_played: Option<u64>,
    pub total_games_played: u32,
    pub total_words_guessed: u32,
    pub high_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            last_played: None,
            total_games_played: 0,
            total_words_guessed: 0,
            high_score: 0,
        }
    }
}

/// Statistics view of the settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total_games_played: u32,
    pub total_words_guessed: u32,
    pub high_score: u32,
    pub last_played: Option<u64>,
}

/// Portable dump of everything stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    pub settings: Settings,
    pub export_date: u64,
    pub version: String,
}

/// Error type for persistence failures
#[derive(Debug)]
pub enum StorageError {
    /// Persistence was switched off (`--no-save`)
    Disabled,
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "Storage is disabled"),
            Self::Io(e) => write!(f, "Storage I/O error: {e}"),
            Self::Json(e) => write!(f, "Invalid settings data: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Disabled => None,
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// JSON-file settings store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// Default file name, relative to the working directory
    pub const DEFAULT_PATH: &'static str = "woordpuzzel.json";

    /// Store backed by `path`; the file is created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store that never reads or writes
    #[must_use]
    pub const fn disabled() -> Self {
        Self { path: None }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load settings, falling back to defaults on any problem
    #[must_use]
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(StorageError::Disabled) => {
                debug!("storage disabled, using default settings");
                Settings::default()
            }
            Err(e) => {
                warn!(error = %e, "could not load settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Load settings, reporting why it failed
    ///
    /// A missing file is not an error: it yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage is disabled, the file cannot be read, or
    /// its contents are not valid settings JSON.
    pub fn try_load(&self) -> Result<Settings, StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Disabled)?;

        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings to disk
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage is disabled or the file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Disabled)?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Persist the sound preference
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub fn update_sound(&self, enabled: bool) -> Result<(), StorageError> {
        let mut settings = self.load();
        settings.sound_enabled = enabled;
        self.save(&settings)
    }

    /// Count a started round and stamp the time
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub fn increment_games_played(&self) -> Result<(), StorageError> {
        let mut settings = self.load();
        settings.total_games_played = settings.total_games_played.saturating_add(1);
        settings.last_played = Some(unix_now());
        self.save(&settings)
    }

    /// Add solved words to the running total
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub fn increment_words_guessed(&self, words: u32) -> Result<(), StorageError> {
        let mut settings = self.load();
        settings.total_words_guessed = settings.total_words_guessed.saturating_add(words);
        self.save(&settings)
    }

    /// Record `score` if it beats the stored high score
    ///
    /// Returns whether it was a new high score.
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub fn update_high_score(&self, score: u32) -> Result<bool, StorageError> {
        let mut settings = self.load();
        if score > settings.high_score {
            settings.high_score = score;
            self.save(&settings)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Fold a finished round into the statistics
    ///
    /// A won round adds its words to the solved total; any finished round offers
    /// its score as a high score. Returns whether the high score was beaten.
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::save`].
    pub fn record_round_end(&self, status: &GameStatus) -> Result<bool, StorageError> {
        if status.phase == Phase::Won {
            let solved = u32::try_from(status.words.len()).unwrap_or(u32::MAX);
            self.increment_words_guessed(solved)?;
        }
        self.update_high_score(status.score)
    }

    #[must_use]
    pub fn statistics(&self) -> Statistics {
        let settings = self.load();
        Statistics {
            total_games_played: settings.total_games_played,
            total_words_guessed: settings.total_words_guessed,
            high_score: settings.high_score,
            last_played: settings.last_played,
        }
    }

    /// Dump the stored settings as a JSON document
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage is disabled or the settings cannot be read.
    pub fn export(&self) -> Result<String, StorageError> {
        let export = Export {
            settings: self.try_load()?,
            export_date: unix_now(),
            version: EXPORT_VERSION.to_string(),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }

    /// Replace the stored settings with those from an export document
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if storage is disabled, the document is not a valid
    /// export, or the file cannot be written.
    pub fn import(&self, json: &str) -> Result<(), StorageError> {
        if !self.is_enabled() {
            return Err(StorageError::Disabled);
        }
        let export: Export = serde_json::from_str(json)?;
        self.save(&export.settings)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Unique store path under the temp dir, removed on drop
    struct TempStore {
        store: SettingsStore,
        path: PathBuf,
    }

    impl TempStore {
        fn new() -> Self {
            let n = COUNTER.fetch_add(1, Ordering::SeqCst);
            let path = std::env::temp_dir().join(format!(
                "woordpuzzel-settings-{}-{n}.json",
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self {
                store: SettingsStore::new(&path),
                path,
            }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = TempStore::new();
        assert_eq!(tmp.store.try_load().unwrap(), Settings::default());
        assert!(tmp.store.load().sound_enabled);
    }

    #[test]
    fn save_then_load() {
        let tmp = TempStore::new();
        let settings = Settings {
            sound_enabled: false,
            last_played: Some(1_700_000_000),
            total_games_played: 4,
            total_words_guessed: 9,
            high_score: 230,
        };
        tmp.store.save(&settings).unwrap();
        assert_eq!(tmp.store.load(), settings);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let tmp = TempStore::new();
        fs::write(&tmp.path, r#"{"highScore": 120}"#).unwrap();

        let settings = tmp.store.load();
        assert_eq!(settings.high_score, 120);
        assert!(settings.sound_enabled);
        assert_eq!(settings.total_games_played, 0);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let tmp = TempStore::new();
        fs::write(&tmp.path, "not json at all").unwrap();

        assert!(matches!(tmp.store.try_load(), Err(StorageError::Json(_))));
        assert_eq!(tmp.store.load(), Settings::default());
    }

    #[test]
    fn disabled_store_refuses_writes() {
        let store = SettingsStore::disabled();
        assert!(!store.is_enabled());
        assert_eq!(store.load(), Settings::default());
        assert!(matches!(store.update_sound(false), Err(StorageError::Disabled)));
        assert!(matches!(store.export(), Err(StorageError::Disabled)));
        assert!(matches!(store.import("{}"), Err(StorageError::Disabled)));
    }

    #[test]
    fn counters_accumulate() {
        let tmp = TempStore::new();
        tmp.store.increment_games_played().unwrap();
        tmp.store.increment_games_played().unwrap();
        tmp.store.increment_words_guessed(3).unwrap();

        let stats = tmp.store.statistics();
        assert_eq!(stats.total_games_played, 2);
        assert_eq!(stats.total_words_guessed, 3);
        assert!(stats.last_played.is_some());
    }

    #[test]
    fn high_score_only_increases() {
        let tmp = TempStore::new();
        assert!(tmp.store.update_high_score(80).unwrap());
        assert!(!tmp.store.update_high_score(50).unwrap());
        assert!(!tmp.store.update_high_score(80).unwrap());
        assert!(tmp.store.update_high_score(140).unwrap());
        assert_eq!(tmp.store.statistics().high_score, 140);
    }

    #[test]
    fn sound_preference_persists() {
        let tmp = TempStore::new();
        tmp.store.update_sound(false).unwrap();
        assert!(!tmp.store.load().sound_enabled);
    }

    #[test]
    fn export_import_between_stores() {
        let source = TempStore::new();
        source.store.update_high_score(310).unwrap();
        source.store.increment_words_guessed(7).unwrap();
        let json = source.store.export().unwrap();
        assert!(json.contains("\"version\": \"1.0\""));

        let target = TempStore::new();
        target.store.import(&json).unwrap();
        let stats = target.store.statistics();
        assert_eq!(stats.high_score, 310);
        assert_eq!(stats.total_words_guessed, 7);
    }

    #[test]
    fn finished_rounds_update_statistics() {
        use crate::core::Word;
        use crate::engine::GameEngine;
        use crate::wordlists::WordPool;

        let tmp = TempStore::new();
        let pool = WordPool::from_words(vec![Word::new("BOOM").unwrap()]);
        let mut engine = GameEngine::headless(pool, 0);
        engine.start_new_game(1);
        for letter in ['B', 'O', 'O', 'M'] {
            engine.guess_letter(letter);
        }

        assert!(tmp.store.record_round_end(&engine.status()).unwrap());
        let stats = tmp.store.statistics();
        assert_eq!(stats.total_words_guessed, 1);
        assert_eq!(stats.high_score, 90);

        engine.start_new_game(1);
        for letter in ['X', 'Y', 'Z', 'Q', 'J'] {
            engine.guess_letter(letter);
        }
        assert!(!tmp.store.record_round_end(&engine.status()).unwrap());
        assert_eq!(tmp.store.statistics().total_words_guessed, 1);
    }

    #[test]
    fn import_rejects_garbage() {
        let tmp = TempStore::new();
        assert!(matches!(tmp.store.import("[1, 2]"), Err(StorageError::Json(_))));
    }
}
