//! Persisted user preferences.
//!
//! Only the theme choice is stored: a single `theme` key holding `light` or
//! `dark`. Storage sits behind [`PreferenceStore`] so the UI never touches
//! the filesystem directly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

const THEME_KEY: &str = "theme";

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value preference storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read the stored theme, falling back to `default` when absent or unknown.
pub fn load_theme(store: &dyn PreferenceStore, default: ThemeMode) -> ThemeMode {
    match store.get(THEME_KEY) {
        Some(value) => ThemeMode::parse(&value).unwrap_or_else(|| {
            tracing::warn!("Ignoring unknown stored theme {:?}", value);
            default
        }),
        None => default,
    }
}

pub fn save_theme(store: &mut dyn PreferenceStore, theme: ThemeMode) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}

/// Preferences file format
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

/// JSON-file backed preferences, written through on every change
pub struct FilePreferences {
    values: HashMap<String, String>,
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: PathBuf) -> Self {
        Self {
            values: HashMap::new(),
            path,
        }
    }

    /// Default preferences file path
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("darkwall-dash")
            .join("preferences.json")
    }

    /// Open the store at `path`. A missing or unreadable file yields an
    /// empty store; the next write recreates it.
    pub fn open(path: PathBuf) -> Self {
        let mut prefs = Self::new(path);
        if let Err(e) = prefs.load() {
            tracing::warn!("Failed to load preferences: {:#}", e);
        }
        prefs
    }

    /// Load preferences from disk
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            tracing::debug!("No preferences file found, using defaults");
            return Ok(());
        }

        let content = fs::read_to_string(&self.path).context("Failed to read preferences file")?;

        let file: PreferencesFile =
            serde_json::from_str(&content).context("Failed to parse preferences file")?;

        self.values = file.values;
        tracing::debug!("Loaded {} preferences", self.values.len());
        Ok(())
    }

    /// Save preferences to disk
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create preferences directory")?;
        }

        let file = PreferencesFile {
            values: self.values.clone(),
        };
        let content =
            serde_json::to_string_pretty(&file).context("Failed to serialize preferences")?;

        fs::write(&self.path, content).context("Failed to write preferences file")?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory preferences for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
