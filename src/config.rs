use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::holidays::HolidayTable;
use crate::preferences::ThemeMode;
use crate::ui::theme::{serde_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub holidays: HolidaysConfig,
    pub refresh: RefreshConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme used when no preference has been stored yet
    pub default_theme: ThemeMode,
    /// Start with the sidebar collapsed
    pub sidebar_collapsed: bool,
    /// Below this terminal width the sidebar is only shown as an overlay
    pub narrow_width: u16,
    /// Accent color override ("#rrggbb")
    #[serde(
        deserialize_with = "serde_color::deserialize_option",
        skip_serializing
    )]
    pub accent: Option<Color>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidaysConfig {
    /// Include the built-in national holidays
    pub include_builtin: bool,
    /// Extra holiday table (TOML), merged over the built-in one
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub clock_interval_ms: u64,
    pub greeting_interval_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the preferences file location
    pub preferences_path: Option<PathBuf>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::Light,
            sidebar_collapsed: false,
            narrow_width: 80,
            accent: None,
        }
    }
}

impl Default for HolidaysConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            file: None,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: 1000,
            greeting_interval_secs: 60,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the holiday table: built-ins (unless disabled) plus the user file.
    pub fn holiday_table(&self) -> Result<HolidayTable> {
        let mut table = if self.holidays.include_builtin {
            HolidayTable::builtin()
        } else {
            HolidayTable::empty()
        };

        if let Some(ref file) = self.holidays.file {
            let expanded = shellexpand::tilde(&file.to_string_lossy()).into_owned();
            let extra = HolidayTable::load_file(Path::new(&expanded))
                .with_context(|| format!("Failed to load holidays from {}", expanded))?;
            table.merge(extra);
        }

        Ok(table)
    }

    /// Theme palette for a mode, with config overrides applied
    pub fn resolve_theme(&self, mode: ThemeMode) -> Theme {
        let mut theme = Theme::for_mode(mode);
        if let Some(accent) = self.appearance.accent {
            theme.accent = accent;
        }
        theme
    }

    pub fn preferences_path(&self) -> PathBuf {
        match self.storage.preferences_path {
            Some(ref path) => {
                PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
            }
            None => crate::preferences::FilePreferences::default_path(),
        }
    }

    pub fn clock_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.refresh.clock_interval_ms.max(100))
    }

    pub fn greeting_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.refresh.greeting_interval_secs.max(1))
    }
}
