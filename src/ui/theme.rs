//! Theme system for the dashboard
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Light and dark palettes
//! - Hex color parsing for config overrides

use ratatui::style::Color;
use thiserror::Error;

use crate::preferences::ThemeMode;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Sidebar and banner background
    pub surface: Color,
    /// Accent color (borders, titles, switches)
    pub accent: Color,
    /// Dimmed text (hints, secondary info)
    pub dimmed: Color,
    /// More dimmed text (other-month cells, weekday header)
    pub dimmed_alt: Color,
    /// Background of the selected day
    pub selection_bg: Color,
    /// Text color of the selected day
    pub selection_fg: Color,
    /// Background of today's cell
    pub today_bg: Color,
    /// Text color of today's cell
    pub today_fg: Color,
    /// Holiday marker color
    pub holiday: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 250, 252),    // #f8fafc
            foreground: Color::Rgb(30, 41, 59),       // #1e293b
            surface: Color::Rgb(255, 255, 255),       // #ffffff
            accent: Color::Rgb(37, 99, 235),          // #2563eb
            dimmed: Color::Rgb(100, 116, 139),        // #64748b
            dimmed_alt: Color::Rgb(148, 163, 184),    // #94a3b8
            selection_bg: Color::Rgb(219, 234, 254),  // #dbeafe
            selection_fg: Color::Rgb(30, 41, 59),     // #1e293b
            today_bg: Color::Rgb(37, 99, 235),        // #2563eb
            today_fg: Color::Rgb(255, 255, 255),      // #ffffff
            holiday: Color::Rgb(220, 38, 38),         // #dc2626
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),       // #0f172a
            foreground: Color::Rgb(226, 232, 240),    // #e2e8f0
            surface: Color::Rgb(30, 41, 59),          // #1e293b
            accent: Color::Rgb(96, 165, 250),         // #60a5fa
            dimmed: Color::Rgb(148, 163, 184),        // #94a3b8
            dimmed_alt: Color::Rgb(71, 85, 105),      // #475569
            selection_bg: Color::Rgb(51, 65, 85),     // #334155
            selection_fg: Color::Rgb(241, 245, 249),  // #f1f5f9
            today_bg: Color::Rgb(96, 165, 250),       // #60a5fa
            today_fg: Color::Rgb(15, 23, 42),         // #0f172a
            holiday: Color::Rgb(248, 113, 113),       // #f87171
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3 or 6 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Serde deserializer for hex colors
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
