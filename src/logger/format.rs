//! Format presets and line rendering.

use std::fmt;
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::ConfigError;

use super::level::Level;
use super::registry::LevelRegistry;

/// One of the four fixed line layouts.
///
/// The compact presets print single-character tags; the long presets
/// right-align full severity names in fixed-width brackets. The `-time`
/// variants prepend a millisecond-precision timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatPreset {
    Short,
    #[default]
    ShortTime,
    Long,
    LongTime,
}

impl FormatPreset {
    /// Whether this preset uses the single-character tag set.
    pub fn is_short(self) -> bool {
        matches!(self, FormatPreset::Short | FormatPreset::ShortTime)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormatPreset::Short => "short",
            FormatPreset::ShortTime => "short-time",
            FormatPreset::Long => "long",
            FormatPreset::LongTime => "long-time",
        }
    }
}

impl FromStr for FormatPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(FormatPreset::Short),
            "short-time" => Ok(FormatPreset::ShortTime),
            "long" => Ok(FormatPreset::Long),
            "long-time" => Ok(FormatPreset::LongTime),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for FormatPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one record: colored prefix, reset, a space, the plain message.
pub(crate) fn render(
    preset: FormatPreset,
    registry: &LevelRegistry,
    level: Level,
    message: &str,
) -> String {
    let line = prefix(preset, registry, level);
    let tint = color::lookup(level.color_key()).unwrap_or_default();
    let reset = color::RESET;
    format!("{tint}{line}{reset} {message}")
}

/// The uncolored prefix for a record at `level` under `preset`.
///
/// Long-preset names are right-aligned so the closing bracket lines up
/// across levels.
pub(crate) fn prefix(preset: FormatPreset, registry: &LevelRegistry, level: Level) -> String {
    let tag = registry.display(level);
    match preset {
        FormatPreset::Short => format!("[{tag}]"),
        FormatPreset::ShortTime => format!("{} [{tag}]", timestamp()),
        FormatPreset::Long => format!("{:>7}", format!("[{tag}]")),
        FormatPreset::LongTime => format!("[{} {tag:>5}]", timestamp()),
    }
}

/// Wall-clock time with millisecond precision, `HH:MM:SS.mmm`.
fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}
