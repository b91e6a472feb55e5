//! Severity taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Severity of a log record, ordered ascending.
///
/// ECHO sits between DEBUG and INFO so expression-echo output is visible by
/// default, yet can be silenced without also silencing INFO.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Echo,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Level {
    /// All levels, ascending.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Echo,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    /// Numeric severity value; higher is more severe.
    pub fn value(self) -> u8 {
        match self {
            Level::Debug => 10,
            Level::Echo => 15,
            Level::Info => 20,
            Level::Warning => 30,
            Level::Error => 40,
            Level::Fatal => 50,
        }
    }

    /// Single-character tag used by the compact presets.
    pub fn short_tag(self) -> &'static str {
        match self {
            Level::Debug => "/",
            Level::Echo => ">",
            Level::Info => "-",
            Level::Warning => "!",
            Level::Error => "x",
            Level::Fatal => "X",
        }
    }

    /// Full name used by the long presets.
    pub fn long_name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Echo => "ECHO",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Color table key for records at this level.
    pub(crate) fn color_key(self) -> &'static str {
        match self {
            Level::Debug => "b",
            Level::Echo => "m",
            Level::Info => "g",
            Level::Warning => "y",
            Level::Error => "r",
            Level::Fatal => "bg_r",
        }
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "echo" => Ok(Level::Echo),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "fatal" | "critical" => Ok(Level::Fatal),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}
