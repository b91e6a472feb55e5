//! Settings layer for host-driven and environment-driven configuration.
//!
//! [`LogSettings`] is the serializable form of a logger configuration, so
//! host applications can embed a `[logging]` table in their own config
//! files, and [`LogSettings::from_env`] picks up the `ECHOLOG_LEVEL` and
//! `ECHOLOG_FORMAT` variables. Parsing happens before any logger state
//! changes: unrecognized names fail fast with a
//! [`ConfigError`](crate::ConfigError).
//!
//! # Example
//!
//! ```
//! use echolog::LogSettings;
//!
//! let settings: LogSettings = toml::from_str(
//!     r#"
//!     level = "debug"
//!     format = "long-time"
//!     "#,
//! ).unwrap();
//! settings.apply().unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::logger::{FormatPreset, Level, LogContext, Logger};

/// Environment variable naming the severity level.
pub const ENV_LEVEL: &str = "ECHOLOG_LEVEL";

/// Environment variable naming the format preset.
pub const ENV_FORMAT: &str = "ECHOLOG_FORMAT";

/// Logger settings as a host application would embed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Severity name; `None` keeps the ECHO default.
    #[serde(default)]
    pub level: Option<String>,
    /// Format preset name; `None` keeps the short-time default.
    #[serde(default)]
    pub format: Option<String>,
    /// Logger identity; `None` configures the shared root logger.
    #[serde(default)]
    pub name: Option<String>,
}

impl LogSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            level: std::env::var(ENV_LEVEL).ok(),
            format: std::env::var(ENV_FORMAT).ok(),
            name: None,
        }
    }

    /// Parse and apply these settings to the global context.
    pub fn apply(&self) -> ConfigResult<Logger<'static>> {
        self.apply_to(LogContext::global())
    }

    /// Parse and apply these settings to a specific context.
    ///
    /// Both names are validated before the context is touched, so a bad
    /// setting never leaves a half-applied configuration behind.
    pub fn apply_to<'a>(&self, ctx: &'a LogContext) -> ConfigResult<Logger<'a>> {
        let level = self.level.as_deref().map(str::parse::<Level>).transpose()?;
        let preset = self
            .format
            .as_deref()
            .map(str::parse::<FormatPreset>)
            .transpose()?;
        Ok(ctx.configure(level, preset, self.name.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn applies_parsed_names_to_a_context() {
        let ctx = LogContext::new();
        let settings = LogSettings {
            level: Some("warning".to_string()),
            format: Some("long".to_string()),
            name: None,
        };
        let log = settings.apply_to(&ctx).unwrap();
        assert_eq!(log.level(), Level::Warning);
    }

    #[test]
    fn empty_settings_keep_defaults() {
        let ctx = LogContext::new();
        let log = LogSettings::default().apply_to(&ctx).unwrap();
        assert_eq!(log.level(), Level::Echo);
    }

    #[test]
    fn unknown_format_fails_fast() {
        let ctx = LogContext::new();
        let settings = LogSettings {
            level: None,
            format: Some("medium".to_string()),
            name: None,
        };
        match settings.apply_to(&ctx) {
            Err(ConfigError::InvalidFormat(name)) => assert_eq!(name, "medium"),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn unknown_level_fails_before_configuring() {
        let ctx = LogContext::new();
        let settings = LogSettings {
            level: Some("loud".to_string()),
            format: None,
            name: Some("aux".to_string()),
        };
        assert!(settings.apply_to(&ctx).is_err());
        // the bad setting must not have created the named logger
        let aux = ctx.configure(None, None, Some("aux"));
        assert_eq!(aux.level(), Level::Echo);
    }

    #[test]
    fn named_settings_target_a_named_logger() {
        let ctx = LogContext::new();
        let settings = LogSettings {
            level: Some("error".to_string()),
            format: None,
            name: Some("worker".to_string()),
        };
        let log = settings.apply_to(&ctx).unwrap();
        assert_eq!(log.name(), Some("worker"));
        assert_eq!(ctx.configure(None, None, None).level(), Level::Echo);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = LogSettings {
            level: Some("debug".to_string()),
            format: Some("short-time".to_string()),
            name: None,
        };
        let text = toml::to_string(&settings).unwrap();
        let parsed: LogSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn from_env_reads_both_variables() {
        std::env::set_var(ENV_LEVEL, "fatal");
        std::env::set_var(ENV_FORMAT, "long");
        let settings = LogSettings::from_env();
        std::env::remove_var(ENV_LEVEL);
        std::env::remove_var(ENV_FORMAT);
        assert_eq!(settings.level.as_deref(), Some("fatal"));
        assert_eq!(settings.format.as_deref(), Some("long"));
    }
}
