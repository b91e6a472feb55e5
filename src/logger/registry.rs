//! Display-name registry for severity levels.

use std::collections::HashMap;

use super::level::Level;

/// Maps numeric severity values to the names the formatter prints.
///
/// This is the shared level-name table of the process: the active format
/// preset installs its tag set here, and the custom ECHO level is
/// registered once per process the first time a logger is configured.
#[derive(Debug)]
pub(crate) struct LevelRegistry {
    names: HashMap<u8, String>,
    echo_installed: bool,
}

impl LevelRegistry {
    /// Registry seeded with the built-in levels under their full names.
    pub fn new() -> Self {
        let mut names = HashMap::new();
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Fatal,
        ] {
            names.insert(level.value(), level.long_name().to_string());
        }
        Self {
            names,
            echo_installed: false,
        }
    }

    /// Install the ECHO level. Idempotent: later calls are no-ops and the
    /// entry is never duplicated.
    pub fn ensure_echo(&mut self) {
        if !self.echo_installed {
            self.names
                .insert(Level::Echo.value(), Level::Echo.long_name().to_string());
            self.echo_installed = true;
        }
    }

    /// Install a whole tag set, one display name per level, as preset
    /// selection does.
    pub fn install_tags<F>(&mut self, name_of: F)
    where
        F: Fn(Level) -> &'static str,
    {
        for level in Level::ALL {
            self.names.insert(level.value(), name_of(level).to_string());
        }
    }

    /// Display name for a level under the currently installed tag set.
    pub fn display(&self, level: Level) -> &str {
        self.names
            .get(&level.value())
            .map(String::as_str)
            .unwrap_or("UNSET")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn echo_installed(&self) -> bool {
        self.echo_installed
    }
}
