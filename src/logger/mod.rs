//! Logger factory and configuration context.
//!
//! This module owns all process-wide logging state: the severity-name
//! registry, the root logger, named loggers and the output sink. The state
//! lives in a [`LogContext`]; the crate-level [`configure`] and [`newline`]
//! functions operate on the shared global context, while tests and
//! embedders can construct private contexts with their own sinks.
//!
//! # Example
//!
//! ```
//! use echolog::{configure, FormatPreset, Level};
//!
//! let log = configure(Some(Level::Debug), Some(FormatPreset::Long), None);
//! log.debug("starting up");
//! log.warning("low disk space");
//! ```

mod format;
mod level;
mod registry;

pub use format::FormatPreset;
pub use level::Level;

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::error::ConfigResult;

use registry::LevelRegistry;

/// Where a context writes its records.
#[derive(Debug)]
pub(crate) enum Sink {
    Stderr,
    File(PathBuf),
}

impl Sink {
    fn write_line(&self, line: &str) {
        match self {
            Sink::Stderr => {
                let mut err = std::io::stderr().lock();
                let _ = writeln!(err, "{line}");
            }
            Sink::File(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = writeln!(file, "{line}");
                }
            }
        }
    }

    fn write_blank(&self, n: usize) {
        if n == 0 {
            return;
        }
        let blanks = "\n".repeat(n);
        match self {
            Sink::Stderr => {
                let mut err = std::io::stderr().lock();
                let _ = write!(err, "{blanks}");
            }
            Sink::File(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = write!(file, "{blanks}");
                }
            }
        }
    }
}

/// Per-logger configuration.
#[derive(Debug, Clone)]
struct LoggerState {
    level: Level,
    preset: FormatPreset,
    configured: bool,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            level: Level::Echo,
            preset: FormatPreset::ShortTime,
            configured: false,
        }
    }
}

#[derive(Debug)]
struct ContextInner {
    levels: LevelRegistry,
    root: LoggerState,
    named: HashMap<String, LoggerState>,
}

/// Process-wide logging state behind a single lock.
///
/// Configuration is rare-write / frequent-read; the lock is held only for
/// the duration of formatting one line, never across the sink write.
#[derive(Debug)]
pub struct LogContext {
    inner: Mutex<ContextInner>,
    sink: Sink,
}

impl LogContext {
    /// Context writing to stderr.
    pub fn new() -> Self {
        Self::with_sink(Sink::Stderr)
    }

    /// Context appending to a log file, creating parent directories as
    /// needed.
    pub fn with_log_file(path: &Path) -> ConfigResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self::with_sink(Sink::File(path.to_path_buf())))
    }

    fn with_sink(sink: Sink) -> Self {
        Self {
            inner: Mutex::new(ContextInner {
                levels: LevelRegistry::new(),
                root: LoggerState::default(),
                named: HashMap::new(),
            }),
            sink,
        }
    }

    /// The shared default context every ambient operation routes through.
    ///
    /// Configuration applied here persists for the process lifetime and
    /// affects every subsequent log call; there is no automatic teardown.
    pub fn global() -> &'static LogContext {
        static GLOBAL: OnceLock<LogContext> = OnceLock::new();
        GLOBAL.get_or_init(LogContext::new)
    }

    /// Configure and return a logger.
    ///
    /// `id` `None` targets the shared root logger; `Some` creates or
    /// retrieves a named logger, leaving the root untouched. Passing a
    /// level or preset reconfigures the target; passing neither keeps an
    /// existing configuration, or installs the defaults (ECHO, short-time)
    /// on first use.
    ///
    /// Reconfiguration installs the ECHO level into the severity registry
    /// (idempotently, once per process) and the preset's tag set as the
    /// registry's display names.
    pub fn configure(
        &self,
        level: Option<Level>,
        preset: Option<FormatPreset>,
        id: Option<&str>,
    ) -> Logger<'_> {
        let reconfigure = level.is_some() || preset.is_some();
        let mut guard = self.lock();
        let inner = &mut *guard;
        let state = match id {
            None => &mut inner.root,
            Some(name) => inner.named.entry(name.to_string()).or_default(),
        };
        if reconfigure || !state.configured {
            inner.levels.ensure_echo();
            let level = level.unwrap_or(Level::Echo);
            let preset = preset.unwrap_or_default();
            if preset.is_short() {
                inner.levels.install_tags(Level::short_tag);
            } else {
                inner.levels.install_tags(Level::long_name);
            }
            *state = LoggerState {
                level,
                preset,
                configured: true,
            };
        }
        drop(guard);
        Logger {
            ctx: self,
            name: id.map(str::to_string),
        }
    }

    /// Write `n` blank lines to the sink, but only while the root logger's
    /// level is below INFO.
    pub fn newline(&self, n: usize) {
        self.configure(None, None, None);
        let level = self.lock().root.level;
        if level < Level::Info {
            self.sink.write_blank(n);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ContextInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a logger within a [`LogContext`].
///
/// Handles are cheap to clone and re-read the context on every call, so a
/// later `configure` is picked up by handles created earlier.
#[derive(Debug, Clone)]
pub struct Logger<'a> {
    ctx: &'a LogContext,
    name: Option<String>,
}

impl Logger<'_> {
    /// Emit a record at `level`, if enabled.
    pub fn log(&self, level: Level, message: &str) {
        let guard = self.ctx.lock();
        let state = match &self.name {
            None => Some(&guard.root),
            Some(name) => guard.named.get(name),
        };
        let line = match state {
            Some(state) if level >= state.level => {
                format::render(state.preset, &guard.levels, level, message)
            }
            _ => return,
        };
        drop(guard);
        self.ctx.sink.write_line(&line);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn echo(&self, message: &str) {
        self.log(Level::Echo, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message);
    }

    /// The logger's configured threshold.
    pub fn level(&self) -> Level {
        let guard = self.ctx.lock();
        match &self.name {
            None => guard.root.level,
            Some(name) => guard.named.get(name).map(|s| s.level).unwrap_or(Level::Echo),
        }
    }

    /// Whether a record at `level` would be emitted.
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// The logger's identity, `None` for the root logger.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Configure and return a logger on the global context.
///
/// See [`LogContext::configure`] for the semantics of each argument.
pub fn configure(
    level: Option<Level>,
    preset: Option<FormatPreset>,
    id: Option<&str>,
) -> Logger<'static> {
    LogContext::global().configure(level, preset, id)
}

/// Print blank lines through the global context when verbosity allows.
pub fn newline(n: usize) {
    LogContext::global().newline(n);
}
