//! Echolog - expression-echo debug printing on a colorized logger
//!
//! Echolog augments plain logging with an [`echo!`] macro that prints both
//! the literal source expression of each argument and the value it
//! evaluates to, without naming anything twice. Around it sits a small
//! logger factory producing colorized, timestamped lines in four fixed
//! layouts, with an extra ECHO severity between DEBUG and INFO.
//!
//! - **`echo`** - the `echo!` macro, call-site capture and the
//!   argument-expression splitter
//! - **`logger`** - severity taxonomy, format presets, the configuration
//!   context and the logger factory
//! - **`color`** - the ANSI color table
//! - **`config`** - serializable settings and environment overrides
//!
//! # Example: echoing expressions
//!
//! ```
//! let a = 2;
//! let b = vec![3, 4];
//! echolog::echo!("text", a, blah = b);
//! // text.rs @ line 3:   "text" => "text"
//! // text.rs @ line 3:   a => 2
//! // text.rs @ line 3:   blah => [3, 4]
//! ```
//!
//! # Example: configuring the logger
//!
//! ```
//! use echolog::{configure, newline, FormatPreset, Level};
//!
//! let log = configure(Some(Level::Debug), Some(FormatPreset::LongTime), None);
//! log.debug("starting up");
//! log.warning("low disk space");
//! newline(1);
//! ```
//!
//! Configuration applied to the root logger is process-wide and persists
//! for the process lifetime; see [`LogContext`] to scope state to an
//! explicit context instead.

pub mod color;
pub mod config;
pub mod echo;
pub mod error;
pub mod logger;

// Re-export main types for convenience
pub use config::LogSettings;
pub use error::{ConfigError, ConfigResult};
pub use logger::{configure, newline, FormatPreset, Level, LogContext, Logger};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::LogSettings;
    pub use crate::logger::{configure, newline, FormatPreset, Level, LogContext, Logger};
    pub use crate::{echo, echo_to};
}
