//! Runs a short demo: every format preset, every severity, then a
//! multi-argument echo call.
//!
//! ```bash
//! cargo run --bin demo
//! ECHOLOG_LEVEL=info ECHOLOG_FORMAT=long cargo run --bin demo
//! ```

use anyhow::Result;
use colored::Colorize;
use echolog::{configure, echo, newline, FormatPreset, Level, LogSettings};

fn main() -> Result<()> {
    let env = LogSettings::from_env();
    let env_override = env.level.is_some() || env.format.is_some();
    env.apply()?;

    newline(3);

    // the preset tour reconfigures the root logger, so skip it when the
    // environment pinned a configuration
    if !env_override {
        for preset in [
            FormatPreset::ShortTime,
            FormatPreset::Short,
            FormatPreset::LongTime,
            FormatPreset::Long,
        ] {
            println!("{}", format!("--- preset: {preset} ---").bold().cyan());
            let log = configure(Some(Level::Debug), Some(preset), None);

            echo!(format!("demo echo call with preset {preset}"));
            log.debug(&format!("demo debug message with preset {preset}"));
            log.echo(&format!("demo echo message with preset {preset}"));
            log.info(&format!("demo info message with preset {preset}"));
            log.warning(&format!("demo warn message with preset {preset}"));
            log.error(&format!("demo error message with preset {preset}"));
            log.fatal(&format!("demo fatal message with preset {preset}"));

            newline(1);
        }
    }

    let a = 2;
    let b = vec![3, 4];

    echo!("example echo call with multiple arguments", a, blah = b);
    newline(1);

    Ok(())
}
