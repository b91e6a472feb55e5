//! ANSI color table.
//!
//! A read-only, process-wide mapping from color names to terminal escape
//! sequences. Every color is reachable under its full name and its one or
//! two letter abbreviation (`red` / `r`, `gray` / `gy`); prefixing a key
//! with `bg_` selects the background variant. The special key `reset`
//! clears all attributes.
//!
//! # Example
//!
//! ```
//! use echolog::color;
//!
//! let red = color::lookup("r").unwrap();
//! assert_eq!(Some(red), color::lookup("red"));
//! println!("{red}alert{}", color::RESET);
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

/// Escape sequence that clears color and style attributes.
pub const RESET: &str = "\x1b[0m";

const ANSI_ESC: &str = "\x1b[";

/// Color names with their abbreviations, in ANSI index order.
const COLORS: [(&str, &str); 9] = [
    ("black", "k"),
    ("red", "r"),
    ("green", "g"),
    ("yellow", "y"),
    ("blue", "b"),
    ("magenta", "m"),
    ("cyan", "c"),
    ("white", "w"),
    ("gray", "gy"),
];

fn table() -> &'static HashMap<String, String> {
    static TABLE: OnceLock<HashMap<String, String>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::new();
        for (i, (name, abbv)) in COLORS.iter().enumerate() {
            let fg = format!("{ANSI_ESC}3{i};1m");
            let bg = format!("{ANSI_ESC}4{i};1m");
            table.insert((*name).to_string(), fg.clone());
            table.insert((*abbv).to_string(), fg);
            table.insert(format!("bg_{name}"), bg.clone());
            table.insert(format!("bg_{abbv}"), bg);
        }
        table.insert("reset".to_string(), RESET.to_string());
        table
    })
}

/// Look up the escape sequence for a color name or abbreviation.
///
/// Returns `None` for unknown keys.
pub fn lookup(name: &str) -> Option<&'static str> {
    table().get(name).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_alias_full_names() {
        for (name, abbv) in COLORS {
            assert_eq!(lookup(name), lookup(abbv));
            assert_eq!(lookup(&format!("bg_{name}")), lookup(&format!("bg_{abbv}")));
        }
    }

    #[test]
    fn background_differs_from_foreground() {
        assert_ne!(lookup("bg_r"), lookup("r"));
    }

    #[test]
    fn reset_is_defined() {
        assert_eq!(lookup("reset"), Some(RESET));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(lookup("chartreuse"), None);
    }

    #[test]
    fn codes_follow_ansi_indices() {
        assert_eq!(lookup("red"), Some("\x1b[31;1m"));
        assert_eq!(lookup("bg_red"), Some("\x1b[41;1m"));
    }
}
