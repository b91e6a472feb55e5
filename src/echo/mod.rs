//! Expression echo: print an expression's source text alongside its value.
//!
//! The [`echo!`](crate::echo!) macro captures, at the call site, the
//! caller's file and line, the literal argument-list text, and every
//! evaluated argument. The renderer splits the captured text into
//! per-argument labels and emits one record per argument at ECHO severity
//! through the root logger, so nothing needs to be named twice:
//!
//! ```
//! let a = 2;
//! let b = vec![3, 4];
//! echolog::echo!("state", a, tail = b);
//! // out.rs @ line 3:   "state" => "state"
//! // out.rs @ line 3:   a => 2
//! // out.rs @ line 3:   tail => [3, 4]
//! ```
//!
//! Echo never interrupts the caller: when the captured text cannot be
//! paired with the values, records degrade to type-name or index labels
//! instead of failing.

pub mod splitter;

pub use splitter::{split_args, ArgToken};

use std::path::Path;

use crate::color;
use crate::logger::LogContext;

/// Source location captured at an `echo!` call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Final path component, as displayed in echo records.
    pub fn basename(&self) -> &str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

/// One evaluated argument captured by `echo!`.
///
/// Values are captured by reference and rendered immediately, so the macro
/// never consumes or mutates its arguments.
#[derive(Debug, Clone)]
pub struct EchoValue {
    keyword: Option<&'static str>,
    type_name: &'static str,
    rendered: String,
}

impl EchoValue {
    /// Capture a positional argument.
    pub fn positional<T: std::fmt::Debug + ?Sized>(value: &T) -> Self {
        Self {
            keyword: None,
            type_name: std::any::type_name::<T>(),
            rendered: format!("{value:?}"),
        }
    }

    /// Capture a `name = value` argument.
    pub fn keyword<T: std::fmt::Debug + ?Sized>(name: &'static str, value: &T) -> Self {
        Self {
            keyword: Some(name),
            type_name: std::any::type_name::<T>(),
            rendered: format!("{value:?}"),
        }
    }

    /// The keyword name, `None` for positional arguments.
    pub fn keyword_name(&self) -> Option<&'static str> {
        self.keyword
    }

    /// The value's rendered representation.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// The value's static type name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Render captured values through the global context's root logger.
pub fn emit(site: CallSite, raw: &str, values: Vec<EchoValue>) {
    emit_with(LogContext::global(), site, raw, values);
}

/// Render captured values through a specific context.
pub fn emit_with(ctx: &LogContext, site: CallSite, raw: &str, values: Vec<EchoValue>) {
    let logger = ctx.configure(None, None, None);
    if values.is_empty() {
        return;
    }
    let labels = resolve_labels(raw, &values);
    let yellow = color::lookup("y").unwrap_or_default();
    let cyan = color::lookup("c").unwrap_or_default();
    let green = color::lookup("g").unwrap_or_default();
    let reset = color::RESET;
    let prefix = format!("{} @ line {yellow}{}{reset}:", site.basename(), site.line());
    for (label, value) in labels.iter().zip(&values) {
        logger.echo(&format!(
            "{prefix} \t {cyan}{label}{reset} => {green}{}{reset}",
            value.rendered()
        ));
    }
}

/// Pair each value with its display label.
///
/// Degrades rather than fails: unusable call text labels every value with
/// its type name, and a token/value mismatch labels them by index.
fn resolve_labels(raw: &str, values: &[EchoValue]) -> Vec<String> {
    if raw.trim().is_empty() {
        return values.iter().map(|v| v.type_name().to_string()).collect();
    }
    let tokens = split_args(raw);
    pair_tokens(&tokens, values)
        .unwrap_or_else(|| (0..values.len()).map(|i| format!("arg{i}")).collect())
}

/// Zip tokens with values: positional tokens pair in order, keyword tokens
/// pair by name. `None` on any mismatch.
fn pair_tokens(tokens: &[ArgToken], values: &[EchoValue]) -> Option<Vec<String>> {
    if tokens.len() != values.len() {
        return None;
    }
    let mut positionals = tokens.iter().filter_map(|token| match token {
        ArgToken::Positional(text) => Some(text),
        ArgToken::Keyword(_) => None,
    });
    let keywords: Vec<&str> = tokens
        .iter()
        .filter_map(|token| match token {
            ArgToken::Keyword(name) => Some(name.as_str()),
            ArgToken::Positional(_) => None,
        })
        .collect();
    let mut labels = Vec::with_capacity(values.len());
    for value in values {
        match value.keyword_name() {
            None => labels.push(positionals.next()?.clone()),
            Some(name) => {
                if !keywords.contains(&name) {
                    return None;
                }
                labels.push(name.to_string());
            }
        }
    }
    if positionals.next().is_some() {
        return None;
    }
    Some(labels)
}

/// Print each argument's source expression alongside its evaluated value.
///
/// Arguments are either plain expressions or `name = value` entries; the
/// name then replaces the expression text as the label. Records go through
/// the global root logger at ECHO severity; see [`echo_to!`](crate::echo_to!)
/// to target a specific [`LogContext`].
///
/// ```
/// let answer = 42;
/// echolog::echo!(answer, answer * 2, label = "doubled");
/// ```
#[macro_export]
macro_rules! echo {
    () => {
        $crate::echo::emit(
            $crate::echo::CallSite::new(::std::file!(), ::std::line!()),
            "",
            ::std::vec::Vec::new(),
        )
    };
    ($($args:tt)+) => {
        $crate::echo::emit(
            $crate::echo::CallSite::new(::std::file!(), ::std::line!()),
            ::std::stringify!($($args)+),
            $crate::__echo_values!(@collect [] $($args)+),
        )
    };
}

/// Like [`echo!`](crate::echo!), but renders through the given
/// [`LogContext`] instead of the global one.
#[macro_export]
macro_rules! echo_to {
    ($ctx:expr $(,)?) => {
        $crate::echo::emit_with(
            &$ctx,
            $crate::echo::CallSite::new(::std::file!(), ::std::line!()),
            "",
            ::std::vec::Vec::new(),
        )
    };
    ($ctx:expr, $($args:tt)+) => {
        $crate::echo::emit_with(
            &$ctx,
            $crate::echo::CallSite::new(::std::file!(), ::std::line!()),
            ::std::stringify!($($args)+),
            $crate::__echo_values!(@collect [] $($args)+),
        )
    };
}

/// Value-collection helper for [`echo!`](crate::echo!): walks the argument
/// tokens, capturing `name = value` entries as keywords and everything else
/// as positional expressions.
#[doc(hidden)]
#[macro_export]
macro_rules! __echo_values {
    (@collect [$($acc:tt)*]) => {
        ::std::vec![$($acc)*]
    };
    (@collect [$($acc:tt)*] $name:ident = $val:expr, $($rest:tt)+) => {
        $crate::__echo_values!(
            @collect
            [$($acc)* $crate::echo::EchoValue::keyword(::std::stringify!($name), &$val),]
            $($rest)+
        )
    };
    (@collect [$($acc:tt)*] $name:ident = $val:expr $(,)?) => {
        $crate::__echo_values!(
            @collect
            [$($acc)* $crate::echo::EchoValue::keyword(::std::stringify!($name), &$val),]
        )
    };
    (@collect [$($acc:tt)*] $e:expr, $($rest:tt)+) => {
        $crate::__echo_values!(
            @collect
            [$($acc)* $crate::echo::EchoValue::positional(&$e),]
            $($rest)+
        )
    };
    (@collect [$($acc:tt)*] $e:expr $(,)?) => {
        $crate::__echo_values!(
            @collect
            [$($acc)* $crate::echo::EchoValue::positional(&$e),]
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callsite_basename_strips_directories() {
        let site = CallSite::new("src/bin/demo.rs", 12);
        assert_eq!(site.basename(), "demo.rs");
        assert_eq!(site.line(), 12);
    }

    #[test]
    fn labels_come_from_call_text() {
        let values = vec![EchoValue::positional(&1), EchoValue::positional(&2)];
        assert_eq!(resolve_labels("a, b", &values), vec!["a", "b"]);
    }

    #[test]
    fn keyword_values_pair_by_name() {
        let values = vec![
            EchoValue::positional(&"x"),
            EchoValue::keyword("tail", &vec![1, 2]),
        ];
        assert_eq!(
            resolve_labels("\"x\", tail = rest", &values),
            vec!["\"x\"", "tail"]
        );
    }

    #[test]
    fn empty_call_text_degrades_to_type_names() {
        let values = vec![EchoValue::positional(&7u8)];
        assert_eq!(resolve_labels("", &values), vec!["u8"]);
    }

    #[test]
    fn token_count_mismatch_degrades_to_index_labels() {
        let values = vec![EchoValue::positional(&1), EchoValue::positional(&2)];
        assert_eq!(resolve_labels("only_one", &values), vec!["arg0", "arg1"]);
    }

    #[test]
    fn unmatched_keyword_name_degrades_to_index_labels() {
        let values = vec![EchoValue::keyword("missing", &1)];
        assert_eq!(resolve_labels("present = 1", &values), vec!["arg0"]);
    }

    #[test]
    fn kind_mismatch_degrades_to_index_labels() {
        // a keyword token paired with a positional-only value list
        let values = vec![EchoValue::positional(&1)];
        assert_eq!(resolve_labels("k = 1", &values), vec!["arg0"]);
    }

    #[test]
    fn values_render_with_debug() {
        let value = EchoValue::positional(&vec![3, 4]);
        assert_eq!(value.rendered(), "[3, 4]");
        let value = EchoValue::keyword("s", &"text");
        assert_eq!(value.rendered(), "\"text\"");
        assert_eq!(value.keyword_name(), Some("s"));
    }
}
