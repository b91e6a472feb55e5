//! Argument-expression splitting.
//!
//! Decomposes the literal text of an argument list into per-argument
//! substrings, splitting only on commas at nesting depth zero. Commas
//! inside parentheses, brackets, braces, string literals, raw strings or
//! char literals never cause a split, and a top-level `name = value` entry
//! is recognized as a keyword argument so only the name survives as its
//! label.

/// One argument recovered from call text, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgToken {
    /// Expression text, used verbatim as the display label.
    Positional(String),
    /// `name = value` entry; only the name is kept for the label.
    Keyword(String),
}

impl ArgToken {
    /// The label this token contributes to an echo record.
    pub fn label(&self) -> &str {
        match self {
            ArgToken::Positional(text) => text,
            ArgToken::Keyword(name) => name,
        }
    }
}

/// Split raw argument-list text into top-level argument tokens.
pub fn split_args(raw: &str) -> Vec<ArgToken> {
    split_top_level(raw).iter().map(|s| classify(s)).collect()
}

fn split_top_level(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                let end = string_span(&chars, i);
                current.extend(&chars[i..end]);
                i = end;
            }
            'r' if is_raw_string_start(&chars, i) => {
                let end = raw_string_span(&chars, i);
                current.extend(&chars[i..end]);
                i = end;
            }
            '\'' => match char_literal_span(&chars, i) {
                Some(end) => {
                    current.extend(&chars[i..end]);
                    i = end;
                }
                // lifetime marker, not a literal
                None => {
                    current.push(c);
                    i += 1;
                }
            },
            '(' | '[' | '{' => {
                depth += 1;
                current.push(c);
                i += 1;
            }
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                current.push(c);
                i += 1;
            }
            ',' if depth == 0 => {
                pieces.push(std::mem::take(&mut current));
                i += 1;
            }
            _ => {
                current.push(c);
                i += 1;
            }
        }
    }
    if !current.trim().is_empty() {
        pieces.push(current);
    }
    pieces
}

fn classify(piece: &str) -> ArgToken {
    match keyword_name(piece) {
        Some(name) => ArgToken::Keyword(name),
        None => ArgToken::Positional(tidy(piece)),
    }
}

/// Top-level `identifier = expression` detection.
///
/// The `=` must be a plain assignment at depth zero: `==`, `<=`, `>=`,
/// `!=`, `=>` and compound assignment operators never qualify, and an
/// `ident = expr` nested inside a call's own argument list is at depth one
/// or deeper.
fn keyword_name(piece: &str) -> Option<String> {
    let chars: Vec<char> = piece.chars().collect();
    let mut depth = 0usize;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '"' => i = string_span(&chars, i),
            'r' if is_raw_string_start(&chars, i) => i = raw_string_span(&chars, i),
            '\'' => i = char_literal_span(&chars, i).unwrap_or(i + 1),
            '(' | '[' | '{' => {
                depth += 1;
                i += 1;
            }
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            '=' if depth == 0 => {
                let prev = if i > 0 { chars[i - 1] } else { ' ' };
                let next = chars.get(i + 1).copied().unwrap_or(' ');
                if next == '='
                    || next == '>'
                    || matches!(prev, '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^')
                {
                    i += 1;
                    continue;
                }
                let lhs: String = chars[..i].iter().collect();
                let lhs = lhs.trim();
                return is_identifier(lhs).then(|| lhs.to_string());
            }
            _ => i += 1,
        }
    }
    None
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// Normalize the spacing token-stream stringification inserts between
/// tokens, so labels read like the source expression. String and char
/// literal interiors are preserved verbatim.
fn tidy(piece: &str) -> String {
    let chars: Vec<char> = piece.trim().chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            let end = string_span(&chars, i);
            out.extend(&chars[i..end]);
            i = end;
        } else if c == 'r' && is_raw_string_start(&chars, i) {
            let end = raw_string_span(&chars, i);
            out.extend(&chars[i..end]);
            i = end;
        } else if c == '\'' {
            match char_literal_span(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..end]);
                    i = end;
                }
                None => {
                    out.push(c);
                    i += 1;
                }
            }
        } else if c.is_whitespace() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() {
                let prev = out.chars().last().unwrap_or(' ');
                if !drop_space(&out, prev, chars[j]) {
                    out.push(' ');
                }
            }
            i = j;
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// Whether the space between `prev` and `next` is stringification noise.
fn drop_space(out: &str, prev: char, next: char) -> bool {
    let callee = prev.is_alphanumeric() || matches!(prev, '_' | '!' | ')' | ']' | '"');
    matches!(next, ',' | ';' | '?' | ')' | ']' | '.' | ':')
        || matches!(prev, '(' | '[' | '.')
        || out.ends_with("::")
        || (callee && matches!(next, '(' | '['))
        || ((prev.is_alphanumeric() || prev == '_') && next == '!')
}

/// End (exclusive) of the `"…"` literal starting at `start`.
fn string_span(chars: &[char], start: usize) -> usize {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '"' => return i + 1,
            _ => i += 1,
        }
    }
    chars.len()
}

/// Whether `start` begins a raw string literal (`r"…"` or `r#"…"#`).
fn is_raw_string_start(chars: &[char], start: usize) -> bool {
    if chars[start] != 'r' {
        return false;
    }
    if start > 0 && (chars[start - 1].is_alphanumeric() || chars[start - 1] == '_') {
        return false;
    }
    let mut j = start + 1;
    while j < chars.len() && chars[j] == '#' {
        j += 1;
    }
    j < chars.len() && chars[j] == '"'
}

/// End (exclusive) of the raw string literal starting at `start`.
fn raw_string_span(chars: &[char], start: usize) -> usize {
    let mut hashes = 0;
    let mut i = start + 1;
    while i < chars.len() && chars[i] == '#' {
        hashes += 1;
        i += 1;
    }
    i += 1;
    while i < chars.len() {
        if chars[i] == '"' {
            let mut k = 0;
            while k < hashes && chars.get(i + 1 + k) == Some(&'#') {
                k += 1;
            }
            if k == hashes {
                return i + 1 + hashes;
            }
        }
        i += 1;
    }
    chars.len()
}

/// End (exclusive) of a char literal starting at `start`, or `None` when
/// the quote is a lifetime marker.
fn char_literal_span(chars: &[char], start: usize) -> Option<usize> {
    let next = *chars.get(start + 1)?;
    if next == '\\' {
        match *chars.get(start + 2)? {
            'u' => {
                let mut i = start + 3;
                if chars.get(i) != Some(&'{') {
                    return None;
                }
                while i < chars.len() && chars[i] != '}' {
                    i += 1;
                }
                (chars.get(i + 1) == Some(&'\'')).then_some(i + 2)
            }
            'x' => (chars.get(start + 5) == Some(&'\'')).then_some(start + 6),
            _ => (chars.get(start + 3) == Some(&'\'')).then_some(start + 4),
        }
    } else if next != '\'' && chars.get(start + 2) == Some(&'\'') {
        Some(start + 3)
    } else {
        None
    }
}
