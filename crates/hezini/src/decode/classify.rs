//! Single-line classification.

use std::borrow::Cow;

use crate::text;

/// Spelling of a literal `=` inside a key.
pub const ESCAPE_TOKEN: &str = "\\=";

// Separator search runs on a copy where each escape token is masked. The
// mask must have the token's byte length so offsets map back to the line.
const ESCAPE_MASK: &str = "  ";
const _: () = assert!(ESCAPE_TOKEN.len() == ESCAPE_MASK.len());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Section(&'a str),
    KeyValue { key: Cow<'a, str>, value: Cow<'a, str> },
    Unrecognized,
}

pub fn classify(raw: &str) -> LineKind<'_> {
    let line = text::trim(raw);
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with(';') {
        return LineKind::Comment;
    }
    if line.starts_with('[') {
        if let Some(name) = section_name(line) {
            return LineKind::Section(name);
        }
        // no closing bracket: retry as key=value
    }
    key_value(line).unwrap_or(LineKind::Unrecognized)
}

/// `line` starts with `[`. A `;` comment is cut off before looking for the
/// last `]`.
fn section_name(line: &str) -> Option<&str> {
    let header = match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let close = header.rfind(']')?;
    Some(text::trim(&header[1..close]))
}

/// Key and value both have `\=` turned back into `=` and are trimmed.
fn key_value(line: &str) -> Option<LineKind<'_>> {
    let masked = text::replace_all(line, ESCAPE_TOKEN, ESCAPE_MASK);
    let sep = masked.find('=')?;
    Some(LineKind::KeyValue {
        key: unescape_trimmed(&line[..sep]),
        value: unescape_trimmed(&line[sep + 1..]),
    })
}

fn unescape_trimmed(s: &str) -> Cow<'_, str> {
    match text::replace_all(s, ESCAPE_TOKEN, "=") {
        Cow::Borrowed(b) => Cow::Borrowed(text::trim(b)),
        Cow::Owned(o) => Cow::Owned(text::trim(&o).to_string()),
    }
}
