//! Whitespace trimming and literal substring replacement.

use std::borrow::Cow;

/// Characters removed by [`trim`]: space, tab, LF, CR, form feed, vertical tab.
pub const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0C', '\x0B'];

#[inline]
fn is_ini_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Trim leading and trailing [`WHITESPACE`].
///
/// Unlike [`str::trim`] this does not strip other Unicode whitespace such as
/// U+00A0, so keys containing it keep their exact spelling.
#[inline]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_ini_whitespace)
}

/// Replace every non-overlapping occurrence of `from` with `to`, scanning
/// left to right.
///
/// Scanning resumes after the inserted replacement, so a `to` containing
/// `from` is never matched again. An empty `from` leaves `s` untouched.
pub fn replace_all<'a>(s: &'a str, from: &str, to: &str) -> Cow<'a, str> {
    if from.is_empty() || !s.contains(from) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut last = 0usize;
    for (idx, _) in s.match_indices(from) {
        out.push_str(&s[last..idx]);
        out.push_str(to);
        last = idx + from.len();
    }
    out.push_str(&s[last..]);
    Cow::Owned(out)
}

/// Lowercase every character.
pub fn fold_case(s: &str) -> Cow<'_, str> {
    if s.is_ascii() && !s.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.to_lowercase())
}
