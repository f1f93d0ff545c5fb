//! Byte buffer to text lines.
//!
//! A leading UTF-8 byte-order mark is skipped and the rest is split on `\n`.
//! One trailing `\r` is dropped from every line, so CRLF and LF input yield
//! the same lines; a `\r` anywhere else stays in the text. A final line with
//! no terminating `\n` is still emitted. Invalid UTF-8 is replaced with
//! U+FFFD rather than rejected.

use std::borrow::Cow;

pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[inline]
pub fn strip_bom(buf: &[u8]) -> &[u8] {
    buf.strip_prefix(UTF8_BOM.as_slice()).unwrap_or(buf)
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_newline(b: &[u8]) -> Option<usize> {
    memchr::memchr(b'\n', b)
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_newline(b: &[u8]) -> Option<usize> {
    b.iter().position(|&c| c == b'\n')
}

fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

pub struct Lines<'a> {
    rest: &'a [u8],
}

pub fn read_lines(buf: &[u8]) -> Lines<'_> {
    Lines {
        rest: strip_bom(buf),
    }
}

pub fn split_lines(buf: &[u8]) -> Vec<Cow<'_, str>> {
    read_lines(buf).collect()
}

impl<'a> Iterator for Lines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match find_newline(self.rest) {
            Some(pos) => {
                let line = &self.rest[..pos];
                self.rest = &self.rest[pos + 1..];
                Some(decode_line(line))
            }
            None => {
                let line = self.rest;
                self.rest = &[];
                Some(decode_line(line))
            }
        }
    }
}

impl core::iter::FusedIterator for Lines<'_> {}
