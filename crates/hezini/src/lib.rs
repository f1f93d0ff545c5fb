#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod text;
pub mod map;
pub mod document;
pub mod decode;

#[cfg(feature = "serde")]
mod serde_impl;

pub use crate::document::{IniDocument, Section};
pub use crate::error::{Error, Result};
pub use crate::map::{CaseDefault, Entry, KeyCase, OrderedMap};
pub use crate::options::Options;

use std::io::Read;

use crate::decode::parser::Parser;

pub fn parse_str(s: &str, options: &Options) -> Result<IniDocument> {
    parse_bytes(s.as_bytes(), options)
}

/// Strips a UTF-8 byte-order mark, splits on `\n` and parses the lines.
pub fn parse_bytes(bytes: &[u8], options: &Options) -> Result<IniDocument> {
    let mut parser = Parser::new(options);
    parser.feed_all(crate::decode::reader::read_lines(bytes))?;
    Ok(parser.finish())
}

pub fn parse_lines<I, S>(lines: I, options: &Options) -> Result<IniDocument>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new(options);
    parser.feed_all(lines)?;
    Ok(parser.finish())
}

pub fn parse_reader<R: Read>(mut reader: R, options: &Options) -> Result<IniDocument> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_bytes(&buf, options)
}
