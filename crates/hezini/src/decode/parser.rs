use log::{debug, trace};

use crate::decode::classify::{LineKind, classify};
use crate::document::{GLOBAL_SECTION, IniDocument};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::text;

/// Accumulates classified lines into an [`IniDocument`].
///
/// Key/value lines go to the section named by the most recent header, or to
/// [`GLOBAL_SECTION`] before any header. Blank, comment and (outside strict
/// mode) unrecognized lines leave the current section unchanged.
pub struct Parser {
    doc: IniDocument,
    current: String,
    line: usize,
    strict: bool,
}

impl Parser {
    pub fn new(options: &Options) -> Self {
        Self {
            doc: IniDocument::with_case(options.key_case),
            current: GLOBAL_SECTION.to_string(),
            line: 0,
            strict: options.strict,
        }
    }

    pub fn current_section(&self) -> &str {
        &self.current
    }

    /// Number of lines fed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn feed(&mut self, raw: &str) -> Result<()> {
        self.line += 1;
        match classify(raw) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Section(name) => {
                trace!("line {}: entering section [{}]", self.line, name);
                self.doc.section_or_insert(name);
                self.current.clear();
                self.current.push_str(name);
            }
            LineKind::KeyValue { key, value } => {
                self.doc
                    .section_or_insert(&self.current)
                    .set(&key, value.into_owned());
            }
            LineKind::Unrecognized => {
                if self.strict {
                    return Err(Error::Syntax {
                        line: self.line,
                        message: format!("unrecognized line: {:?}", text::trim(raw)),
                    });
                }
                debug!("line {}: skipping unrecognized line", self.line);
            }
        }
        Ok(())
    }

    pub fn feed_all<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed(line.as_ref())?;
        }
        Ok(())
    }

    pub fn finish(self) -> IniDocument {
        self.doc
    }
}
