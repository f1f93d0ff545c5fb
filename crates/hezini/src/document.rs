//! In-memory INI model: section name -> (key -> value).

use crate::map::OrderedMap;

/// Name of the section that collects keys appearing before any header.
pub const GLOBAL_SECTION: &str = "";

pub type Section = OrderedMap<String>;

pub type IniDocument = OrderedMap<Section>;

impl OrderedMap<Section> {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.get(name)
    }

    /// Section `name`, created empty (with this document's key case) if missing.
    pub fn section_or_insert(&mut self, name: &str) -> &mut Section {
        self.get_or_insert_default(name)
    }

    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key).map(String::as_str)
    }

    pub fn set_value(&mut self, section: &str, key: &str, value: impl Into<String>) -> Option<String> {
        self.section_or_insert(section).set(key, value.into())
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys()
    }
}
