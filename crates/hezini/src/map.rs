//! Insertion-ordered map keyed by normalized strings.
//!
//! Entries live in a `Vec` in first-insert order; a hash index maps each
//! normalized key to its slot. Lookups and upserts are O(1) on average.
//! Removal shifts the tail of the vector down and rewrites every stale
//! position in the index, which makes it O(n).

use std::borrow::Cow;
use std::collections::HashMap;

use crate::text;

/// Key normalization policy, fixed when a map is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    /// Keys are trimmed only
    #[default]
    Sensitive,
    /// Keys are trimmed, then lowercased
    Insensitive,
}

impl KeyCase {
    pub fn normalize(self, key: &str) -> Cow<'_, str> {
        let trimmed = text::trim(key);
        match self {
            KeyCase::Sensitive => Cow::Borrowed(trimmed),
            KeyCase::Insensitive => text::fold_case(trimmed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    key: String,
    value: V,
}

impl<V> Entry<V> {
    /// The normalized key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (String, V) {
        (self.key, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<Entry<V>>,
    index: HashMap<String, usize>,
    case: KeyCase,
}

/// Value built for a key that is read or created before it was set.
///
/// Plain `Default` types use `default()`. A nested `OrderedMap` takes the
/// key case of the map that holds it, so an insensitive document never grows
/// a case-sensitive section. `OrderedMap` does not implement `Default` for
/// that reason.
pub trait CaseDefault {
    fn case_default(case: KeyCase) -> Self;
}

impl<T: Default> CaseDefault for T {
    fn case_default(_: KeyCase) -> Self {
        T::default()
    }
}

impl<V> CaseDefault for OrderedMap<V> {
    fn case_default(case: KeyCase) -> Self {
        Self::with_case(case)
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::with_case(KeyCase::default())
    }

    pub fn with_case(case: KeyCase) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            case,
        }
    }

    pub fn key_case(&self) -> KeyCase {
        self.case
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot of `key` in iteration order.
    pub fn position(&self, key: &str) -> Option<usize> {
        let key = self.case.normalize(key);
        self.index.get(key.as_ref()).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|pos| &self.entries[pos].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.position(key).map(|pos| &mut self.entries[pos].value)
    }

    /// Copy of the stored value, or the [`CaseDefault`] value when `key` is
    /// absent.
    pub fn get_or_default(&self, key: &str) -> V
    where
        V: CaseDefault + Clone,
    {
        match self.get(key) {
            Some(value) => value.clone(),
            None => V::case_default(self.case),
        }
    }

    /// Mutable slot for `key`, appending `f()` first if the key is new.
    pub fn get_or_insert_with<F>(&mut self, key: &str, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let key = self.case.normalize(key);
        let pos = match self.index.get(key.as_ref()) {
            Some(&pos) => pos,
            None => self.push_normalized(key.into_owned(), f()),
        };
        &mut self.entries[pos].value
    }

    pub fn get_or_insert_default(&mut self, key: &str) -> &mut V
    where
        V: CaseDefault,
    {
        let case = self.case;
        self.get_or_insert_with(key, || V::case_default(case))
    }

    /// Upsert. A new key is appended; an existing key keeps its slot and the
    /// previous value is returned.
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        let key = self.case.normalize(key);
        match self.index.get(key.as_ref()) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].value, value)),
            None => {
                self.push_normalized(key.into_owned(), value);
                None
            }
        }
    }

    /// Apply [`set`](Self::set) to each pair in order.
    pub fn set_many<I, K>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        for (key, value) in pairs {
            self.set(key.as_ref(), value);
        }
    }

    /// Remove `key` and return its value. Later entries move down one slot.
    pub fn take(&mut self, key: &str) -> Option<V> {
        let key = self.case.normalize(key);
        let pos = self.index.remove(key.as_ref())?;
        let entry = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(entry.value)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.take(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(|e| &e.value)
    }

    fn push_normalized(&mut self, key: String, value: V) -> usize {
        let pos = self.entries.len();
        self.index.insert(key.clone(), pos);
        self.entries.push(Entry { key, value });
        pos
    }
}

pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (e.key.as_str(), &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (e.key.as_str(), &e.value))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::iter::Map<std::vec::IntoIter<Entry<V>>, fn(Entry<V>) -> (String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .into_iter()
            .map(Entry::into_parts as fn(Entry<V>) -> (String, V))
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.set_many(iter);
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.set_many(iter);
        map
    }
}
