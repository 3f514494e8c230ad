//! Ordered-unique search results.

use grimoire_core::Script;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Mapping from primary key to script where iteration order encodes
/// relevance (most relevant first) and keys are unique.
///
/// Recreated on every settled search pass; never mutated once published.
#[derive(Debug, Clone, Default)]
pub struct MatchSet {
    entries: Vec<Script>,
    by_pk: HashMap<u32, usize>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the next rank unless the key is already present; the
    /// first insertion of a key keeps its rank.
    pub(crate) fn insert(&mut self, script: Script) -> bool {
        match self.by_pk.entry(script.pk) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(script);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, pk: u32) -> bool {
        self.by_pk.contains_key(&pk)
    }

    pub fn get(&self, pk: u32) -> Option<&Script> {
        self.by_pk.get(&pk).map(|&pos| &self.entries[pos])
    }

    /// Scripts in relevance order.
    pub fn iter(&self) -> impl Iterator<Item = &Script> {
        self.entries.iter()
    }

    /// Primary keys in relevance order.
    pub fn pks(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|s| s.pk)
    }

    /// Capped view for display: the first `limit` scripts plus the
    /// count of hidden ones ("... plus N more").
    pub fn window(&self, limit: usize) -> (&[Script], usize) {
        let shown = limit.min(self.entries.len());
        (&self.entries[..shown], self.entries.len() - shown)
    }
}

/// Equality is over entries and their order; two sets with the same
/// scripts at different ranks are not equal.
impl PartialEq for MatchSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<Script> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Script>>(iter: I) -> Self {
        let mut set = Self::new();
        for script in iter {
            set.insert(script);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Script;
    type IntoIter = std::slice::Iter<'a, Script>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
