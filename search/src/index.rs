//! Internal per-corpus fuzzy index.

use crate::score;
use grimoire_core::Script;

/// Fuzzy index over one or more derived text fields per script.
///
/// Built as a snapshot of the corpus: field strings are extracted and
/// lowercased once, then scored against each incoming query. Rebuilt
/// from scratch whenever the corpus changes; never mutated in place.
pub(crate) struct FuzzyIndex {
    /// Lowercased field strings, one entry per corpus position.
    entries: Vec<Vec<String>>,
}

impl FuzzyIndex {
    pub(crate) fn build<F>(corpus: &[Script], fields: F) -> Self
    where
        F: Fn(&Script) -> Vec<String>,
    {
        let entries = corpus
            .iter()
            .map(|script| {
                fields(script)
                    .into_iter()
                    .map(|field| field.to_lowercase())
                    .collect()
            })
            .collect();
        Self { entries }
    }

    /// Returns (corpus position, score) pairs, most relevant first.
    ///
    /// Each entry is scored per field with the best field winning. Ties
    /// break toward corpus order, keeping results deterministic. A query
    /// that matches nothing yields an empty vec.
    pub(crate) fn search(&self, query: &str) -> Vec<(usize, i32)> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, i32)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(pos, fields)| {
                fields
                    .iter()
                    .filter_map(|field| score::score(&query, field))
                    .max()
                    .map(|best| (pos, best))
            })
            .collect();
        hits.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        hits
    }
}
