//! Curated default result set.

use crate::results::MatchSet;
use grimoire_core::Script;

/// Scripts whose title exactly matches the allow-list, in corpus order.
///
/// Recomputed on every corpus change; published whenever the query is
/// empty.
pub(crate) fn favorites_of(corpus: &[Script], titles: &[String]) -> MatchSet {
    corpus
        .iter()
        .filter(|script| titles.iter().any(|t| *t == script.title))
        .cloned()
        .collect()
}
