//! Search session over a script catalog.

use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::favorites::favorites_of;
use crate::index::FuzzyIndex;
use crate::resolve::character_list;
use crate::results::MatchSet;
use grimoire_core::{RoleLookup, Script};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

type Subscriber = Arc<dyn Fn(&MatchSet) + Send + Sync>;

/// Fuzzy search session over a script catalog.
///
/// Owns two fuzzy indexes (title/author and character names), the
/// favorites set, the debounce handle and the currently published
/// [`MatchSet`]. Drive it from the host's event loop: `set_query` on
/// every edit, `poll` each frame or timer tick so a quiet period can
/// settle into a search.
pub struct SearchEngine {
    corpus: Vec<Script>,
    roles: Box<dyn RoleLookup>,
    config: SearchConfig,
    title_index: FuzzyIndex,
    character_index: FuzzyIndex,
    favorites: MatchSet,
    debounce: Debouncer,
    query: String,
    matches: MatchSet,
    subscribers: Vec<Subscriber>,
}

/// Strips everything but letters, so punctuation, digits and spacing
/// differences do not affect title matching.
fn letters_only(title: &str) -> String {
    title.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

fn build_title_index(corpus: &[Script]) -> FuzzyIndex {
    FuzzyIndex::build(corpus, |script| {
        vec![letters_only(&script.title), script.author.clone()]
    })
}

fn build_character_index(corpus: &[Script], roles: &dyn RoleLookup) -> FuzzyIndex {
    FuzzyIndex::build(corpus, |script| character_list(script, roles))
}

/// Create operations.
impl SearchEngine {
    /// Creates a session over `corpus`, resolving character names
    /// through `roles`. The initial published MatchSet is the favorites
    /// set, matching the empty initial query.
    pub fn new(corpus: Vec<Script>, roles: Box<dyn RoleLookup>, config: SearchConfig) -> Self {
        let title_index = build_title_index(&corpus);
        let character_index = build_character_index(&corpus, roles.as_ref());
        let favorites = favorites_of(&corpus, &config.favorite_titles);
        let debounce = Debouncer::new(config.debounce_window);
        let matches = favorites.clone();
        debug!(
            scripts = corpus.len(),
            favorites = favorites.len(),
            "search indexes built"
        );

        Self {
            corpus,
            roles,
            config,
            title_index,
            character_index,
            favorites,
            debounce,
            query: String::new(),
            matches,
            subscribers: Vec::new(),
        }
    }
}

/// Mutation operations.
impl SearchEngine {
    /// Replaces the catalog, rebuilding both indexes and the favorites
    /// set. Any pending debounced search is cancelled so nothing stale
    /// runs against the old indexes. With an empty query the new
    /// favorites publish immediately; otherwise the last published
    /// matches stay visible until the next search settles.
    pub fn set_corpus(&mut self, corpus: Vec<Script>) {
        self.corpus = corpus;
        self.rebuild();
        if self.query.is_empty() {
            self.publish(self.favorites.clone());
        }
    }

    fn rebuild(&mut self) {
        self.debounce.cancel();
        self.title_index = build_title_index(&self.corpus);
        self.character_index = build_character_index(&self.corpus, self.roles.as_ref());
        self.favorites = favorites_of(&self.corpus, &self.config.favorite_titles);
        debug!(scripts = self.corpus.len(), "search indexes rebuilt");
    }
}

/// Search operations.
impl SearchEngine {
    /// Records a query edit. The empty query bypasses debouncing and
    /// publishes the favorites set synchronously; anything else waits
    /// out the configured quiet period. The raw query is what gets
    /// searched; [`crate::search_normalize`] is only for the host's URL
    /// fragment.
    pub fn set_query(&mut self, query: &str) {
        self.set_query_at(query, Instant::now());
    }

    pub(crate) fn set_query_at(&mut self, query: &str, now: Instant) {
        self.query = query.to_string();
        if query.is_empty() {
            self.debounce.cancel();
            self.publish(self.favorites.clone());
        } else {
            self.debounce.schedule(query.to_string(), now);
        }
    }

    /// Drives the debounce timer without blocking. Returns true when a
    /// quiet period elapsed and a new MatchSet was published.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub(crate) fn poll_at(&mut self, now: Instant) -> bool {
        let Some(query) = self.debounce.poll(now) else {
            return false;
        };
        let matches = self.run_search(&query);
        self.publish(matches);
        true
    }

    /// True while a debounced search is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    fn run_search(&self, query: &str) -> MatchSet {
        let mut matches = MatchSet::new();
        for (pos, _score) in self.title_index.search(query) {
            matches.insert(self.corpus[pos].clone());
        }
        if matches.len() < self.config.fallback_threshold {
            // Pad thin result sets from the character index; earlier
            // title/author ranks are never displaced.
            for (pos, _score) in self.character_index.search(query) {
                matches.insert(self.corpus[pos].clone());
            }
        }
        debug!(query, hits = matches.len(), "search settled");
        matches
    }

    fn publish(&mut self, matches: MatchSet) {
        self.matches = matches;
        for subscriber in &self.subscribers {
            subscriber(&self.matches);
        }
    }
}

/// Consumption operations.
impl SearchEngine {
    /// Registers a callback invoked with every newly published MatchSet.
    pub fn subscribe(&mut self, subscriber: impl Fn(&MatchSet) + Send + Sync + 'static) {
        self.subscribers.push(Arc::new(subscriber));
    }

    /// The currently published result set.
    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}
