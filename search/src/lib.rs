//! Grimoire fuzzy search library.
//!
//! Ranks scripts by relevance across title, author and character-name
//! fields, coalesces rapid query edits into one search per quiet period,
//! and falls back to a curated favorites set when the query is empty.
//!
//! # Design
//!
//! - Two independent fuzzy indexes, rebuilt per corpus snapshot:
//!   - title/author (title stripped of non-letters, raw author)
//!   - resolved character display names
//! - Title/author relevance outranks character relevance: character hits
//!   only pad result sets thinner than the fallback threshold and never
//!   displace an earlier rank.
//! - Replacing the corpus rebuilds both indexes and cancels any pending
//!   debounced search, so nothing stale runs against old indexes.
//!
//! # Cooperative API
//!
//! - `set_query()`: records a query edit (the empty query resolves
//!   immediately to favorites, no debounce)
//! - `poll()`: drives the debounce timer without blocking
//! - `matches()`, `subscribe()`: consume published results

mod config;
mod debounce;
mod engine;
mod favorites;
mod index;
mod normalize;
mod resolve;
mod results;
mod score;

pub use config::{DEFAULT_FAVORITE_TITLES, SearchConfig};
pub use engine::SearchEngine;
pub use normalize::search_normalize;
pub use results::MatchSet;

use thiserror::Error;

/// Search error type.
///
/// Searching is currently infallible, but we keep an explicit error type
/// for API stability. This is intentionally uninhabited (no variants).
#[derive(Debug, Error)]
pub enum SearchError {}
