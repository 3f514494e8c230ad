use std::time::Duration;

/// Titles shown by default before the user has typed a query.
pub const DEFAULT_FAVORITE_TITLES: [&str; 7] = [
    "Reptiles II: Lizard in the City",
    "Catfishing",
    "No Roles Barred",
    "Whose Cult Is It Anyway?",
    "Creme De La Creme",
    "Race to the Bottom",
    "Onion Pies",
];

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period a query edit must survive before a search runs.
    pub debounce_window: Duration,
    /// Title/author hit count below which the character index is
    /// consulted to pad out the results.
    pub fallback_threshold: usize,
    /// Exact titles (case-sensitive) of the curated favorites set.
    pub favorite_titles: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(300),
            fallback_threshold: 10,
            favorite_titles: DEFAULT_FAVORITE_TITLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
