//! Query normalization for the host's URL-fragment side channel.

/// Canonical form of a query for display and URL-fragment use.
///
/// Lowercases, collapses runs of spaces to one, drops apostrophes and
/// trims the ends. The fuzzy matcher never sees this form; it receives
/// the raw query and is already tolerant of case and spacing.
pub fn search_normalize(query: &str) -> String {
    let lower = query.to_lowercase();

    let mut collapsed = String::with_capacity(lower.len());
    let mut prev_space = false;
    for c in lower.chars() {
        if c == ' ' {
            if !prev_space {
                collapsed.push(' ');
            }
            prev_space = true;
        } else {
            collapsed.push(c);
            prev_space = false;
        }
    }

    collapsed.retain(|c| c != '\'');
    collapsed.trim_matches(' ').to_string()
}
