//! Approximate string scoring.
//!
//! A small feature-sum scorer in place of an off-the-shelf fuzzy
//! matcher. A candidate matches when the query appears as a subsequence
//! of it, or sits within a bounded edit distance of the whole candidate
//! or one of its tokens. Scores reward contiguity, word boundaries and
//! token overlap, and penalize edit distance and length mismatch.
//!
//! Inputs are expected pre-lowercased, which makes matching
//! case-insensitive by construction.

/// Scores `candidate` against `query`; higher is more relevant.
/// `None` means the candidate does not match at all.
pub(crate) fn score(query: &str, candidate: &str) -> Option<i32> {
    if query.is_empty() || candidate.is_empty() {
        return None;
    }
    if query == candidate {
        return Some(1000);
    }

    let mut total: i32 = 0;
    let mut matched = false;

    if candidate.starts_with(query) {
        total += 200;
    } else if candidate.contains(query) {
        total += 120;
    }

    let chars: Vec<char> = candidate.chars().collect();
    if let Some(positions) = subsequence_positions(query, &chars) {
        matched = true;
        total += 60;
        total += longest_streak(&positions) as i32 * 6;
        total += boundary_hits(&positions, &chars) as i32 * 8;
    }

    let candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();
    for query_token in query.split_whitespace() {
        if candidate_tokens.iter().any(|t| *t == query_token) {
            total += 40;
        } else if candidate_tokens.iter().any(|t| t.starts_with(query_token)) {
            total += 24;
        }
    }

    // Typo tolerance: accept near misses of a token or the whole string.
    if !matched {
        let budget = edit_budget(query);
        let nearest = candidate_tokens
            .iter()
            .copied()
            .chain(std::iter::once(candidate))
            .filter_map(|text| levenshtein_within(query, text, budget))
            .min();
        if let Some(distance) = nearest {
            matched = true;
            total += 30 - distance as i32 * 10;
        }
    }

    if !matched {
        return None;
    }

    let len_gap = candidate.chars().count().abs_diff(query.chars().count());
    total -= len_gap.min(12) as i32;

    Some(total)
}

/// Allowed edit distance for a query of this length.
fn edit_budget(query: &str) -> usize {
    (query.chars().count() / 4).clamp(1, 3)
}

/// Greedy left-to-right positions of the query's characters within the
/// candidate. Spaces in the query are skipped so spacing differences do
/// not defeat a match.
fn subsequence_positions(query: &str, candidate: &[char]) -> Option<Vec<usize>> {
    let mut positions = Vec::new();
    let mut start = 0;
    for qc in query.chars() {
        if qc == ' ' {
            continue;
        }
        let found = candidate[start..].iter().position(|&c| c == qc)? + start;
        positions.push(found);
        start = found + 1;
    }
    if positions.is_empty() {
        return None;
    }
    Some(positions)
}

fn longest_streak(positions: &[usize]) -> usize {
    let mut best = 1;
    let mut run = 1;
    for pair in positions.windows(2) {
        if pair[1] == pair[0] + 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }
    best
}

/// Matched positions sitting at the start or after a non-alphanumeric
/// character count as word-boundary hits.
fn boundary_hits(positions: &[usize], candidate: &[char]) -> usize {
    positions
        .iter()
        .filter(|&&p| p == 0 || !candidate[p - 1].is_alphanumeric())
        .count()
}

/// Edit distance between `a` and `b` if it is at most `budget`.
fn levenshtein_within(a: &str, b: &str, budget: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > budget {
        return None;
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];
    for (i, &ac) in a.iter().enumerate() {
        cur[0] = i + 1;
        let mut row_min = cur[0];
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            cur[j + 1] = (prev[j + 1] + 1).min(cur[j] + 1).min(prev[j] + cost);
            row_min = row_min.min(cur[j + 1]);
        }
        if row_min > budget {
            return None;
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    (prev[b.len()] <= budget).then_some(prev[b.len()])
}
