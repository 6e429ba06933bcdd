//! Approximate string matching.
//!
//! Scores are integers in `0..=100`. `ratio` is the indel similarity
//! `2 * LCS / (len_a + len_b)`; the token scorers build on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Best vocabulary candidate for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub label: String,
    pub score: u8,
}

/// Scoring convention used by [`extract_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scorer {
    #[allow(dead_code)]
    Ratio,
    PartialRatio,
    /// Order-insensitive: tokens are sorted before comparing.
    TokenSort,
    /// Set-based: symmetric, ignores order and duplicate tokens.
    TokenSet,
}

impl Scorer {
    pub fn score(&self, a: &str, b: &str) -> u8 {
        match self {
            Scorer::Ratio => ratio(a, b),
            Scorer::PartialRatio => partial_ratio(a, b),
            Scorer::TokenSort => token_sort_ratio(a, b),
            Scorer::TokenSet => token_set_ratio(a, b),
        }
    }
}

/// Lower-cases, turns anything non-alphanumeric into a space and trims.
pub fn full_process(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 1.0;
    }
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    2.0 * lcs_len(a, b) as f64 / total as f64
}

fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Plain similarity of two strings.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    to_score(ratio_chars(&a, &b))
}

/// Best [`ratio`] of the shorter string against any same-length window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = 0.0f64;
    for window in long.windows(short.len()) {
        let similarity = ratio_chars(short, window);
        if similarity > best {
            best = similarity;
            if best >= 1.0 {
                break;
            }
        }
    }
    to_score(best)
}

fn sorted_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = full_process(text)
        .split_whitespace()
        .map(str::to_string)
        .collect();
    tokens.sort();
    tokens
}

/// [`ratio`] after sorting each side's tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

/// Set-based token similarity.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let set_a: BTreeSet<String> = sorted_tokens(a).into_iter().collect();
    let set_b: BTreeSet<String> = sorted_tokens(b).into_iter().collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0;
    }

    let join = |tokens: Vec<&String>| {
        tokens
            .into_iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    };
    let sect = join(set_a.intersection(&set_b).collect());
    let diff_ab = join(set_a.difference(&set_b).collect());
    let diff_ba = join(set_b.difference(&set_a).collect());

    let combined_ab = format!("{} {}", sect, diff_ab).trim().to_string();
    let combined_ba = format!("{} {}", sect, diff_ba).trim().to_string();

    [
        ratio(&sect, &combined_ab),
        ratio(&sect, &combined_ba),
        ratio(&combined_ab, &combined_ba),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

/// Best-scoring choice for `query`. Ties go to the earliest choice.
///
/// Returns `None` only when `choices` is empty.
pub fn extract_one<S: AsRef<str>>(query: &str, choices: &[S], scorer: Scorer) -> Option<MatchResult> {
    let processed_query = full_process(query);
    let mut best: Option<MatchResult> = None;

    for choice in choices {
        let choice = choice.as_ref();
        let score = scorer.score(&processed_query, &full_process(choice));
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(MatchResult {
                label: choice.to_string(),
                score,
            });
        }
    }

    best
}
