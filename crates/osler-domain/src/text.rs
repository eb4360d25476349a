//! Text normalization and token-set similarity.
//!
//! Every textual comparison in the engine — replication clustering, token
//! Jaccard in match scoring, keyword substring checks — goes through the
//! same normalization so scores stay reproducible across components.

use std::collections::HashSet;

/// Fixed English stop-word set removed before any token-set comparison.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were",
];

/// Normalize free text: lowercase, drop punctuation, collapse whitespace.
///
/// Punctuation characters are removed outright (not replaced by spaces), so
/// hyphenated entities stay comparable: `"IL-6"` normalizes to `"il6"`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize normalized text into a set of content words.
pub fn tokenize(text: &str) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .filter(|t| !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Jaccard index of two token sets: `|A ∩ B| / |A ∪ B|`.
///
/// Defined as 0 when either set is empty, by convention, so callers never
/// see a NaN from an empty comparison.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}
