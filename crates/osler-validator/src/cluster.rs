//! Replication clustering.
//!
//! Counts, for each claim, how many other claims in the same run look like
//! near-duplicates of it. The count feeds the replication score as a capped
//! bonus. Comparison is exhaustive over all pairs; corpora here are small
//! enough that the quadratic pass is not worth avoiding.

use osler_domain::{text, Claim};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Two claims are considered near-duplicates when the Jaccard similarity of
/// their token sets strictly exceeds this.
pub const REPLICATION_THRESHOLD: f64 = 0.7;

/// Near-duplicate counts keyed by `temp_id`.
///
/// Claims whose text normalizes to nothing are not comparable and are left
/// out of the map; absence reads as a count of zero.
pub fn cluster_counts(claims: &[Claim]) -> HashMap<String, usize> {
    let token_sets: Vec<HashSet<String>> = claims
        .iter()
        .map(|c| text::tokenize(&c.record.claim_text))
        .collect();

    let mut counts = HashMap::new();
    for (i, claim) in claims.iter().enumerate() {
        if token_sets[i].is_empty() {
            continue;
        }
        let count = (0..claims.len())
            .filter(|&j| j != i)
            .filter(|&j| text::jaccard(&token_sets[i], &token_sets[j]) > REPLICATION_THRESHOLD)
            .count();
        counts.insert(claim.temp_id.clone(), count);
    }

    debug!(
        claims = claims.len(),
        clustered = counts.values().filter(|&&c| c > 0).count(),
        "replication clustering complete"
    );
    counts
}
