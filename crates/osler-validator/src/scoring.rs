//! Composite scoring and match ranking.

use crate::config::ValidationConfig;
use crate::metrics;
use crate::report::{HypothesisMatch, MatchDetails};
use osler_domain::{Claim, Hypothesis};

/// Claim-level metrics, computed once per claim and shared across all of
/// its hypothesis pairings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClaimMetrics {
    /// Study-design evidence strength
    pub evidence_strength: f64,
    /// Species translational relevance
    pub species_relevance: f64,
    /// Sample-size adequacy
    pub sample_size_score: f64,
    /// Replication signal
    pub replication_score: f64,
}

/// Compute the hypothesis-independent metrics for one claim.
pub fn claim_metrics(claim: &Claim, cluster_count: usize) -> ClaimMetrics {
    ClaimMetrics {
        evidence_strength: metrics::evidence_strength(&claim.record),
        species_relevance: metrics::species_relevance(&claim.record),
        sample_size_score: metrics::sample_size_score(&claim.record),
        replication_score: metrics::replication_score(&claim.record, cluster_count),
    }
}

/// Score one claim against every hypothesis and rank the retained matches.
///
/// Pairs below the match threshold are dropped (a pair exactly at the
/// threshold is kept). Survivors are ordered by match score descending with
/// ties preserving hypothesis order, then truncated to `top_k`.
pub fn score_claim(
    claim: &Claim,
    hypotheses: &[Hypothesis],
    cluster_count: usize,
    config: &ValidationConfig,
) -> Vec<HypothesisMatch> {
    let cm = claim_metrics(claim, cluster_count);
    let eq_weights = &config.scoring.evidence_quality_weights;
    let evidence_quality = eq_weights.evidence_strength * cm.evidence_strength
        + eq_weights.species_relevance * cm.species_relevance
        + eq_weights.sample_size * cm.sample_size_score;

    let mut matches: Vec<HypothesisMatch> = hypotheses
        .iter()
        .filter_map(|hypothesis| {
            let match_score = metrics::match_score(&claim.record, hypothesis, config);
            if match_score < config.scoring.match_threshold {
                return None;
            }

            let contradiction_score = metrics::contradiction_score(&claim.record, hypothesis);
            let cw = &config.scoring.composite_weights;
            let composite = cw.match_score * match_score
                + cw.evidence_quality * evidence_quality
                + cw.replication_modifier * (cm.replication_score - 50.0)
                - (100.0 - contradiction_score) * cw.contradiction_modifier;

            Some(HypothesisMatch {
                hypothesis_id: hypothesis.id.clone(),
                match_score,
                composite_score: composite.clamp(0.0, 100.0),
                details: MatchDetails {
                    evidence_strength: cm.evidence_strength,
                    species_relevance: cm.species_relevance,
                    sample_size_score: cm.sample_size_score,
                    replication_score: cm.replication_score,
                    contradiction_score,
                    evidence_quality,
                },
            })
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(config.scoring.top_k);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use osler_domain::ClaimRecord;

    fn senolytic_claim() -> Claim {
        let record = ClaimRecord {
            claim_text: "Senolytic X reduces IL-6 levels in humans.".to_string(),
            domain_primary: "senescence".to_string(),
            study_design: "RCT".to_string(),
            species: vec!["human".to_string()],
            sample_size: Some("n=120".to_string()),
            effect_size: Some("large".to_string()),
            p_value: Some("0.01".to_string()),
            novelty_flag: Some("extension".to_string()),
            ..ClaimRecord::default()
        };
        Claim::new(record, "111", 0)
    }

    fn senescence_hypothesis(id: &str) -> Hypothesis {
        let mut hyp = Hypothesis::new(id, "senescence", "Senolytics reduce IL-6 and inflammation.");
        hyp.keywords = vec!["senolytic".to_string(), "il-6".to_string()];
        hyp
    }

    #[test]
    fn test_strong_match_scores_above_70() {
        let config = ValidationConfig::default();
        let matches = score_claim(
            &senolytic_claim(),
            &[senescence_hypothesis("HYP-A")],
            0,
            &config,
        );

        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.hypothesis_id, "HYP-A");
        assert!(m.match_score > 60.0);
        assert!(m.composite_score > 70.0, "got {}", m.composite_score);
        assert_eq!(m.details.evidence_strength, 98.0);
        assert_eq!(m.details.species_relevance, 100.0);
        assert_eq!(m.details.replication_score, 50.0);
        assert_eq!(m.details.contradiction_score, 100.0);
    }

    #[test]
    fn test_below_threshold_pairs_are_dropped() {
        let config = ValidationConfig::default();
        let unrelated = Hypothesis::new("HYP-FAR", "physics", "Gravitational waves propagate.");
        let matches = score_claim(&senolytic_claim(), &[unrelated], 0, &config);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_pair_exactly_at_threshold_is_kept() {
        let mut config = ValidationConfig::default();
        let claim = senolytic_claim();
        let hyp = senescence_hypothesis("HYP-EDGE");
        let score = metrics::match_score(&claim.record, &hyp, &config);

        config.scoring.match_threshold = score;
        let matches = score_claim(&claim, &[hyp], 0, &config);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_matches_ranked_best_first_and_truncated() {
        let mut config = ValidationConfig::default();
        config.scoring.match_threshold = 0.0;
        config.scoring.top_k = 2;

        let strong = senescence_hypothesis("HYP-STRONG");
        let medium = Hypothesis::new("HYP-MED", "senescence", "Senescent cells accumulate.");
        let weak = Hypothesis::new("HYP-WEAK", "comparative", "Long-lived species differ.");

        let matches = score_claim(&senolytic_claim(), &[weak, medium, strong], 0, &config);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].hypothesis_id, "HYP-STRONG");
        assert!(matches[0].match_score >= matches[1].match_score);
    }

    #[test]
    fn test_tied_matches_keep_hypothesis_order() {
        let mut config = ValidationConfig::default();
        config.scoring.match_threshold = 0.0;

        let first = senescence_hypothesis("HYP-FIRST");
        let mut second = senescence_hypothesis("HYP-SECOND");
        second.text = first.text.clone();

        let matches = score_claim(&senolytic_claim(), &[first, second], 0, &config);
        assert_eq!(matches[0].hypothesis_id, "HYP-FIRST");
        assert_eq!(matches[1].hypothesis_id, "HYP-SECOND");
        assert_eq!(matches[0].match_score, matches[1].match_score);
    }

    #[test]
    fn test_contradiction_lowers_composite() {
        let config = ValidationConfig::default();
        let clean = senolytic_claim();
        let mut contradicting = senolytic_claim();
        contradicting.record.contradiction_flags.contradicts_existing = true;

        let hyp = senescence_hypothesis("HYP-A");
        let clean_score = score_claim(&clean, &[hyp.clone()], 0, &config)[0].composite_score;
        let contra_score =
            score_claim(&contradicting, &[hyp], 0, &config)[0].composite_score;

        // -25 contradiction deduction weighted 0.35, plus the replication
        // drop of 25 weighted 0.10
        assert!((clean_score - contra_score - 11.25).abs() < 1e-9);
    }

    #[test]
    fn test_cluster_bonus_raises_composite() {
        let config = ValidationConfig::default();
        let claim = senolytic_claim();
        let hyp = senescence_hypothesis("HYP-A");

        let base = score_claim(&claim, &[hyp.clone()], 0, &config)[0].composite_score;
        let boosted = score_claim(&claim, &[hyp], 2, &config)[0].composite_score;
        assert!((boosted - base - 1.0).abs() < 1e-9); // +10 replication, weight 0.10
    }

    #[test]
    fn test_composite_clamped_to_range() {
        let mut config = ValidationConfig::default();
        config.scoring.match_threshold = 0.0;
        config.scoring.composite_weights.contradiction_modifier = 5.0;

        let mut claim = senolytic_claim();
        claim.record.contradiction_flags.contradicts_existing = true;

        let matches = score_claim(&claim, &[senescence_hypothesis("HYP-A")], 0, &config);
        assert!(matches[0].composite_score >= 0.0);
    }
}
