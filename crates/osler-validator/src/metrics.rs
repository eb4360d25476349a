//! Metric calculators.
//!
//! Five pure, deterministic functions producing per-claim (and per
//! claim-hypothesis-pair) sub-scores in [0, 100]. Holding inputs fixed,
//! every function here always returns the same value; the composite scorer
//! builds directly on that.

use crate::config::ValidationConfig;
use osler_domain::{text, ClaimRecord, Hypothesis};
use regex::Regex;
use std::sync::OnceLock;

/// Weighted blend of domain overlap, token Jaccard, and keyword overlap
/// between one claim and one hypothesis.
pub fn match_score(claim: &ClaimRecord, hypothesis: &Hypothesis, config: &ValidationConfig) -> f64 {
    let weights = &config.scoring.match_weights;

    let domain_score = if claim.domain_primary == hypothesis.domain {
        100.0
    } else {
        0.0
    };

    let claim_tokens = text::tokenize(&claim.claim_text);
    let hyp_tokens = text::tokenize(&hypothesis.text);
    let jaccard_score = 100.0 * text::jaccard(&claim_tokens, &hyp_tokens);

    let entity = entity_score(claim, hypothesis, config);

    weights.domain_overlap * domain_score
        + weights.token_jaccard * jaccard_score
        + weights.entity_score * entity
}

/// Fraction of the hypothesis's keywords found as normalized substrings of
/// the claim text, scaled to [0, 100]. Falls back to the configured domain
/// keyword lists when the hypothesis carries no keywords of its own; 0 when
/// no keyword list is available at all.
fn entity_score(claim: &ClaimRecord, hypothesis: &Hypothesis, config: &ValidationConfig) -> f64 {
    let keywords: Vec<String> = if !hypothesis.keywords.is_empty() {
        hypothesis.keywords.clone()
    } else {
        config
            .domains
            .get(&hypothesis.domain)
            .map(|profile| profile.fallback_keywords())
            .unwrap_or_default()
    };
    if keywords.is_empty() {
        return 0.0;
    }

    let claim_norm = text::normalize(&claim.claim_text);
    let matched = keywords
        .iter()
        .filter(|kw| claim_norm.contains(&text::normalize(kw)))
        .count();
    100.0 * matched as f64 / keywords.len() as f64
}

/// Base evidence strength from the study-design hierarchy, with statistical
/// reporting bonuses and a capped penalty for noted limitations.
pub fn evidence_strength(claim: &ClaimRecord) -> f64 {
    let base: f64 = match claim.design_key().as_str() {
        "meta_analysis" => 95.0,
        "rct" => 90.0,
        "cohort" => 75.0,
        "case_control" => 65.0,
        "cross_sectional" | "observational" => 55.0,
        "animal" | "in_vivo" => 45.0,
        "review" => 40.0,
        "in_vitro" => 30.0,
        _ => 35.0,
    };

    let mut bonus = 0.0;
    if claim.has_effect_size() {
        bonus += 5.0;
    }
    if claim.has_p_value() {
        bonus += 3.0;
    }
    if let Some(effect) = claim.effect_size.as_deref() {
        if effect.contains("CI") || effect.to_lowercase().contains("confidence interval") {
            bonus += 3.0;
        }
    }

    let penalty = (claim.limitations_noted.len() as f64 * 5.0).min(20.0);

    (base + bonus - penalty).clamp(0.0, 100.0)
}

/// Translational relevance of the claim's species list: the maximum score
/// across listed species, 50 for an empty list.
pub fn species_relevance(claim: &ClaimRecord) -> f64 {
    if claim.species.is_empty() {
        return 50.0;
    }
    claim
        .species
        .iter()
        .map(|s| species_score(s))
        .fold(0.0, f64::max)
}

fn species_score(species: &str) -> f64 {
    let s = species.to_lowercase();
    if s.contains("human") || s.contains("people") || s.contains("patient") {
        100.0
    } else if s.contains("primate") || s.contains("monkey") {
        85.0
    } else if s.contains("mouse") || s.contains("mice") || s.contains("rat") || s.contains("murine")
    {
        70.0
    } else if s.contains("drosophila")
        || s.contains("elegans")
        || s.contains("fly")
        || s.contains("worm")
    {
        55.0
    } else if s.contains("cell") || s.contains("vitro") {
        35.0
    } else {
        50.0
    }
}

/// Log-scaled sample-size adequacy against a design-specific reference
/// scale. 40 when no integer can be extracted; small non-cell samples are
/// capped at 25 regardless of the log scale.
pub fn sample_size_score(claim: &ClaimRecord) -> f64 {
    let Some(n) = leading_integer(claim.sample_size.as_deref().unwrap_or("")) else {
        return 40.0;
    };

    let design = claim.study_design.to_lowercase();
    let n_ref: f64 = if design.contains("rct") {
        1000.0
    } else if design.contains("cohort") {
        10000.0
    } else if design.contains("animal") || design.contains("vivo") {
        60.0
    } else if design.contains("vitro") || design.contains("cell") {
        12.0
    } else {
        100.0
    };

    let score = 100.0 * (n.max(1) as f64).log10() / n_ref.log10();
    let score = score.clamp(0.0, 100.0);

    if n < 10 && !design.contains("vitro") && !design.contains("cell") {
        score.min(25.0)
    } else {
        score
    }
}

/// First integer in the sample-size text, e.g. 120 from `"n=120"`.
fn leading_integer(text: &str) -> Option<u64> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let re = DIGITS.get_or_init(|| Regex::new(r"\d+").expect("valid pattern"));
    re.find(text)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

/// How replicated the claim looks: novelty flags, the contradiction flag,
/// and a capped bonus per near-duplicate claim in the same run.
pub fn replication_score(claim: &ClaimRecord, cluster_count: usize) -> f64 {
    let mut score = 50.0;

    let novelty = claim
        .novelty_flag
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    if novelty.contains("replication") {
        score += 25.0;
    }
    if novelty.contains("novel") {
        score -= 10.0;
    }

    if claim.contradiction_flags.contradicts_existing {
        score -= 25.0;
    }

    score += (cluster_count as f64 * 5.0).min(15.0);

    score.clamp(0.0, 100.0)
}

/// Contradiction deduction for one claim-hypothesis pair. The deduction is
/// driven by the claim-global contradiction flag; hypotheses are not
/// differentiated.
pub fn contradiction_score(claim: &ClaimRecord, _hypothesis: &Hypothesis) -> f64 {
    let mut score: f64 = 100.0;
    if claim.contradiction_flags.contradicts_existing {
        score -= 25.0;
    }
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canonical scenario: senolytic RCT in humans against a matching
    /// senescence hypothesis.
    fn senolytic_claim() -> ClaimRecord {
        ClaimRecord {
            claim_text: "Senolytic X reduces IL-6 levels in humans.".to_string(),
            domain_primary: "senescence".to_string(),
            study_design: "RCT".to_string(),
            species: vec!["human".to_string()],
            sample_size: Some("n=120".to_string()),
            effect_size: Some("large".to_string()),
            p_value: Some("0.01".to_string()),
            novelty_flag: Some("extension".to_string()),
            ..ClaimRecord::default()
        }
    }

    fn senolytic_hypothesis() -> Hypothesis {
        let mut hyp = Hypothesis::new(
            "HYP-TEST",
            "senescence",
            "Senolytics reduce IL-6 and inflammation.",
        );
        hyp.keywords = vec!["senolytic".to_string(), "il-6".to_string()];
        hyp
    }

    #[test]
    fn test_senolytic_rct_match_score() {
        let score = match_score(
            &senolytic_claim(),
            &senolytic_hypothesis(),
            &ValidationConfig::default(),
        );
        assert!(score > 60.0, "expected > 60, got {}", score);
    }

    #[test]
    fn test_senolytic_rct_evidence_strength() {
        // RCT base 90, +5 effect size, +3 p-value
        assert_eq!(evidence_strength(&senolytic_claim()), 98.0);
    }

    #[test]
    fn test_senolytic_rct_species_relevance() {
        assert_eq!(species_relevance(&senolytic_claim()), 100.0);
    }

    #[test]
    fn test_senolytic_rct_sample_size() {
        // 100 * log10(120) / log10(1000) ≈ 69.3
        let score = sample_size_score(&senolytic_claim());
        assert!((score - 69.3).abs() < 1.0, "expected ≈ 69.3, got {}", score);
    }

    #[test]
    fn test_senolytic_rct_replication_neutral() {
        assert_eq!(replication_score(&senolytic_claim(), 0), 50.0);
    }

    #[test]
    fn test_senolytic_rct_contradiction_clean() {
        assert_eq!(
            contradiction_score(&senolytic_claim(), &senolytic_hypothesis()),
            100.0
        );
    }

    #[test]
    fn test_unrelated_claim_scores_below_threshold() {
        let claim = ClaimRecord {
            claim_text: "Something completely different.".to_string(),
            domain_primary: "physics".to_string(),
            ..ClaimRecord::default()
        };
        let score = match_score(&claim, &senolytic_hypothesis(), &ValidationConfig::default());
        assert!(score < 20.0, "expected < 20, got {}", score);
    }

    #[test]
    fn test_match_score_monotone_in_keyword_overlap() {
        let config = ValidationConfig::default();
        let mut hyp = senolytic_hypothesis();
        hyp.keywords = vec![
            "senolytic".to_string(),
            "il-6".to_string(),
            "dasatinib".to_string(),
        ];

        let none = ClaimRecord {
            claim_text: "Quercetin lowers inflammation markers.".to_string(),
            domain_primary: "senescence".to_string(),
            ..ClaimRecord::default()
        };
        let one = ClaimRecord {
            claim_text: "Quercetin, a senolytic, lowers inflammation markers.".to_string(),
            ..none.clone()
        };
        let two = ClaimRecord {
            claim_text: "Quercetin, a senolytic, lowers IL-6 markers.".to_string(),
            ..none.clone()
        };

        let s0 = match_score(&none, &hyp, &config);
        let s1 = match_score(&one, &hyp, &config);
        let s2 = match_score(&two, &hyp, &config);
        assert!(s0 < s1, "{} !< {}", s0, s1);
        assert!(s1 < s2, "{} !< {}", s1, s2);
    }

    #[test]
    fn test_entity_score_falls_back_to_domain_keywords() {
        let config = ValidationConfig::default();
        let claim = ClaimRecord {
            claim_text: "Senolytic drugs lower p16 expression.".to_string(),
            domain_primary: "senescence".to_string(),
            ..ClaimRecord::default()
        };
        // no explicit keywords on the hypothesis
        let hyp = Hypothesis::new("HYP-T", "senescence", "Senescent cell burden drives aging.");
        let with_fallback = match_score(&claim, &hyp, &config);

        let mut bare_config = config.clone();
        bare_config.domains.clear();
        let without = match_score(&claim, &hyp, &bare_config);

        assert!(with_fallback > without);
    }

    #[test]
    fn test_evidence_strength_design_table() {
        let design = |d: &str| ClaimRecord {
            study_design: d.to_string(),
            ..ClaimRecord::default()
        };
        assert_eq!(evidence_strength(&design("Meta Analysis")), 95.0);
        assert_eq!(evidence_strength(&design("cohort")), 75.0);
        assert_eq!(evidence_strength(&design("Case Control")), 65.0);
        assert_eq!(evidence_strength(&design("observational")), 55.0);
        assert_eq!(evidence_strength(&design("in vivo")), 45.0);
        assert_eq!(evidence_strength(&design("review")), 40.0);
        assert_eq!(evidence_strength(&design("in vitro")), 30.0);
        assert_eq!(evidence_strength(&design("something odd")), 35.0);
    }

    #[test]
    fn test_evidence_strength_confidence_interval_bonus() {
        let claim = ClaimRecord {
            study_design: "RCT".to_string(),
            effect_size: Some("HR 0.8, 95% CI 0.7-0.9".to_string()),
            ..ClaimRecord::default()
        };
        // 90 base, +5 effect size, +3 CI mention
        assert_eq!(evidence_strength(&claim), 98.0);
    }

    #[test]
    fn test_evidence_strength_limitation_penalty_caps_at_20() {
        let mut claim = ClaimRecord {
            study_design: "RCT".to_string(),
            ..ClaimRecord::default()
        };
        claim.limitations_noted = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(evidence_strength(&claim), 75.0);

        claim.limitations_noted = (0..8).map(|i| format!("limitation {}", i)).collect();
        assert_eq!(evidence_strength(&claim), 70.0);
    }

    #[test]
    fn test_species_relevance_takes_maximum() {
        let claim = ClaimRecord {
            species: vec!["mouse".to_string(), "human".to_string()],
            ..ClaimRecord::default()
        };
        assert_eq!(species_relevance(&claim), 100.0);
    }

    #[test]
    fn test_species_relevance_table() {
        let single = |s: &str| ClaimRecord {
            species: vec![s.to_string()],
            ..ClaimRecord::default()
        };
        assert_eq!(species_relevance(&single("patients")), 100.0);
        assert_eq!(species_relevance(&single("rhesus monkey")), 85.0);
        assert_eq!(species_relevance(&single("murine model")), 70.0);
        assert_eq!(species_relevance(&single("C. elegans")), 55.0);
        assert_eq!(species_relevance(&single("HeLa cells")), 35.0);
        assert_eq!(species_relevance(&single("zebrafish")), 50.0);
    }

    #[test]
    fn test_species_relevance_empty_list() {
        assert_eq!(species_relevance(&ClaimRecord::default()), 50.0);
    }

    #[test]
    fn test_sample_size_no_integer_returns_40() {
        let claim = ClaimRecord {
            sample_size: Some("not reported".to_string()),
            ..ClaimRecord::default()
        };
        assert_eq!(sample_size_score(&claim), 40.0);
        assert_eq!(sample_size_score(&ClaimRecord::default()), 40.0);
    }

    #[test]
    fn test_sample_size_small_non_cell_capped_at_25() {
        let claim = ClaimRecord {
            sample_size: Some("n=8".to_string()),
            study_design: "animal".to_string(),
            ..ClaimRecord::default()
        };
        assert!(sample_size_score(&claim) <= 25.0);
    }

    #[test]
    fn test_sample_size_small_cell_study_not_capped() {
        let claim = ClaimRecord {
            sample_size: Some("n=8".to_string()),
            study_design: "in vitro".to_string(),
            ..ClaimRecord::default()
        };
        // log10(8)/log10(12) * 100 ≈ 83.7
        assert!(sample_size_score(&claim) > 25.0);
    }

    #[test]
    fn test_sample_size_saturates_at_reference_scale() {
        let claim = ClaimRecord {
            sample_size: Some("n=250000".to_string()),
            study_design: "cohort".to_string(),
            ..ClaimRecord::default()
        };
        assert_eq!(sample_size_score(&claim), 100.0);
    }

    #[test]
    fn test_replication_score_components() {
        let mut claim = ClaimRecord {
            novelty_flag: Some("replication".to_string()),
            ..ClaimRecord::default()
        };
        assert_eq!(replication_score(&claim, 0), 75.0);

        claim.novelty_flag = Some("novel".to_string());
        assert_eq!(replication_score(&claim, 0), 40.0);

        claim.novelty_flag = None;
        claim.contradiction_flags.contradicts_existing = true;
        assert_eq!(replication_score(&claim, 0), 25.0);
    }

    #[test]
    fn test_replication_cluster_bonus_caps_at_15() {
        let claim = ClaimRecord::default();
        assert_eq!(replication_score(&claim, 1), 55.0);
        assert_eq!(replication_score(&claim, 3), 65.0);
        assert_eq!(replication_score(&claim, 10), 65.0);
    }

    #[test]
    fn test_contradiction_score_deduction() {
        let hyp = senolytic_hypothesis();
        let mut claim = ClaimRecord::default();
        assert_eq!(contradiction_score(&claim, &hyp), 100.0);

        claim.contradiction_flags.contradicts_existing = true;
        assert_eq!(contradiction_score(&claim, &hyp), 75.0);
    }

    #[test]
    fn test_leading_integer_extraction() {
        assert_eq!(leading_integer("n=120"), Some(120));
        assert_eq!(leading_integer("approximately 2,500 adults"), Some(2));
        assert_eq!(leading_integer("none"), None);
        assert_eq!(leading_integer(""), None);
    }
}
