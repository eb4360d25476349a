//! Tier C baseline hypotheses.

use osler_domain::Hypothesis;

/// The hardcoded fallback set: six baseline longevity-research hypotheses,
/// one per core aging domain. Used whenever the ledger document is absent
/// or yields nothing at Tiers A and B.
pub fn baseline_hypotheses() -> Vec<Hypothesis> {
    vec![
        Hypothesis::new(
            "HYP-VAL-01",
            "epigenetic",
            "Epigenetic alterations and loss of information are primary drivers of aging.",
        ),
        Hypothesis::new(
            "HYP-VAL-02",
            "senescence",
            "Cellular senescence and the associated secretory phenotype (SASP) drive tissue dysfunction.",
        ),
        Hypothesis::new(
            "HYP-VAL-03",
            "mitochondrial",
            "Mitochondrial dysfunction and loss of proteostasis contribute to aging.",
        ),
        Hypothesis::new(
            "HYP-VAL-04",
            "nutrient_sensing",
            "Deregulated nutrient sensing pathways (mTOR, AMPK, insulin) accelerate aging.",
        ),
        Hypothesis::new(
            "HYP-VAL-05",
            "stem_cell_ecm",
            "Stem cell exhaustion and altered intercellular communication impair tissue regeneration.",
        ),
        Hypothesis::new(
            "HYP-VAL-06",
            "comparative",
            "Comparative biology of long-lived species reveals conserved longevity mechanisms.",
        ),
    ]
}
