//! Claim module - the fundamental unit scored by the validation engine.

use serde::{Deserialize, Serialize};

fn default_unknown() -> String {
    "unknown".to_string()
}

/// Contradiction signals attached to a claim by the extraction stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContradictionFlags {
    /// Whether the claim contradicts previously established findings
    #[serde(default)]
    pub contradicts_existing: bool,

    /// Free-text notes about the contradiction, informational only
    #[serde(default)]
    pub contradiction_notes: Option<String>,
}

/// One atomic factual assertion as extracted from a paper's abstract.
///
/// This is the wire shape produced by the upstream extraction stage. Every
/// field is defaulted so a sparse or partially populated claim object still
/// deserializes; scoring treats missing fields as neutral signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// The claim statement itself
    #[serde(default)]
    pub claim_text: String,

    /// Primary domain label assigned by extraction
    #[serde(default = "default_unknown")]
    pub domain_primary: String,

    /// Free-form study design, e.g. "RCT", "cohort", "in vitro"
    #[serde(default = "default_unknown")]
    pub study_design: String,

    /// Species the finding applies to
    #[serde(default)]
    pub species: Vec<String>,

    /// Sample size text with a leading integer, e.g. "n=120"
    #[serde(default)]
    pub sample_size: Option<String>,

    /// Effect size text; presence-only signal plus CI detection
    #[serde(default)]
    pub effect_size: Option<String>,

    /// P-value text; presence-only signal
    #[serde(default)]
    pub p_value: Option<String>,

    /// Novelty marker, e.g. "novel", "replication", "extension"
    #[serde(default)]
    pub novelty_flag: Option<String>,

    /// Limitations the paper itself notes
    #[serde(default)]
    pub limitations_noted: Vec<String>,

    /// Contradiction signals
    #[serde(default)]
    pub contradiction_flags: ContradictionFlags,
}

impl Default for ClaimRecord {
    fn default() -> Self {
        Self {
            claim_text: String::new(),
            domain_primary: default_unknown(),
            study_design: default_unknown(),
            species: Vec::new(),
            sample_size: None,
            effect_size: None,
            p_value: None,
            novelty_flag: None,
            limitations_noted: Vec::new(),
            contradiction_flags: ContradictionFlags::default(),
        }
    }
}

impl ClaimRecord {
    /// Whether an effect size was reported (empty text counts as absent).
    pub fn has_effect_size(&self) -> bool {
        self.effect_size.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Whether a p-value was reported (empty text counts as absent).
    pub fn has_p_value(&self) -> bool {
        self.p_value.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Study design normalized for table lookup: lowercased, spaces to
    /// underscores. `"Meta Analysis"` becomes `"meta_analysis"`.
    pub fn design_key(&self) -> String {
        self.study_design.to_lowercase().replace(' ', "_")
    }
}

/// A claim with provenance attached by the corpus loader.
///
/// A claim always belongs to exactly one paper and has a stable 1-based
/// position within it; both are fixed at load time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// The extracted claim fields consumed by scoring
    pub record: ClaimRecord,

    /// PubMed identifier of the source paper
    pub pmid: String,

    /// 1-based position of the claim within its paper
    pub seq: usize,

    /// `"{pmid}_{index}"`, unique within a run; clustering bookkeeping only
    pub temp_id: String,
}

impl Claim {
    /// Attach provenance to an extracted claim. `index` is the 0-based
    /// position within the paper's claim list.
    pub fn new(record: ClaimRecord, pmid: impl Into<String>, index: usize) -> Self {
        let pmid = pmid.into();
        let temp_id = format!("{}_{}", pmid, index);
        Self {
            record,
            pmid,
            seq: index + 1,
            temp_id,
        }
    }

    /// Public claim identifier: `PMID-{pmid}-C{seq:02}`.
    pub fn claim_id(&self) -> String {
        format!("PMID-{}-C{:02}", self.pmid, self.seq)
    }
}
