//! Report assembly and atomic persistence.
//!
//! The report is a single JSON document: run provenance, the hypothesis set
//! that was scored against, every validated claim with its retained matches,
//! the audit trail of skipped input, and summary counts. Writing goes
//! through a temporary sibling file plus rename, so a crash mid-write never
//! leaves a truncated report behind.

use crate::error::Result;
use osler_corpus::RunError;
use osler_domain::SourceTier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Provenance for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Run date, `YYYY-MM-DD`
    pub run_date: String,
    /// Short git SHA of the code that produced the report, or "unknown"
    pub git_sha: String,
    /// Version string of the configuration in effect
    pub config_version: String,
}

/// The hypothesis set a run scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesesIndex {
    /// Where the hypotheses came from
    pub source_tier: SourceTier,
    /// Number of hypotheses scored against
    pub num_hypotheses: usize,
    /// Their identifiers, in scoring order
    pub hypothesis_ids: Vec<String>,
}

/// Sub-scores backing one retained claim-hypothesis match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    /// Study-design evidence strength
    pub evidence_strength: f64,
    /// Species translational relevance
    pub species_relevance: f64,
    /// Sample-size adequacy
    pub sample_size_score: f64,
    /// Replication signal
    pub replication_score: f64,
    /// Contradiction deduction
    pub contradiction_score: f64,
    /// Weighted blend of evidence strength, species relevance, and sample
    /// size
    pub evidence_quality: f64,
}

/// One retained claim-hypothesis match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypothesisMatch {
    /// Hypothesis the claim matched
    pub hypothesis_id: String,
    /// Relevance of the claim to the hypothesis
    pub match_score: f64,
    /// Overall quality-weighted score
    pub composite_score: f64,
    /// The sub-scores behind the composite
    pub details: MatchDetails,
}

/// One claim that cleared the match threshold for at least one hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedClaim {
    /// Stable identifier, `PMID-{pmid}-C{seq}`
    pub claim_id: String,
    /// Normalized claim text; `original_text` keeps the raw form
    pub claim_text: String,
    /// Claim text as extracted
    pub original_text: String,
    /// Normalized form used for matching
    pub normalized_text: String,
    /// Source paper's PubMed identifier
    pub pmid: String,
    /// Retained matches, best first
    pub matches: Vec<HypothesisMatch>,
}

/// Summary counts for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Claims that survived corpus loading and were scored
    pub total_claims_processed: usize,
    /// Claims retained with at least one match
    pub claims_validated: usize,
}

/// The complete validation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Run provenance
    pub meta: ReportMeta,
    /// Hypothesis set scored against
    pub hypotheses_index: HypothesesIndex,
    /// Every claim retained with at least one match
    pub validated_claims: Vec<ValidatedClaim>,
    /// Reserved run-level warning slot; always empty today. Tier fallback
    /// is reported through `hypotheses_index.source_tier`, not here.
    pub run_warnings: Vec<String>,
    /// Input that had to be skipped
    pub run_errors: Vec<RunError>,
    /// Summary counts
    pub summary: RunSummary,
}

impl ValidationReport {
    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `path` atomically.
    ///
    /// The JSON is written to a `.tmp` sibling in the same directory and
    /// renamed into place, so readers only ever observe a complete report.
    pub fn write_atomic(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, path)?;

        info!(
            path = %path.display(),
            validated = self.summary.claims_validated,
            "validation report written"
        );
        Ok(())
    }
}
