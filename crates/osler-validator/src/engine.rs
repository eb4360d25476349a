//! Pipeline orchestration.
//!
//! Ties the stages together: hypothesis loading, corpus flattening,
//! replication clustering, per-claim scoring, and report assembly. The
//! engine itself is pure over its inputs; file discovery and report
//! persistence stay with the caller.

use crate::cluster;
use crate::config::ValidationConfig;
use crate::report::{
    HypothesesIndex, ReportMeta, RunSummary, ValidatedClaim, ValidationReport,
};
use crate::scoring;
use osler_corpus::CorpusLoad;
use osler_domain::{text, Hypothesis, SourceTier};
use std::path::Path;
use tracing::{info, warn};

/// The validation engine: scores a loaded corpus against a hypothesis set.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    config: ValidationConfig,
}

impl ValidationEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Score every claim in the corpus and assemble the report.
    pub fn run(
        &self,
        hypotheses: Vec<Hypothesis>,
        source_tier: SourceTier,
        corpus: CorpusLoad,
        meta: ReportMeta,
    ) -> ValidationReport {
        let CorpusLoad { claims, errors } = corpus;

        let counts = cluster::cluster_counts(&claims);

        let total_claims_processed = claims.len();
        let mut validated_claims = Vec::new();
        for claim in &claims {
            let cluster_count = counts.get(&claim.temp_id).copied().unwrap_or(0);
            let matches = scoring::score_claim(claim, &hypotheses, cluster_count, &self.config);
            if matches.is_empty() {
                continue;
            }

            let normalized = text::normalize(&claim.record.claim_text);
            validated_claims.push(ValidatedClaim {
                claim_id: claim.claim_id(),
                claim_text: normalized.clone(),
                original_text: claim.record.claim_text.clone(),
                normalized_text: normalized,
                pmid: claim.pmid.clone(),
                matches,
            });
        }

        let summary = RunSummary {
            total_claims_processed,
            claims_validated: validated_claims.len(),
        };
        info!(
            processed = summary.total_claims_processed,
            validated = summary.claims_validated,
            tier = %source_tier,
            "validation run complete"
        );

        ValidationReport {
            meta,
            hypotheses_index: HypothesesIndex {
                source_tier,
                num_hypotheses: hypotheses.len(),
                hypothesis_ids: hypotheses.iter().map(|h| h.id.clone()).collect(),
            },
            validated_claims,
            run_warnings: Vec::new(),
            run_errors: errors,
            summary,
        }
    }
}

/// Run the full pipeline over a set of claim files.
///
/// Returns `None` when there are no claim files at all; a run with nothing
/// to process produces no report. The caller decides where (and whether) to
/// persist the result.
pub fn run_validation<P: AsRef<Path>>(
    claim_files: &[P],
    ledger_path: Option<&Path>,
    config: &ValidationConfig,
    meta: ReportMeta,
) -> Option<ValidationReport> {
    if claim_files.is_empty() {
        warn!("no claim files to process, skipping run");
        return None;
    }

    let (hypotheses, source_tier) =
        osler_ledger::load_hypotheses(ledger_path, &config.domain_keys());
    let corpus = osler_corpus::load_claims(claim_files);

    let engine = ValidationEngine::new(config.clone());
    Some(engine.run(hypotheses, source_tier, corpus, meta))
}
