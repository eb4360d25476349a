//! Claim file loading and flattening.

use osler_domain::{Claim, ClaimRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Granularity at which corrupt input was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipAction {
    /// The whole file was unusable and skipped
    SkippedFile,
    /// One paper record within an otherwise usable file was skipped
    SkippedPaper,
}

/// One recoverable input problem, recorded for the report's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunError {
    /// File the problem occurred in (base name)
    pub file: String,
    /// What went wrong
    pub error: String,
    /// What was skipped in response
    pub action: SkipAction,
}

/// The flattened corpus for one run.
#[derive(Debug, Clone, Default)]
pub struct CorpusLoad {
    /// All surviving claims, in file order then paper order then claim order
    pub claims: Vec<Claim>,
    /// Everything that had to be skipped along the way
    pub errors: Vec<RunError>,
}

/// Load and flatten every claim file for a run.
///
/// Each file is expected to hold a JSON array of paper results, each with
/// `input_paper.pmid` and an optional `extracted_claims.claims` list. A
/// paper with no claims is not an error. Output order mirrors input order;
/// this ordering is what makes `claim_id` assignment reproducible.
pub fn load_claims<P: AsRef<Path>>(files: &[P]) -> CorpusLoad {
    let mut claims = Vec::new();
    let mut errors = Vec::new();

    for path in files {
        let path = path.as_ref();
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %file, error = %e, "claim file unreadable, skipping");
                errors.push(RunError {
                    file,
                    error: format!("read error: {}", e),
                    action: SkipAction::SkippedFile,
                });
                continue;
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!(file = %file, error = %e, "claim file is not valid JSON, skipping");
                errors.push(RunError {
                    file,
                    error: format!("JSON decode error: {}", e),
                    action: SkipAction::SkippedFile,
                });
                continue;
            }
        };

        let Some(papers) = value.as_array() else {
            warn!(file = %file, "claim file top level is not an array, skipping");
            errors.push(RunError {
                file,
                error: "expected JSON array of paper results".to_string(),
                action: SkipAction::SkippedFile,
            });
            continue;
        };

        for paper in papers {
            flatten_paper(paper, &file, &mut claims, &mut errors);
        }
    }

    debug!(claims = claims.len(), errors = errors.len(), "claim corpus loaded");
    CorpusLoad { claims, errors }
}

/// Flatten one paper result into claims with provenance attached.
fn flatten_paper(
    paper: &serde_json::Value,
    file: &str,
    claims: &mut Vec<Claim>,
    errors: &mut Vec<RunError>,
) {
    let Some(input_paper) = paper.get("input_paper") else {
        errors.push(RunError {
            file: file.to_string(),
            error: "missing input_paper".to_string(),
            action: SkipAction::SkippedPaper,
        });
        return;
    };

    let pmid = input_paper
        .get("pmid")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown");

    // Missing or empty extracted_claims is a paper with no claims, not an
    // error.
    let Some(claim_values) = paper
        .get("extracted_claims")
        .and_then(|e| e.get("claims"))
        .and_then(|c| c.as_array())
    else {
        return;
    };

    for (index, value) in claim_values.iter().enumerate() {
        match serde_json::from_value::<ClaimRecord>(value.clone()) {
            Ok(record) => claims.push(Claim::new(record, pmid, index)),
            Err(e) => {
                warn!(file = %file, pmid = %pmid, index, error = %e, "undecodable claim entry, skipping");
                errors.push(RunError {
                    file: file.to_string(),
                    error: format!("claim {} of paper {} undecodable: {}", index, pmid, e),
                    action: SkipAction::SkippedPaper,
                });
            }
        }
    }
}
