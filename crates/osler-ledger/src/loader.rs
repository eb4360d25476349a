//! Tiered hypothesis resolution: registry block, markdown bullets, fallback.

use crate::{fallback, markdown};
use osler_domain::{Hypothesis, SourceTier};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Sentinel opening the embedded registry block in the ledger document.
const REGISTRY_START: &str = "<!-- HYPOTHESIS_REGISTRY_JSON_START -->";
/// Sentinel closing the embedded registry block.
const REGISTRY_END: &str = "<!-- HYPOTHESIS_REGISTRY_JSON_END -->";

/// Resolve the run's hypothesis set, first tier that succeeds wins.
///
/// This never errors: an absent path, unreadable file, or unusable document
/// all degrade to the Tier C baseline set.
pub fn load_hypotheses(
    ledger_path: Option<&Path>,
    domain_keys: &[String],
) -> (Vec<Hypothesis>, SourceTier) {
    if let Some(path) = ledger_path {
        match fs::read_to_string(path) {
            Ok(content) => {
                if let Some((hypotheses, tier)) = parse_ledger(&content, domain_keys) {
                    info!(tier = %tier, count = hypotheses.len(), "loaded hypotheses");
                    return (hypotheses, tier);
                }
                warn!(path = %path.display(), "ledger yielded no hypotheses, using baseline set");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ledger unreadable, using baseline set");
            }
        }
    }

    let hypotheses = fallback::baseline_hypotheses();
    info!(tier = %SourceTier::C, count = hypotheses.len(), "loaded hypotheses");
    (hypotheses, SourceTier::C)
}

/// Parse ledger document content at Tier A then Tier B.
///
/// Returns `None` when neither tier yields at least one hypothesis, which
/// callers treat as the cue to fall back to Tier C.
pub fn parse_ledger(
    content: &str,
    domain_keys: &[String],
) -> Option<(Vec<Hypothesis>, SourceTier)> {
    if let Some(hypotheses) = parse_registry_block(content) {
        return Some((hypotheses, SourceTier::A));
    }

    let hypotheses = markdown::parse_bullets(content, domain_keys);
    if !hypotheses.is_empty() {
        return Some((hypotheses, SourceTier::B));
    }

    None
}

/// Tier A: the sentinel-delimited JSON block, either a plain list of
/// hypothesis objects or an object with a `hypotheses` field.
fn parse_registry_block(content: &str) -> Option<Vec<Hypothesis>> {
    let start = content.find(REGISTRY_START)?;
    let rest = &content[start + REGISTRY_START.len()..];
    let end = rest.find(REGISTRY_END)?;
    let block = rest[..end].trim();
    if block.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(block) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "registry block found but not valid JSON");
            return None;
        }
    };

    let list = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(ref map) => map.get("hypotheses")?.clone(),
        _ => return None,
    };

    match serde_json::from_value::<Vec<Hypothesis>>(list) {
        Ok(hypotheses) if !hypotheses.is_empty() => Some(hypotheses),
        Ok(_) => None,
        Err(e) => {
            warn!(error = %e, "registry block entries are not valid hypotheses");
            None
        }
    }
}
