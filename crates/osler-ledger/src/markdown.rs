//! Tier B parser: hypotheses as semi-structured markdown bullets.
//!
//! A hypothesis starts on a line of the form `- **[HYP-ID]** free text`.
//! Indented sub-bullets optionally supply `Keywords:`, `Domain tags:`,
//! `Expected:` (`target=<t> direction=<d>`), `Evidence FOR:`, and
//! `Evidence AGAINST:` as comma-separated lists.

use osler_domain::{ExpectedEffect, Hypothesis};
use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    hypothesis: Regex,
    keywords: Regex,
    domain_tags: Regex,
    expected: Regex,
    evidence_for: Regex,
    evidence_against: Regex,
    expected_detail: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        hypothesis: Regex::new(r"^\s*-\s*\*\*\[(HYP-[^\]]+)\]\*\*\s*(.*)").expect("valid pattern"),
        keywords: Regex::new(r"(?i)^\s+-\s*Keywords:\s*(.*)").expect("valid pattern"),
        domain_tags: Regex::new(r"(?i)^\s+-\s*Domain tags:\s*(.*)").expect("valid pattern"),
        expected: Regex::new(r"(?i)^\s+-\s*Expected:\s*(.*)").expect("valid pattern"),
        evidence_for: Regex::new(r"(?i)^\s+-\s*Evidence FOR:\s*(.*)").expect("valid pattern"),
        evidence_against: Regex::new(r"(?i)^\s+-\s*Evidence AGAINST:\s*(.*)").expect("valid pattern"),
        expected_detail: Regex::new(r"target=(.*?)\s+direction=(.*)").expect("valid pattern"),
    })
}

/// An in-progress hypothesis while walking the document lines.
struct Draft {
    id: String,
    text: String,
    keywords: Vec<String>,
    domain_tags: Vec<String>,
    expected_raw: Option<String>,
    evidence_for: Vec<String>,
    evidence_against: Vec<String>,
}

/// Parse every bullet-pattern hypothesis out of a ledger document.
///
/// `domain_keys` is the configured domain key set used to infer each
/// hypothesis's domain from its normalized domain tags. Returns an empty
/// vector when the document contains no bullet-pattern hypotheses.
pub fn parse_bullets(content: &str, domain_keys: &[String]) -> Vec<Hypothesis> {
    let pats = patterns();
    let mut hypotheses = Vec::new();
    let mut current: Option<Draft> = None;

    for line in content.lines() {
        if let Some(caps) = pats.hypothesis.captures(line) {
            if let Some(draft) = current.take() {
                hypotheses.push(finalize(draft, domain_keys));
            }
            current = Some(Draft {
                id: caps[1].to_string(),
                text: caps[2].trim().to_string(),
                keywords: Vec::new(),
                domain_tags: Vec::new(),
                expected_raw: None,
                evidence_for: Vec::new(),
                evidence_against: Vec::new(),
            });
            continue;
        }

        let Some(draft) = current.as_mut() else {
            continue;
        };

        if let Some(caps) = pats.keywords.captures(line) {
            draft.keywords = parse_comma_separated(&caps[1]);
        } else if let Some(caps) = pats.domain_tags.captures(line) {
            draft.domain_tags = parse_comma_separated(&caps[1]);
        } else if let Some(caps) = pats.expected.captures(line) {
            draft.expected_raw = Some(caps[1].trim().to_string());
        } else if let Some(caps) = pats.evidence_for.captures(line) {
            draft.evidence_for.extend(parse_pmid_list(&caps[1]));
        } else if let Some(caps) = pats.evidence_against.captures(line) {
            draft.evidence_against.extend(parse_pmid_list(&caps[1]));
        }
    }

    if let Some(draft) = current.take() {
        hypotheses.push(finalize(draft, domain_keys));
    }

    hypotheses
}

fn finalize(draft: Draft, domain_keys: &[String]) -> Hypothesis {
    let expected_effect = draft
        .expected_raw
        .as_deref()
        .and_then(|raw| patterns().expected_detail.captures(raw))
        .map(|caps| {
            vec![ExpectedEffect {
                target: caps[1].trim().to_string(),
                direction: caps[2].trim().to_string(),
            }]
        })
        .unwrap_or_default();

    Hypothesis {
        id: draft.id,
        text: draft.text,
        domain: infer_domain(&draft.domain_tags, domain_keys),
        keywords: draft.keywords,
        domain_tags: draft.domain_tags,
        expected_effect,
        evidence_for: draft.evidence_for,
        evidence_against: draft.evidence_against,
    }
}

/// Infer a domain from the hypothesis's tags: first configured key found as
/// a substring of any normalized tag wins; otherwise the first tag verbatim;
/// otherwise "unknown".
fn infer_domain(domain_tags: &[String], domain_keys: &[String]) -> String {
    for tag in domain_tags {
        let tag_norm = tag.to_lowercase().replace(' ', "_");
        for key in domain_keys {
            if tag_norm.contains(key.as_str()) {
                return key.clone();
            }
        }
    }
    domain_tags
        .first()
        .cloned()
        .unwrap_or_else(|| "unknown".to_string())
}

fn parse_comma_separated(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_pmid_list(value: &str) -> Vec<String> {
    parse_comma_separated(value)
        .into_iter()
        .map(|p| p.replace("PMID:", "").trim().to_string())
        .collect()
}
