//! Hypothesis module - the research statements claims are validated against.

use serde::{Deserialize, Serialize};

fn default_unknown() -> String {
    "unknown".to_string()
}

/// An expected direction of effect on a named target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedEffect {
    /// The biomarker or pathway the hypothesis predicts an effect on
    #[serde(default)]
    pub target: String,

    /// Predicted direction, e.g. "decrease"
    #[serde(default)]
    pub direction: String,
}

/// A target statement to validate claims against.
///
/// Constructed once per run by the ledger loader and immutable thereafter.
/// All fields except `id` are defaulted so a partially specified registry
/// entry still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Stable unique identifier, e.g. "HYP-VAL-01"
    pub id: String,

    /// The hypothesis statement
    #[serde(default)]
    pub text: String,

    /// Single category label; "unknown" when no domain could be inferred
    #[serde(default = "default_unknown")]
    pub domain: String,

    /// Explicit match keywords; when empty, scoring falls back to the
    /// configured domain keyword lists
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Raw domain tags from the ledger (markdown source only)
    #[serde(default)]
    pub domain_tags: Vec<String>,

    /// Expected effects, optional
    #[serde(default)]
    pub expected_effect: Vec<ExpectedEffect>,

    /// Supporting external identifiers; informational only, not scored
    #[serde(default)]
    pub evidence_for: Vec<String>,

    /// Contradicting external identifiers; informational only, not scored
    #[serde(default)]
    pub evidence_against: Vec<String>,
}

impl Hypothesis {
    /// Build a hypothesis with just the fields scoring requires.
    pub fn new(id: impl Into<String>, domain: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            domain: domain.into(),
            keywords: Vec::new(),
            domain_tags: Vec::new(),
            expected_effect: Vec::new(),
            evidence_for: Vec::new(),
            evidence_against: Vec::new(),
        }
    }
}
