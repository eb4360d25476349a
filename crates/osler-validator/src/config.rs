//! Configuration for the validation engine.
//!
//! One explicit immutable struct threaded by reference into every
//! calculator; no ambient state. Defaults reproduce the canonical scoring
//! model exactly, so an absent config file still produces the canonical
//! scores.

use crate::error::{Result, ValidatorError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weights for the three match-score components. Must sum to 1 so the
/// weighted blend tops out at 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    /// Weight of exact claim-domain vs hypothesis-domain agreement
    pub domain_overlap: f64,
    /// Weight of token-set Jaccard between claim and hypothesis text
    pub token_jaccard: f64,
    /// Weight of keyword/entity substring overlap
    pub entity_score: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            domain_overlap: 0.45,
            token_jaccard: 0.40,
            entity_score: 0.15,
        }
    }
}

/// Weights combining the sub-scores into one composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeWeights {
    /// Weight of the match score
    #[serde(rename = "match")]
    pub match_score: f64,
    /// Weight of the blended evidence-quality score
    pub evidence_quality: f64,
    /// Weight applied to the replication score's deviation from neutral 50
    pub replication_modifier: f64,
    /// Weight of the contradiction deduction
    pub contradiction_modifier: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            match_score: 0.55,
            evidence_quality: 0.45,
            replication_modifier: 0.10,
            contradiction_modifier: 0.35,
        }
    }
}

/// Weights blending the claim-level metrics into evidence quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceQualityWeights {
    /// Weight of the study-design evidence strength
    pub evidence_strength: f64,
    /// Weight of species relevance
    pub species_relevance: f64,
    /// Weight of the sample-size score
    pub sample_size: f64,
}

impl Default for EvidenceQualityWeights {
    fn default() -> Self {
        Self {
            evidence_strength: 0.50,
            species_relevance: 0.25,
            sample_size: 0.25,
        }
    }
}

/// Scoring thresholds and weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum match score for a claim-hypothesis pair to be retained
    pub match_threshold: f64,
    /// Maximum retained matches per claim
    pub top_k: usize,
    /// Match-score component weights
    pub match_weights: MatchWeights,
    /// Composite-score weights
    pub composite_weights: CompositeWeights,
    /// Evidence-quality blend weights
    pub evidence_quality_weights: EvidenceQualityWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_threshold: 20.0,
            top_k: 3,
            match_weights: MatchWeights::default(),
            composite_weights: CompositeWeights::default(),
            evidence_quality_weights: EvidenceQualityWeights::default(),
        }
    }
}

/// Keyword lists for one research domain, used as the entity-score fallback
/// when a hypothesis carries no explicit keywords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainProfile {
    /// Characteristic biomarkers for the domain
    pub key_biomarkers: Vec<String>,
    /// Broader search keywords for the domain
    pub search_keywords: Vec<String>,
}

impl DomainProfile {
    /// Combined keyword list in declaration order.
    pub fn fallback_keywords(&self) -> Vec<String> {
        self.key_biomarkers
            .iter()
            .chain(self.search_keywords.iter())
            .cloned()
            .collect()
    }
}

/// Configuration for the validation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Configuration version, surfaced in the report's meta block
    pub version: String,

    /// Scoring thresholds and weights
    pub scoring: ScoringConfig,

    /// Domain key set with keyword fallbacks; a BTreeMap keeps domain
    /// iteration order deterministic
    pub domains: BTreeMap<String, DomainProfile>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            version: "unknown".to_string(),
            scoring: ScoringConfig::default(),
            domains: default_domains(),
        }
    }
}

impl ValidationConfig {
    /// The configured domain keys, in deterministic order.
    pub fn domain_keys(&self) -> Vec<String> {
        self.domains.keys().cloned().collect()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let mw = &self.scoring.match_weights;
        let match_sum = mw.domain_overlap + mw.token_jaccard + mw.entity_score;
        if (match_sum - 1.0).abs() > 1e-6 {
            return Err(ValidatorError::Config(format!(
                "match_weights must sum to 1.0, got {}",
                match_sum
            )));
        }

        let eq = &self.scoring.evidence_quality_weights;
        let eq_sum = eq.evidence_strength + eq.species_relevance + eq.sample_size;
        if (eq_sum - 1.0).abs() > 1e-6 {
            return Err(ValidatorError::Config(format!(
                "evidence_quality_weights must sum to 1.0, got {}",
                eq_sum
            )));
        }

        if self.scoring.top_k == 0 {
            return Err(ValidatorError::Config(
                "top_k must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.scoring.match_threshold) {
            return Err(ValidatorError::Config(format!(
                "match_threshold must be within [0, 100], got {}",
                self.scoring.match_threshold
            )));
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| ValidatorError::Config(format!("failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ValidatorError::Config(format!("failed to serialize to TOML: {}", e)))
    }
}

/// The six core aging domains with short keyword fallbacks, so the entity
/// score works out of the box for keyword-less hypotheses.
fn default_domains() -> BTreeMap<String, DomainProfile> {
    let mut domains = BTreeMap::new();
    domains.insert(
        "epigenetic".to_string(),
        DomainProfile {
            key_biomarkers: strings(&["methylation", "epigenetic clock", "histone"]),
            search_keywords: strings(&["reprogramming"]),
        },
    );
    domains.insert(
        "senescence".to_string(),
        DomainProfile {
            key_biomarkers: strings(&["p16", "p21", "sasp", "il-6"]),
            search_keywords: strings(&["senolytic", "senescent cell"]),
        },
    );
    domains.insert(
        "mitochondrial".to_string(),
        DomainProfile {
            key_biomarkers: strings(&["mitochondria", "ros", "nad+"]),
            search_keywords: strings(&["proteostasis", "mitophagy"]),
        },
    );
    domains.insert(
        "nutrient_sensing".to_string(),
        DomainProfile {
            key_biomarkers: strings(&["mtor", "ampk", "insulin", "igf-1"]),
            search_keywords: strings(&["rapamycin", "caloric restriction"]),
        },
    );
    domains.insert(
        "stem_cell_ecm".to_string(),
        DomainProfile {
            key_biomarkers: strings(&["stem cell", "collagen"]),
            search_keywords: strings(&["regeneration", "extracellular matrix"]),
        },
    );
    domains.insert(
        "comparative".to_string(),
        DomainProfile {
            key_biomarkers: strings(&["naked mole rat", "lifespan"]),
            search_keywords: strings(&["longevity", "long-lived species"]),
        },
    );
    domains
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
