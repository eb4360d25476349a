//! Claim validation and scoring engine.
//!
//! Scores extracted biomedical claims against a hypothesis set and produces
//! a ranked, auditable validation report.
//!
//! # Key Concepts
//!
//! - **Match score**: weighted blend of domain agreement, token Jaccard,
//!   and keyword overlap between a claim and a hypothesis. Pairs below the
//!   configured threshold are dropped.
//! - **Evidence quality**: claim-level blend of study-design strength,
//!   species relevance, and sample-size adequacy.
//! - **Composite score**: match score and evidence quality combined with a
//!   replication modifier and a contradiction deduction, clamped to
//!   [0, 100].
//! - **Replication clustering**: near-duplicate claims across a run raise
//!   each other's replication score.
//!
//! # Architecture
//!
//! Each stage is a pure function over its inputs; the [`ValidationEngine`]
//! sequences them and [`run_validation`] wires in hypothesis and corpus
//! loading. Given the same inputs and configuration, a run always produces
//! a byte-identical report.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cluster;
pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod report;
pub mod scoring;

pub use config::{
    CompositeWeights, DomainProfile, EvidenceQualityWeights, MatchWeights, ScoringConfig,
    ValidationConfig,
};
pub use engine::{run_validation, ValidationEngine};
pub use error::{Result, ValidatorError};
pub use report::{
    HypothesesIndex, HypothesisMatch, MatchDetails, ReportMeta, RunSummary, ValidatedClaim,
    ValidationReport,
};
pub use scoring::{claim_metrics, score_claim, ClaimMetrics};
