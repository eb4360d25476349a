//! Osler Domain Layer
//!
//! This crate contains the core data model for Osler, the claim-to-hypothesis
//! validation engine. It defines the fundamental concepts shared by every
//! other layer and keeps external dependencies to the serde wire model.
//!
//! ## Key Concepts
//!
//! - **Claim**: one atomic factual assertion extracted from one paper, with
//!   provenance back to its PMID and position
//! - **Hypothesis**: a fixed research statement claims are validated against
//! - **Source Tier**: decreasing-fidelity origins for the hypothesis set
//!   (embedded registry, markdown bullets, hardcoded fallback)
//! - **Text layer**: the bag-of-words normalization, tokenization, and
//!   Jaccard similarity every comparison in the engine is built on
//!
//! ## Architecture
//!
//! Pure data and pure functions only. Loading, scoring, and reporting live
//! in the `osler-ledger`, `osler-corpus`, and `osler-validator` crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod hypothesis;
pub mod text;
pub mod tier;

// Re-exports for convenience
pub use claim::{Claim, ClaimRecord, ContradictionFlags};
pub use hypothesis::{ExpectedEffect, Hypothesis};
pub use tier::SourceTier;
