//! Osler Claim Corpus
//!
//! Reads the per-paper claim files produced by the extraction stage for one
//! run and flattens them into a single ordered claim list with provenance.
//!
//! Input corruption never aborts a run: a malformed file or malformed paper
//! record is skipped at the smallest possible granularity and recorded as a
//! [`RunError`] for the report's audit trail.

#![warn(missing_docs)]

mod loader;

pub use loader::{load_claims, CorpusLoad, RunError, SkipAction};
