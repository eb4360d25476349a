//! Osler Hypothesis Ledger
//!
//! Resolves the authoritative hypothesis set for a run from a tiered source:
//!
//! - **Tier A**: a structured registry block embedded in the ledger document
//!   between fixed sentinel markers, parsed as JSON
//! - **Tier B**: semi-structured markdown bullets in the same document
//! - **Tier C**: a hardcoded baseline set, one hypothesis per core aging
//!   domain
//!
//! The loader never fails: degraded input degrades the tier, so the engine
//! is never blocked by a missing or malformed ledger.

#![warn(missing_docs)]

mod fallback;
mod loader;
mod markdown;

pub use fallback::baseline_hypotheses;
pub use loader::{load_hypotheses, parse_ledger};
