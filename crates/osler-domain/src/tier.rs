//! Source tier for the resolved hypothesis set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the run's hypothesis set came from, in decreasing fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTier {
    /// Embedded structured registry block in the ledger document
    A,
    /// Semi-structured markdown bullets in the ledger document
    B,
    /// Hardcoded baseline hypotheses; used when the ledger is absent or
    /// unparsable
    C,
}

impl fmt::Display for SourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceTier::A => write!(f, "A"),
            SourceTier::B => write!(f, "B"),
            SourceTier::C => write!(f, "C"),
        }
    }
}
