//! Error types for the validation engine.

use thiserror::Error;

/// Errors that can escape the validation engine.
///
/// Input corruption and ledger degradation are handled internally
/// (recorded or tiered down, never raised); what remains fallible is
/// configuration handling and writing the report.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Report file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failure
    #[error("report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, ValidatorError>;
