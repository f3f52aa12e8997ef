//! Error types for the bounty registry and its storage layers

use thiserror::Error;

/// Errors surfaced by the bounty list components.
///
/// Listener failures never appear here: they are caught and logged at the
/// registry boundary.
#[derive(Debug, Error)]
pub enum BountyError {
    /// Parsed input contained no usable bounty entries.
    #[error("No valid Blood Token bounty entries were provided.")]
    NoEntries,

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type BountyResult<T> = Result<T, BountyError>;
