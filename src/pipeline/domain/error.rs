//! Error types for pipeline domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain pipeline values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineDomainError {
    /// The candidate identifier is empty after trimming.
    #[error("candidate id must not be empty")]
    EmptyCandidateId,

    /// The storage key is empty after trimming.
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    /// The storage key contains characters that cannot name a storage slot.
    #[error("invalid storage key '{0}', expected letters, digits, '-', '_' or '.'")]
    InvalidStorageKey(String),
}

/// Error returned while parsing pipeline stages from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pipeline stage: {0}")]
pub struct ParseStageError(pub String);

/// Error returned while parsing candidate priorities from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown candidate priority: {0}")]
pub struct ParsePriorityError(pub String);
