//! Identifier and validated scalar types for the pipeline domain.

use super::PipelineDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a candidate, as issued by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CandidateId(String);

impl CandidateId {
    /// Creates a validated candidate identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::EmptyCandidateId`] when the value is
    /// empty or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, PipelineDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(PipelineDomainError::EmptyCandidateId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CandidateId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CandidateId {
    type Error = PipelineDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CandidateId> for String {
    fn from(id: CandidateId) -> Self {
        id.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the single storage slot the pipeline document is written under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StorageKey(String);

impl StorageKey {
    /// Storage key used when none is configured.
    pub const DEFAULT: &'static str = "pipeline-storage";

    /// Creates a validated storage key.
    ///
    /// Keys name a slot in flat key-value storage, so only ASCII letters,
    /// digits, `-`, `_` and `.` are accepted and the key must not start with
    /// a dot.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::EmptyStorageKey`] for blank input and
    /// [`PipelineDomainError::InvalidStorageKey`] for disallowed characters.
    pub fn new(value: impl Into<String>) -> Result<Self, PipelineDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(PipelineDomainError::EmptyStorageKey);
        }

        let is_valid = !normalized.starts_with('.')
            && normalized
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
        if !is_valid {
            return Err(PipelineDomainError::InvalidStorageKey(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StorageKey {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for StorageKey {
    type Error = PipelineDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StorageKey> for String {
    fn from(key: StorageKey) -> Self {
        key.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
