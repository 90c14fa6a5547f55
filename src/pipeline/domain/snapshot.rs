//! Point-in-time copy of the pipeline collection handed to persistence.

use super::PipelineCandidate;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Entire candidate collection as written to durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineSnapshot {
    candidates: Vec<PipelineCandidate>,
    saved_at: Option<DateTime<Utc>>,
}

impl PipelineSnapshot {
    /// Captures `candidates` stamped with the current clock time.
    #[must_use]
    pub fn capture(candidates: Vec<PipelineCandidate>, clock: &impl Clock) -> Self {
        Self {
            candidates,
            saved_at: Some(clock.utc()),
        }
    }

    /// Reconstructs a snapshot read back from storage.
    ///
    /// Documents written before timestamps were recorded carry no
    /// `saved_at`.
    #[must_use]
    pub const fn from_persisted(
        candidates: Vec<PipelineCandidate>,
        saved_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            candidates,
            saved_at,
        }
    }

    /// Returns the candidates in insertion order.
    #[must_use]
    pub fn candidates(&self) -> &[PipelineCandidate] {
        &self.candidates
    }

    /// Consumes the snapshot, returning its candidates.
    #[must_use]
    pub fn into_candidates(self) -> Vec<PipelineCandidate> {
        self.candidates
    }

    /// Returns when the snapshot was captured, if recorded.
    #[must_use]
    pub const fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }
}
