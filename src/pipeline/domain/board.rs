//! Read models derived from the candidate collection.

use super::{PIPELINE_STAGES, PipelineCandidate, PipelineStage, StageId};

/// One board column: a stage and the candidates currently in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageColumn {
    /// Stage metadata.
    pub stage: &'static PipelineStage,
    /// Candidates in the stage, in insertion order.
    pub candidates: Vec<PipelineCandidate>,
}

impl StageColumn {
    /// Returns the number of candidates in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` when no candidate is in the stage.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Groups `candidates` into one column per stage, in stage order.
///
/// Every stage gets a column, including empty ones.
#[must_use]
pub fn group_by_stage(candidates: &[PipelineCandidate]) -> Vec<StageColumn> {
    PIPELINE_STAGES
        .iter()
        .map(|stage| StageColumn {
            stage: stage.id.stage(),
            candidates: in_stage(candidates, stage.id),
        })
        .collect()
}

/// Returns the candidates in `stage`, in insertion order.
#[must_use]
pub fn in_stage(candidates: &[PipelineCandidate], stage: StageId) -> Vec<PipelineCandidate> {
    candidates
        .iter()
        .filter(|candidate| candidate.stage_id() == stage)
        .cloned()
        .collect()
}

/// Headline counts shown above the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Candidates in the pipeline.
    pub total: usize,
    /// Candidates in the interview stage.
    pub interviewing: usize,
    /// Candidates holding an open offer.
    pub open_offers: usize,
}

impl PipelineSummary {
    /// Counts `candidates`.
    #[must_use]
    pub fn from_candidates(candidates: &[PipelineCandidate]) -> Self {
        let count = |stage: StageId| {
            candidates
                .iter()
                .filter(|candidate| candidate.stage_id() == stage)
                .count()
        };
        Self {
            total: candidates.len(),
            interviewing: count(StageId::Interview),
            open_offers: count(StageId::Offer),
        }
    }
}
