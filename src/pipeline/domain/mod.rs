//! Domain model for the candidate pipeline.
//!
//! The pipeline domain models candidate entries, the fixed stage sequence and
//! the persisted snapshot while keeping all infrastructure concerns outside of
//! the domain boundary.

mod board;
mod candidate;
mod error;
mod ids;
mod patch;
mod snapshot;
mod stage;

pub use board::{PipelineSummary, StageColumn, group_by_stage, in_stage};
pub use candidate::{CandidateProfile, PipelineCandidate, Priority};
pub use error::{ParsePriorityError, ParseStageError, PipelineDomainError};
pub use ids::{CandidateId, StorageKey};
pub use patch::CandidatePatch;
pub use snapshot::PipelineSnapshot;
pub use stage::{PIPELINE_STAGES, PipelineStage, StageId};
