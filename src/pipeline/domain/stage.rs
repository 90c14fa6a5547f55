//! Fixed hiring stage sequence and stage advancement.

use super::ParseStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the five ordered hiring stages.
///
/// Declaration order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    /// First review of the application documents.
    Screening,
    /// Conversations and assessments.
    Interview,
    /// Final decision.
    Selection,
    /// Contract negotiation.
    Offer,
    /// Integration into the company.
    Onboarding,
}

impl StageId {
    /// All stages in pipeline order.
    pub const ALL: [Self; 5] = [
        Self::Screening,
        Self::Interview,
        Self::Selection,
        Self::Offer,
        Self::Onboarding,
    ];

    /// Returns the stage new candidates are placed in.
    #[must_use]
    pub const fn first() -> Self {
        Self::Screening
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Screening => "screening",
            Self::Interview => "interview",
            Self::Selection => "selection",
            Self::Offer => "offer",
            Self::Onboarding => "onboarding",
        }
    }

    /// Returns the zero-based position of the stage in the pipeline.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Screening => 0,
            Self::Interview => 1,
            Self::Selection => 2,
            Self::Offer => 3,
            Self::Onboarding => 4,
        }
    }

    /// Returns the immediate successor stage.
    ///
    /// Returns `None` for the terminal stage; there is no wraparound.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Screening => Some(Self::Interview),
            Self::Interview => Some(Self::Selection),
            Self::Selection => Some(Self::Offer),
            Self::Offer => Some(Self::Onboarding),
            Self::Onboarding => None,
        }
    }

    /// Returns `true` when no stage follows this one.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Returns the display metadata for this stage.
    #[must_use]
    pub const fn stage(self) -> &'static PipelineStage {
        match self {
            Self::Screening => &SCREENING_STAGE,
            Self::Interview => &INTERVIEW_STAGE,
            Self::Selection => &SELECTION_STAGE,
            Self::Offer => &OFFER_STAGE,
            Self::Onboarding => &ONBOARDING_STAGE,
        }
    }
}

impl TryFrom<&str> for StageId {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == normalized)
            .ok_or_else(|| ParseStageError(value.to_owned()))
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a pipeline stage.
///
/// Stages are immutable configuration and are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage {
    /// Stage identifier.
    pub id: StageId,
    /// Human-readable column title.
    pub name: &'static str,
    /// Short description of the work done in the stage.
    pub description: &'static str,
    /// Icon identifier understood by the presentation layer.
    pub icon: &'static str,
    /// Colour token for the stage marker.
    pub color: &'static str,
}

impl PipelineStage {
    /// Returns the stage that follows this one, if any.
    #[must_use]
    pub const fn next(&self) -> Option<&'static Self> {
        match self.id.next() {
            Some(next) => Some(next.stage()),
            None => None,
        }
    }
}

/// The fixed, ordered stage sequence.
pub const PIPELINE_STAGES: [PipelineStage; 5] = [
    SCREENING_STAGE,
    INTERVIEW_STAGE,
    SELECTION_STAGE,
    OFFER_STAGE,
    ONBOARDING_STAGE,
];

const SCREENING_STAGE: PipelineStage = PipelineStage {
    id: StageId::Screening,
    name: "Screening",
    description: "Initial review of the application documents",
    icon: "clipboard-list",
    color: "bg-blue-500",
};

const INTERVIEW_STAGE: PipelineStage = PipelineStage {
    id: StageId::Interview,
    name: "Interview",
    description: "Conversations and assessments",
    icon: "message-square",
    color: "bg-purple-500",
};

const SELECTION_STAGE: PipelineStage = PipelineStage {
    id: StageId::Selection,
    name: "Selection",
    description: "Final decision",
    icon: "check-circle",
    color: "bg-amber-500",
};

const OFFER_STAGE: PipelineStage = PipelineStage {
    id: StageId::Offer,
    name: "Offer",
    description: "Contract negotiation",
    icon: "file-text",
    color: "bg-emerald-500",
};

const ONBOARDING_STAGE: PipelineStage = PipelineStage {
    id: StageId::Onboarding,
    name: "Onboarding",
    description: "Integration into the company",
    icon: "party-popper",
    color: "bg-pink-500",
};
