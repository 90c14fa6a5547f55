//! Partial update applied to a pipeline entry.

use super::{Priority, StageId};

/// Shallow patch for a [`super::PipelineCandidate`].
///
/// `None` leaves a field untouched. Optional attributes use a nested option
/// so a patch can clear them: `Some(None)` removes the value. The identifier
/// is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePatch {
    /// New display name.
    pub name: Option<String>,
    /// New role.
    pub role: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New display initials.
    pub avatar: Option<String>,
    /// New stage, written without resetting the day counter.
    pub stage_id: Option<StageId>,
    /// New day counter value.
    pub days_in_stage: Option<u32>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New or cleared next action.
    pub next_action: Option<Option<String>>,
    /// New or cleared interview date.
    pub interview_date: Option<Option<String>>,
    /// New or cleared notes.
    pub notes: Option<Option<String>>,
    /// Replacement skills list.
    pub skills: Option<Vec<String>>,
    /// New email.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New or cleared location.
    pub location: Option<Option<String>>,
    /// New or cleared education.
    pub education: Option<Option<String>>,
    /// New or cleared salary expectation.
    pub salary: Option<Option<String>>,
}

impl CandidatePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the stage without touching the day counter.
    #[must_use]
    pub const fn with_stage(mut self, stage: StageId) -> Self {
        self.stage_id = Some(stage);
        self
    }

    /// Sets the day counter.
    #[must_use]
    pub const fn with_days_in_stage(mut self, days: u32) -> Self {
        self.days_in_stage = Some(days);
        self
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the next action.
    #[must_use]
    pub fn with_next_action(mut self, action: impl Into<String>) -> Self {
        self.next_action = Some(Some(action.into()));
        self
    }

    /// Clears the next action.
    #[must_use]
    pub fn clear_next_action(mut self) -> Self {
        self.next_action = Some(None);
        self
    }

    /// Sets the interview date.
    #[must_use]
    pub fn with_interview_date(mut self, date: impl Into<String>) -> Self {
        self.interview_date = Some(Some(date.into()));
        self
    }

    /// Clears the interview date.
    #[must_use]
    pub fn clear_interview_date(mut self) -> Self {
        self.interview_date = Some(None);
        self
    }

    /// Sets recruiter notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(Some(notes.into()));
        self
    }

    /// Replaces the skills list.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = String>) -> Self {
        self.skills = Some(skills.into_iter().collect());
        self
    }
}
