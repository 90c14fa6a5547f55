//! Candidate pipeline entry and the search-service payload it is built from.

use super::{CandidateId, CandidatePatch, ParsePriorityError, StageId};
use serde::{Deserialize, Serialize};

/// Review priority assigned to a pipeline entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Default priority for new entries.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Candidate record supplied by the search service.
///
/// Carries no stage, progress or priority fields; the pipeline store attaches
/// those when the candidate is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    /// Candidate identity.
    pub id: CandidateId,
    /// Full display name.
    pub name: String,
    /// Current or target role.
    pub role: String,
    /// Department the role belongs to.
    pub department: String,
    /// Display initials.
    pub avatar: String,
    /// Skills in relevance order.
    pub skills: Vec<String>,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Location, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Highest education, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Salary expectation, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    /// Free-form recruiter notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CandidateProfile {
    /// Creates a profile with the identifying fields set.
    ///
    /// The avatar defaults to the initials of `name`; contact and optional
    /// fields start empty.
    #[must_use]
    pub fn new(id: CandidateId, name: impl Into<String>, role: impl Into<String>) -> Self {
        let display_name = name.into();
        let avatar = initials(&display_name);
        Self {
            id,
            name: display_name,
            role: role.into(),
            department: String::new(),
            avatar,
            skills: Vec::new(),
            email: String::new(),
            phone: String::new(),
            location: None,
            education: None,
            salary: None,
            notes: None,
        }
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the skills list.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = String>) -> Self {
        self.skills = skills.into_iter().collect();
        self
    }

    /// Sets email and phone.
    #[must_use]
    pub fn with_contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the education.
    #[must_use]
    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = Some(education.into());
        self
    }

    /// Sets the salary expectation.
    #[must_use]
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }
}

/// Uppercase first letters of up to two name parts, e.g. `"Anna K."` → `"AK"`.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Candidate placed in the hiring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineCandidate {
    id: CandidateId,
    name: String,
    role: String,
    department: String,
    avatar: String,
    stage_id: StageId,
    days_in_stage: u32,
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interview_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    skills: Vec<String>,
    email: String,
    phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    salary: Option<String>,
}

impl PipelineCandidate {
    /// Creates a pipeline entry in the first stage with medium priority.
    #[must_use]
    pub fn from_profile(profile: CandidateProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            role: profile.role,
            department: profile.department,
            avatar: profile.avatar,
            stage_id: StageId::first(),
            days_in_stage: 0,
            priority: Priority::default(),
            next_action: None,
            interview_date: None,
            notes: profile.notes,
            skills: profile.skills,
            email: profile.email,
            phone: profile.phone,
            location: profile.location,
            education: profile.education,
            salary: profile.salary,
        }
    }

    /// Returns the candidate identifier.
    #[must_use]
    pub const fn id(&self) -> &CandidateId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the display initials.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage_id(&self) -> StageId {
        self.stage_id
    }

    /// Returns the number of days counted in the current stage.
    #[must_use]
    pub const fn days_in_stage(&self) -> u32 {
        self.days_in_stage
    }

    /// Returns the review priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the planned next action, if any.
    #[must_use]
    pub fn next_action(&self) -> Option<&str> {
        self.next_action.as_deref()
    }

    /// Returns the scheduled interview date, if any.
    #[must_use]
    pub fn interview_date(&self) -> Option<&str> {
        self.interview_date.as_deref()
    }

    /// Returns recruiter notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the skills in relevance order.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the location, if known.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the education, if known.
    #[must_use]
    pub fn education(&self) -> Option<&str> {
        self.education.as_deref()
    }

    /// Returns the salary expectation, if known.
    #[must_use]
    pub fn salary(&self) -> Option<&str> {
        self.salary.as_deref()
    }

    /// Places the candidate in `stage` and restarts the day counter.
    ///
    /// Moving to the current stage still restarts the counter.
    pub const fn move_to(&mut self, stage: StageId) {
        self.stage_id = stage;
        self.days_in_stage = 0;
    }

    /// Shallow-merges the fields present in `patch`.
    ///
    /// A patched stage is written as-is; unlike [`Self::move_to`] it leaves
    /// the day counter alone unless the patch sets it too.
    pub fn apply(&mut self, patch: CandidatePatch) {
        let CandidatePatch {
            name,
            role,
            department,
            avatar,
            stage_id,
            days_in_stage,
            priority,
            next_action,
            interview_date,
            notes,
            skills,
            email,
            phone,
            location,
            education,
            salary,
        } = patch;

        merge(&mut self.name, name);
        merge(&mut self.role, role);
        merge(&mut self.department, department);
        merge(&mut self.avatar, avatar);
        merge(&mut self.stage_id, stage_id);
        merge(&mut self.days_in_stage, days_in_stage);
        merge(&mut self.priority, priority);
        merge(&mut self.next_action, next_action);
        merge(&mut self.interview_date, interview_date);
        merge(&mut self.notes, notes);
        merge(&mut self.skills, skills);
        merge(&mut self.email, email);
        merge(&mut self.phone, phone);
        merge(&mut self.location, location);
        merge(&mut self.education, education);
        merge(&mut self.salary, salary);
    }
}

/// Overwrites `field` when the patch carries a value.
fn merge<T>(field: &mut T, value: Option<T>) {
    if let Some(new_value) = value {
        *field = new_value;
    }
}
