//! Validated description of a task awaiting assignment.

use super::{AssignmentDomainError, AssignmentError, ProjectId, SkillName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task complexity on a 1 to 10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Complexity(u8);

impl Complexity {
    /// Lowest valid complexity.
    pub const MIN: u8 = 1;
    /// Highest valid complexity.
    pub const MAX: u8 = 10;

    /// Creates a validated complexity value.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidComplexity`] when the value is
    /// outside `1..=10`.
    pub const fn new(value: u8) -> Result<Self, AssignmentDomainError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(AssignmentDomainError::InvalidComplexity(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric complexity.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the proficiency level a task of this complexity calls for.
    ///
    /// Complexity pairs map onto proficiency levels: 1-2 → 1, 3-4 → 2,
    /// 5-6 → 3, 7-8 → 4, 9-10 → 5.
    #[must_use]
    pub const fn ideal_proficiency(self) -> u8 {
        match self.0 {
            0..=2 => 1,
            3..=4 => 2,
            5..=6 => 3,
            7..=8 => 4,
            _ => 5,
        }
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for Complexity {
    type Error = AssignmentDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Complexity> for u8 {
    fn from(value: Complexity) -> Self {
        value.0
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal scheduling.
    #[default]
    Medium,
    /// Should be picked up first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = AssignmentDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(AssignmentDomainError::InvalidPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated task submitted for auto-assignment.
///
/// Deserialization runs the same checks as [`TaskRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTaskRequest")]
pub struct TaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    task_type: String,
    required_skill: SkillName,
    estimated_hours: Option<u32>,
    complexity: Complexity,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawTaskRequest {
    project_id: ProjectId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    task_type: String,
    #[serde(default)]
    required_skill: Option<SkillName>,
    #[serde(default)]
    estimated_hours: Option<u32>,
    #[serde(default)]
    complexity: Complexity,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
}

impl TryFrom<RawTaskRequest> for TaskRequest {
    type Error = AssignmentError;

    fn try_from(raw: RawTaskRequest) -> Result<Self, Self::Error> {
        let mut request = Self::new(raw.project_id, &raw.title, &raw.task_type)?;
        if let Some(stored) = raw
            .required_skill
            .filter(|stored| *stored != request.required_skill)
        {
            return Err(AssignmentError::InvalidTask(format!(
                "required skill {stored} does not match task type {}",
                request.task_type
            )));
        }
        request.description = raw.description;
        request.estimated_hours = raw.estimated_hours;
        request.complexity = raw.complexity;
        request.priority = raw.priority;
        request.due_date = raw.due_date;
        Ok(request)
    }
}

impl TaskRequest {
    /// Creates a task request with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::InvalidTask`] when the title or task type
    /// is blank.
    pub fn new(
        project_id: ProjectId,
        title: impl AsRef<str>,
        task_type: impl AsRef<str>,
    ) -> Result<Self, AssignmentError> {
        let trimmed_title = title.as_ref().trim();
        if trimmed_title.is_empty() {
            return Err(AssignmentError::InvalidTask(
                "task title must not be empty".to_owned(),
            ));
        }
        let raw_type = task_type.as_ref().trim();
        let required_skill = SkillName::for_task_type(raw_type).map_err(|_| {
            AssignmentError::InvalidTask("task type must not be empty".to_owned())
        })?;

        Ok(Self {
            project_id,
            title: trimmed_title.to_owned(),
            description: None,
            task_type: raw_type.to_lowercase(),
            required_skill,
            estimated_hours: None,
            complexity: Complexity::default(),
            priority: Priority::default(),
            due_date: None,
        })
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the estimated effort in hours.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: u32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Sets the complexity.
    #[must_use]
    pub const fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the normalized task type tag.
    #[must_use]
    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    /// Returns the skill derived from the task type.
    #[must_use]
    pub const fn required_skill(&self) -> &SkillName {
        &self.required_skill
    }

    /// Returns the estimated effort in hours, if known.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<u32> {
        self.estimated_hours
    }

    /// Returns the complexity.
    #[must_use]
    pub const fn complexity(&self) -> Complexity {
        self.complexity
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}
