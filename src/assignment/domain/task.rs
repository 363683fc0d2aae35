//! Persisted record of a task and its assignee.

use super::{
    AssignmentDecision, AssignmentDomainError, Complexity, MemberId, ParseTaskStateError,
    Priority, ProjectId, Score, TaskId, TaskRequest,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an assigned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Task is assigned and counts towards the assignee's workload.
    Open,
    /// Task is finished.
    Done,
}

impl TaskState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}

/// The assignee side of a task: who holds it and why they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Selected member.
    pub assigned_to: MemberId,
    /// Score the member achieved.
    pub score: Score,
    /// Rationale surfaced alongside the score.
    pub rationale: String,
}

impl From<&AssignmentDecision> for Assignment {
    fn from(decision: &AssignmentDecision) -> Self {
        Self {
            assigned_to: decision.member_id(),
            score: decision.score(),
            rationale: decision.rationale().to_owned(),
        }
    }
}

/// Task aggregate carrying exactly one assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTask {
    id: TaskId,
    request: TaskRequest,
    assignment: Assignment,
    state: TaskState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAssignedTask {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task description.
    pub request: TaskRequest,
    /// Persisted assignment.
    pub assignment: Assignment,
    /// Persisted lifecycle state.
    pub state: TaskState,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl AssignedTask {
    /// Creates an open task assigned according to `decision`.
    #[must_use]
    pub fn new(request: TaskRequest, decision: &AssignmentDecision, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            request,
            assignment: Assignment::from(decision),
            state: TaskState::Open,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAssignedTask) -> Self {
        Self {
            id: data.id,
            request: data.request,
            assignment: data.assignment,
            state: data.state,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.request.project_id()
    }

    /// Returns the task description the assignment was computed for.
    #[must_use]
    pub const fn request(&self) -> &TaskRequest {
        &self.request
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.request.title()
    }

    /// Returns the complexity.
    #[must_use]
    pub const fn complexity(&self) -> Complexity {
        self.request.complexity()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.request.priority()
    }

    /// Returns the current assignment.
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assigned_to(&self) -> MemberId {
        self.assignment.assigned_to
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Hands the task to a newly selected member.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::TaskAlreadyCompleted`] when the task
    /// is done.
    pub fn reassign(
        &mut self,
        decision: &AssignmentDecision,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        self.ensure_open()?;
        self.assignment = Assignment::from(decision);
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Marks the task as done.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::TaskAlreadyCompleted`] when the task
    /// is already done.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), AssignmentDomainError> {
        self.ensure_open()?;
        self.state = TaskState::Done;
        self.updated_at = clock.utc();
        Ok(())
    }

    const fn ensure_open(&self) -> Result<(), AssignmentDomainError> {
        match self.state {
            TaskState::Open => Ok(()),
            TaskState::Done => Err(AssignmentDomainError::TaskAlreadyCompleted(self.id)),
        }
    }
}
