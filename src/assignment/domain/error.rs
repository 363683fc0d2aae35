//! Error types for assignment domain validation and scoring.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing assignment domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The proficiency level is outside `1..=5`.
    #[error("invalid proficiency level {0}, expected a value between 1 and 5")]
    InvalidProficiency(u8),

    /// The task complexity is outside `1..=10`.
    #[error("invalid task complexity {0}, expected a value between 1 and 10")]
    InvalidComplexity(u8),

    /// The priority value is not one of `low`, `medium`, or `high`.
    #[error("unknown task priority: {0}")]
    InvalidPriority(String),

    /// The skill name is empty after trimming.
    #[error("skill name must not be empty")]
    EmptySkillName,

    /// The member display name is empty after trimming.
    #[error("member name must not be empty")]
    EmptyMemberName,

    /// The scoring weights do not satisfy the scoring invariants.
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    /// The task has already been completed and cannot change.
    #[error("task {0} is already completed")]
    TaskAlreadyCompleted(TaskId),
}

/// Errors produced when an assignment cannot be decided.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentError {
    /// The project has no eligible members; add members before auto-assigning.
    #[error("no eligible candidates to assign the task to")]
    NoCandidates,

    /// The task request is missing required fields or carries invalid values.
    #[error("invalid task request: {0}")]
    InvalidTask(String),
}

impl From<AssignmentDomainError> for AssignmentError {
    fn from(err: AssignmentDomainError) -> Self {
        Self::InvalidTask(err.to_string())
    }
}

/// Error returned while parsing task states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);
