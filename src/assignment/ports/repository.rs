//! Repository port for assigned task persistence.

use crate::assignment::domain::{AssignedTask, MemberId, ProjectId, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assigned task repository operations.
pub type AssignedTaskRepositoryResult<T> = Result<T, AssignedTaskRepositoryError>;

/// Assigned task persistence contract.
#[async_trait]
pub trait AssignedTaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`AssignedTaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &AssignedTask) -> AssignedTaskRepositoryResult<()>;

    /// Persists changes to an existing task (assignee, state, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`AssignedTaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &AssignedTask) -> AssignedTaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> AssignedTaskRepositoryResult<Option<AssignedTask>>;

    /// Returns all tasks assigned to a member, oldest first.
    async fn find_by_assignee(
        &self,
        member_id: MemberId,
    ) -> AssignedTaskRepositoryResult<Vec<AssignedTask>>;

    /// Returns all tasks of a project, oldest first.
    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> AssignedTaskRepositoryResult<Vec<AssignedTask>>;
}

/// Errors returned by assigned task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignedTaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignedTaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
