//! In-memory repository for assigned tasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::assignment::{
    domain::{AssignedTask, MemberId, ProjectId, TaskId},
    ports::{AssignedTaskRepository, AssignedTaskRepositoryError, AssignedTaskRepositoryResult},
};

/// Thread-safe in-memory assigned task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignedTaskRepository {
    state: Arc<RwLock<TaskStore>>,
}

#[derive(Debug, Default)]
struct TaskStore {
    tasks: HashMap<TaskId, AssignedTask>,
    /// Task IDs in insertion order, used for oldest-first listings.
    order: Vec<TaskId>,
}

impl InMemoryAssignedTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> AssignedTaskRepositoryError {
    AssignedTaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn collect_matching(
    state: &TaskStore,
    predicate: impl Fn(&AssignedTask) -> bool,
) -> Vec<AssignedTask> {
    state
        .order
        .iter()
        .filter_map(|id| state.tasks.get(id))
        .filter(|task| predicate(task))
        .cloned()
        .collect()
}

#[async_trait]
impl AssignedTaskRepository for InMemoryAssignedTaskRepository {
    async fn store(&self, task: &AssignedTask) -> AssignedTaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(AssignedTaskRepositoryError::DuplicateTask(task.id()));
        }
        state.order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &AssignedTask) -> AssignedTaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(AssignedTaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> AssignedTaskRepositoryResult<Option<AssignedTask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_assignee(
        &self,
        member_id: MemberId,
    ) -> AssignedTaskRepositoryResult<Vec<AssignedTask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(collect_matching(&state, |task| {
            task.assigned_to() == member_id
        }))
    }

    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> AssignedTaskRepositoryResult<Vec<AssignedTask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(collect_matching(&state, |task| {
            task.project_id() == project_id
        }))
    }
}
