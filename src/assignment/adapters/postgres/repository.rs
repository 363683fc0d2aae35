//! `PostgreSQL` repository implementation for assigned task storage.

use super::{
    AssignmentPgPool,
    models::{AssignedTaskRow, NewAssignedTaskRow},
    schema::assigned_tasks,
};
use crate::assignment::{
    domain::{
        AssignedTask, Assignment, MemberId, PersistedAssignedTask, ProjectId, Score, TaskId,
        TaskRequest, TaskState,
    },
    ports::{AssignedTaskRepository, AssignedTaskRepositoryError, AssignedTaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed assigned task repository.
#[derive(Debug, Clone)]
pub struct PostgresAssignedTaskRepository {
    pool: AssignmentPgPool,
}

impl PostgresAssignedTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AssignmentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AssignedTaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AssignedTaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(AssignedTaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AssignedTaskRepositoryError::persistence)?
    }

    async fn load_where<F>(&self, filter: F) -> AssignedTaskRepositoryResult<Vec<AssignedTask>>
    where
        F: FnOnce(&mut PgConnection) -> QueryResult<Vec<AssignedTaskRow>> + Send + 'static,
    {
        self.run_blocking(move |connection| {
            let rows = filter(connection).map_err(AssignedTaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

#[async_trait]
impl AssignedTaskRepository for PostgresAssignedTaskRepository {
    async fn store(&self, task: &AssignedTask) -> AssignedTaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_row(task)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(assigned_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AssignedTaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => AssignedTaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &AssignedTask) -> AssignedTaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_row(task)?;

        self.run_blocking(move |connection| {
            let updated = diesel::update(assigned_tasks::table.find(task_id.into_inner()))
                .set(&row)
                .execute(connection)
                .map_err(AssignedTaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(AssignedTaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> AssignedTaskRepositoryResult<Option<AssignedTask>> {
        self.run_blocking(move |connection| {
            let row = assigned_tasks::table
                .find(id.into_inner())
                .select(AssignedTaskRow::as_select())
                .first::<AssignedTaskRow>(connection)
                .optional()
                .map_err(AssignedTaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_assignee(
        &self,
        member_id: MemberId,
    ) -> AssignedTaskRepositoryResult<Vec<AssignedTask>> {
        self.load_where(move |connection| {
            assigned_tasks::table
                .filter(assigned_tasks::assigned_to.eq(member_id.into_inner()))
                .order(assigned_tasks::created_at.asc())
                .select(AssignedTaskRow::as_select())
                .load::<AssignedTaskRow>(connection)
        })
        .await
    }

    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> AssignedTaskRepositoryResult<Vec<AssignedTask>> {
        self.load_where(move |connection| {
            assigned_tasks::table
                .filter(assigned_tasks::project_id.eq(project_id.into_inner()))
                .order(assigned_tasks::created_at.asc())
                .select(AssignedTaskRow::as_select())
                .load::<AssignedTaskRow>(connection)
        })
        .await
    }
}

pub(super) fn to_row(task: &AssignedTask) -> AssignedTaskRepositoryResult<NewAssignedTaskRow> {
    let request = serde_json::to_value(task.request())
        .map_err(AssignedTaskRepositoryError::persistence)?;
    let score = i32::try_from(task.assignment().score.hundredths())
        .map_err(AssignedTaskRepositoryError::persistence)?;

    Ok(NewAssignedTaskRow {
        id: task.id().into_inner(),
        project_id: task.project_id().into_inner(),
        assigned_to: task.assigned_to().into_inner(),
        request,
        score,
        rationale: task.assignment().rationale.clone(),
        state: task.state().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

pub(super) fn row_to_task(row: AssignedTaskRow) -> AssignedTaskRepositoryResult<AssignedTask> {
    let AssignedTaskRow {
        id,
        assigned_to,
        request: persisted_request,
        score: persisted_score,
        rationale,
        state: persisted_state,
        created_at,
        updated_at,
        ..
    } = row;

    let request = serde_json::from_value::<TaskRequest>(persisted_request)
        .map_err(AssignedTaskRepositoryError::persistence)?;
    let score =
        u32::try_from(persisted_score).map_err(AssignedTaskRepositoryError::persistence)?;
    let state = TaskState::try_from(persisted_state.as_str())
        .map_err(AssignedTaskRepositoryError::persistence)?;

    Ok(AssignedTask::from_persisted(PersistedAssignedTask {
        id: TaskId::from_uuid(id),
        request,
        assignment: Assignment {
            assigned_to: MemberId::from_uuid(assigned_to),
            score: Score::from_hundredths(score),
            rationale,
        },
        state,
        created_at,
        updated_at,
    }))
}
