//! `PostgreSQL` member directory.

use super::{
    AssignmentPgPool,
    models::{MemberProfileChanges, MemberRow, NewMemberRow, NewProjectRow},
    schema::{project_members, projects},
};
use crate::assignment::{
    domain::{Member, MemberId, ProjectId, Skill, Workload},
    ports::{MemberDirectory, MemberDirectoryError, MemberDirectoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::BTreeMap;

/// `PostgreSQL`-backed member directory.
#[derive(Debug, Clone)]
pub struct PostgresMemberDirectory {
    pool: AssignmentPgPool,
}

impl PostgresMemberDirectory {
    /// Creates a new directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AssignmentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MemberDirectoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MemberDirectoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MemberDirectoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MemberDirectoryError::persistence)?
    }
}

#[async_trait]
impl MemberDirectory for PostgresMemberDirectory {
    async fn register_project(&self, project_id: ProjectId) -> MemberDirectoryResult<()> {
        let row = NewProjectRow {
            id: project_id.into_inner(),
        };
        self.run_blocking(move |connection| {
            diesel::insert_into(projects::table)
                .values(&row)
                .on_conflict(projects::id)
                .do_nothing()
                .execute(connection)
                .map_err(MemberDirectoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn save_member(&self, member: &Member) -> MemberDirectoryResult<()> {
        let project_id = member.project_id();
        let row = to_row(member)?;
        let changes = MemberProfileChanges::from(&row);

        self.run_blocking(move |connection| {
            if !project_exists(connection, project_id)? {
                return Err(MemberDirectoryError::ProjectNotFound(project_id));
            }
            diesel::insert_into(project_members::table)
                .values(&row)
                .on_conflict(project_members::id)
                .do_update()
                .set(&changes)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        MemberDirectoryError::ProjectNotFound(project_id)
                    }
                    _ => MemberDirectoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn members_of(&self, project_id: ProjectId) -> MemberDirectoryResult<Vec<Member>> {
        self.run_blocking(move |connection| {
            if !project_exists(connection, project_id)? {
                return Err(MemberDirectoryError::ProjectNotFound(project_id));
            }
            let rows = project_members::table
                .filter(project_members::project_id.eq(project_id.into_inner()))
                .order(project_members::roster_position.asc())
                .select(MemberRow::as_select())
                .load::<MemberRow>(connection)
                .map_err(MemberDirectoryError::persistence)?;
            rows.into_iter().map(row_to_member).collect()
        })
        .await
    }

    async fn find_member(&self, member_id: MemberId) -> MemberDirectoryResult<Option<Member>> {
        self.run_blocking(move |connection| {
            let row = project_members::table
                .find(member_id.into_inner())
                .select(MemberRow::as_select())
                .first::<MemberRow>(connection)
                .optional()
                .map_err(MemberDirectoryError::persistence)?;
            row.map(row_to_member).transpose()
        })
        .await
    }

    async fn record_assignment(&self, member_id: MemberId) -> MemberDirectoryResult<()> {
        self.run_blocking(move |connection| {
            adjust_workload(
                connection,
                member_id,
                "UPDATE project_members SET workload = workload + 1 WHERE id = $1",
            )
        })
        .await
    }

    async fn record_release(&self, member_id: MemberId) -> MemberDirectoryResult<()> {
        self.run_blocking(move |connection| {
            adjust_workload(
                connection,
                member_id,
                "UPDATE project_members SET workload = GREATEST(workload - 1, 0) WHERE id = $1",
            )
        })
        .await
    }
}

fn project_exists(connection: &mut PgConnection, project_id: ProjectId) -> MemberDirectoryResult<bool> {
    diesel::select(diesel::dsl::exists(
        projects::table.filter(projects::id.eq(project_id.into_inner())),
    ))
    .get_result::<bool>(connection)
    .map_err(MemberDirectoryError::persistence)
}

fn adjust_workload(
    connection: &mut PgConnection,
    member_id: MemberId,
    statement: &'static str,
) -> MemberDirectoryResult<()> {
    let updated = diesel::sql_query(statement)
        .bind::<diesel::sql_types::Uuid, _>(member_id.into_inner())
        .execute(connection)
        .map_err(MemberDirectoryError::persistence)?;
    if updated == 0 {
        return Err(MemberDirectoryError::MemberNotFound(member_id));
    }
    Ok(())
}

pub(super) fn to_row(member: &Member) -> MemberDirectoryResult<NewMemberRow> {
    let skills: BTreeMap<String, u8> = member
        .skills()
        .map(|skill| (String::from(skill.name), skill.proficiency.level()))
        .collect();
    let skills = serde_json::to_value(skills).map_err(MemberDirectoryError::persistence)?;
    let workload = i32::try_from(member.workload().open_tasks())
        .map_err(MemberDirectoryError::persistence)?;

    Ok(NewMemberRow {
        id: member.id().into_inner(),
        project_id: member.project_id().into_inner(),
        name: member.name().to_owned(),
        email: member.email().map(ToOwned::to_owned),
        skills,
        workload,
        available: member.availability(),
    })
}

pub(super) fn row_to_member(row: MemberRow) -> MemberDirectoryResult<Member> {
    let MemberRow {
        id,
        project_id,
        name,
        email,
        skills: persisted_skills,
        workload: persisted_workload,
        available,
        ..
    } = row;

    let raw_skills = serde_json::from_value::<BTreeMap<String, u8>>(persisted_skills)
        .map_err(MemberDirectoryError::persistence)?;
    let skills = raw_skills
        .into_iter()
        .map(|(name, level)| Skill::new(name, level))
        .collect::<Result<Vec<_>, _>>()
        .map_err(MemberDirectoryError::persistence)?;
    let workload =
        u32::try_from(persisted_workload).map_err(MemberDirectoryError::persistence)?;

    let mut member = Member::new(ProjectId::from_uuid(project_id), name)
        .map_err(MemberDirectoryError::persistence)?
        .with_id(MemberId::from_uuid(id))
        .with_skills(skills)
        .with_workload(Workload::new(workload));
    if let Some(email_address) = email {
        member = member.with_email(email_address);
    }
    if let Some(flag) = available {
        member = member.with_availability(flag);
    }
    Ok(member)
}
