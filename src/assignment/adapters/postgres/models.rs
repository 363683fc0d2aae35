//! Diesel row models for assignment persistence.

use super::schema::{assigned_tasks, project_members, projects};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Insert model for project registrations.
///
/// `created_at` is filled in by the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
}

/// Query result row for project members.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = project_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemberRow {
    /// Member identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Optional notification address.
    pub email: Option<String>,
    /// Skill map JSON payload.
    pub skills: Value,
    /// Open-task count.
    pub workload: i32,
    /// Optional availability flag.
    pub available: Option<bool>,
    /// Roster order.
    pub roster_position: i64,
}

/// Insert model for project members.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_members)]
pub struct NewMemberRow {
    /// Member identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Optional notification address.
    pub email: Option<String>,
    /// Skill map JSON payload.
    pub skills: Value,
    /// Open-task count.
    pub workload: i32,
    /// Optional availability flag.
    pub available: Option<bool>,
}

/// Query result row for assigned tasks.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = assigned_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AssignedTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Selected member.
    pub assigned_to: uuid::Uuid,
    /// Task description JSON payload.
    pub request: Value,
    /// Score in hundredths.
    pub score: i32,
    /// Assignment rationale.
    pub rationale: String,
    /// Lifecycle state.
    pub state: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for assigned tasks.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = assigned_tasks)]
pub struct NewAssignedTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Selected member.
    pub assigned_to: uuid::Uuid,
    /// Task description JSON payload.
    pub request: Value,
    /// Score in hundredths.
    pub score: i32,
    /// Assignment rationale.
    pub rationale: String,
    /// Lifecycle state.
    pub state: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Upsert changeset for project members.
///
/// Leaves `workload` alone so profile edits never reset the open-task count.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = project_members)]
#[diesel(treat_none_as_null = true)]
pub struct MemberProfileChanges {
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Optional notification address.
    pub email: Option<String>,
    /// Skill map JSON payload.
    pub skills: Value,
    /// Optional availability flag.
    pub available: Option<bool>,
}

impl From<&NewMemberRow> for MemberProfileChanges {
    fn from(row: &NewMemberRow) -> Self {
        Self {
            project_id: row.project_id,
            name: row.name.clone(),
            email: row.email.clone(),
            skills: row.skills.clone(),
            available: row.available,
        }
    }
}
