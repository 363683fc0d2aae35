//! In-memory member directory for tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::assignment::{
    domain::{Member, MemberId, ProjectId},
    ports::{MemberDirectory, MemberDirectoryError, MemberDirectoryResult},
};

/// Thread-safe in-memory member directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    members: HashMap<MemberId, Member>,
    /// Member IDs per project, in insertion order.
    rosters: HashMap<ProjectId, Vec<MemberId>>,
}

impl InMemoryMemberDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> MemberDirectoryError {
    MemberDirectoryError::persistence(std::io::Error::other(err.to_string()))
}

fn adjust_member(
    state: &mut DirectoryState,
    member_id: MemberId,
    adjust: impl FnOnce(&mut Member),
) -> MemberDirectoryResult<()> {
    let member = state
        .members
        .get_mut(&member_id)
        .ok_or(MemberDirectoryError::MemberNotFound(member_id))?;
    adjust(member);
    Ok(())
}

#[async_trait]
impl MemberDirectory for InMemoryMemberDirectory {
    async fn register_project(&self, project_id: ProjectId) -> MemberDirectoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.rosters.entry(project_id).or_default();
        Ok(())
    }

    async fn save_member(&self, member: &Member) -> MemberDirectoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let roster = state
            .rosters
            .get_mut(&member.project_id())
            .ok_or(MemberDirectoryError::ProjectNotFound(member.project_id()))?;
        if !roster.contains(&member.id()) {
            roster.push(member.id());
        }
        let saved = state.members.get(&member.id()).map_or_else(
            || member.clone(),
            |stored| member.clone().with_workload(stored.workload()),
        );
        state.members.insert(member.id(), saved);
        Ok(())
    }

    async fn members_of(&self, project_id: ProjectId) -> MemberDirectoryResult<Vec<Member>> {
        let state = self.state.read().map_err(lock_error)?;
        let roster = state
            .rosters
            .get(&project_id)
            .ok_or(MemberDirectoryError::ProjectNotFound(project_id))?;
        Ok(roster
            .iter()
            .filter_map(|id| state.members.get(id).cloned())
            .collect())
    }

    async fn find_member(&self, member_id: MemberId) -> MemberDirectoryResult<Option<Member>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.members.get(&member_id).cloned())
    }

    async fn record_assignment(&self, member_id: MemberId) -> MemberDirectoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        adjust_member(&mut state, member_id, Member::take_task)
    }

    async fn record_release(&self, member_id: MemberId) -> MemberDirectoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        adjust_member(&mut state, member_id, Member::release_task)
    }
}
