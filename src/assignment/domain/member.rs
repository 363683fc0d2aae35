//! Project members as seen by the assignment scorer.

use super::{AssignmentDomainError, MemberId, Proficiency, ProjectId, Skill, SkillName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of open, incomplete tasks currently assigned to a member.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Workload(u32);

impl Workload {
    /// Creates a workload from an open-task count.
    #[must_use]
    pub const fn new(open_tasks: u32) -> Self {
        Self(open_tasks)
    }

    /// Returns the open-task count.
    #[must_use]
    pub const fn open_tasks(self) -> u32 {
        self.0
    }

    /// Returns the workload after taking on one more task.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the workload after one task is completed or handed over.
    #[must_use]
    pub const fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member of a project, carrying skills, workload, and availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    project_id: ProjectId,
    name: String,
    email: Option<String>,
    skills: BTreeMap<SkillName, Proficiency>,
    workload: Workload,
    available: Option<bool>,
}

impl Member {
    /// Creates a member with no skills and no open tasks.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptyMemberName`] when the name is
    /// blank.
    pub fn new(
        project_id: ProjectId,
        name: impl Into<String>,
    ) -> Result<Self, AssignmentDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AssignmentDomainError::EmptyMemberName);
        }
        Ok(Self {
            id: MemberId::new(),
            project_id,
            name: trimmed.to_owned(),
            email: None,
            skills: BTreeMap::new(),
            workload: Workload::default(),
            available: None,
        })
    }

    /// Replaces the generated identifier, e.g. when loading from storage.
    #[must_use]
    pub const fn with_id(mut self, id: MemberId) -> Self {
        self.id = id;
        self
    }

    /// Sets the notification address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Adds or replaces a skill.
    #[must_use]
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.set_skill(skill);
        self
    }

    /// Adds or replaces several skills; later entries win.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        for skill in skills {
            self.set_skill(skill);
        }
        self
    }

    /// Sets the current workload.
    #[must_use]
    pub const fn with_workload(mut self, workload: Workload) -> Self {
        self.workload = workload;
        self
    }

    /// Sets the availability flag.
    #[must_use]
    pub const fn with_availability(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Adds or replaces a skill in place.
    pub fn set_skill(&mut self, skill: Skill) {
        self.skills.insert(skill.name, skill.proficiency);
    }

    /// Removes a skill, returning its previous proficiency.
    pub fn remove_skill(&mut self, name: &SkillName) -> Option<Proficiency> {
        self.skills.remove(name)
    }

    /// Records a newly assigned task.
    pub const fn take_task(&mut self) {
        self.workload = self.workload.incremented();
    }

    /// Records a completed or handed-over task.
    pub const fn release_task(&mut self) {
        self.workload = self.workload.decremented();
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the notification address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the proficiency in `skill`, or `None` when absent.
    #[must_use]
    pub fn proficiency_in(&self, skill: &SkillName) -> Option<Proficiency> {
        self.skills.get(skill).copied()
    }

    /// Iterates over held skills in name order.
    pub fn skills(&self) -> impl Iterator<Item = Skill> + '_ {
        self.skills.iter().map(|(name, proficiency)| Skill {
            name: name.clone(),
            proficiency: *proficiency,
        })
    }

    /// Returns the current workload.
    #[must_use]
    pub const fn workload(&self) -> Workload {
        self.workload
    }

    /// Returns the raw availability flag.
    #[must_use]
    pub const fn availability(&self) -> Option<bool> {
        self.available
    }

    /// Returns whether the member may receive new assignments.
    ///
    /// Members without an availability flag are treated as available.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(true)
    }
}
