//! Skill names, proficiency levels, and task-type to skill mapping.

use super::AssignmentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized skill name (trimmed, lowercase, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkillName(String);

impl SkillName {
    /// Creates a normalized skill name.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptySkillName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, AssignmentDomainError> {
        let normalized = value.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AssignmentDomainError::EmptySkillName);
        }
        Ok(Self(normalized))
    }

    /// Derives the canonical skill a task of the given type requires.
    ///
    /// Known category aliases collapse onto one canonical skill; any other
    /// task type is treated as a skill tag of its own.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::EmptySkillName`] when the task type
    /// is blank.
    pub fn for_task_type(task_type: &str) -> Result<Self, AssignmentDomainError> {
        let tag = Self::new(task_type)?;
        let canonical = match tag.as_str() {
            "development" | "dev" | "coding" | "programming" | "backend" | "frontend" => {
                "development"
            }
            "design" | "ui" | "ux" => "design",
            "testing" | "qa" | "test" => "testing",
            "documentation" | "docs" | "writing" => "documentation",
            "devops" | "deployment" | "infrastructure" | "ops" => "devops",
            "research" | "analysis" => "research",
            _ => return Ok(tag),
        };
        Ok(Self(canonical.to_owned()))
    }

    /// Returns the skill name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SkillName {
    type Error = AssignmentDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkillName> for String {
    fn from(value: SkillName) -> Self {
        value.0
    }
}

impl AsRef<str> for SkillName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Proficiency level in a skill, from 1 (novice) to 5 (expert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Proficiency(u8);

impl Proficiency {
    /// Lowest valid proficiency level.
    pub const MIN: u8 = 1;
    /// Highest valid proficiency level.
    pub const MAX: u8 = 5;

    /// Creates a validated proficiency level.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidProficiency`] when the value is
    /// outside `1..=5`.
    pub const fn new(level: u8) -> Result<Self, AssignmentDomainError> {
        if level < Self::MIN || level > Self::MAX {
            return Err(AssignmentDomainError::InvalidProficiency(level));
        }
        Ok(Self(level))
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = AssignmentDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Proficiency> for u8 {
    fn from(value: Proficiency) -> Self {
        value.0
    }
}

/// A skill held by a member together with its proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Normalized skill name.
    pub name: SkillName,
    /// Proficiency in the skill.
    pub proficiency: Proficiency,
}

impl Skill {
    /// Creates a skill from raw name and level values.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError`] when the name is blank or the level
    /// is out of range.
    pub fn new(name: impl AsRef<str>, level: u8) -> Result<Self, AssignmentDomainError> {
        Ok(Self {
            name: SkillName::new(name)?,
            proficiency: Proficiency::new(level)?,
        })
    }
}
