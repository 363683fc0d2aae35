//! Scoring weight configuration.

use super::AssignmentDomainError;
use serde::{Deserialize, Serialize};

/// Relative weights of the three scoring terms, in percent.
///
/// Weights always sum to 100 and satisfy `4 * skill >= 5 * complexity`, so
/// raising a member's proficiency can never lower their score: one extra level
/// adds `20 * skill` hundredths through the skill term and removes at most
/// `25 * complexity` through the complexity-fit term.
///
/// # Examples
///
/// ```
/// use taskmatch::assignment::domain::ScoringWeights;
///
/// let weights = ScoringWeights::default();
/// assert_eq!(weights.skill(), 50);
///
/// assert!(ScoringWeights::new(20, 40, 40).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScoringWeights")]
pub struct ScoringWeights {
    skill: u16,
    workload: u16,
    complexity: u16,
}

#[derive(Deserialize)]
struct RawScoringWeights {
    skill: u16,
    workload: u16,
    complexity: u16,
}

impl TryFrom<RawScoringWeights> for ScoringWeights {
    type Error = AssignmentDomainError;

    fn try_from(raw: RawScoringWeights) -> Result<Self, Self::Error> {
        Self::new(raw.skill, raw.workload, raw.complexity)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 50,
            workload: 30,
            complexity: 20,
        }
    }
}

impl ScoringWeights {
    /// Total every valid weight set adds up to.
    pub const TOTAL: u16 = 100;

    /// Creates validated weights.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::InvalidWeights`] when the weights do
    /// not sum to 100 or the complexity weight could outweigh skill gains.
    pub fn new(skill: u16, workload: u16, complexity: u16) -> Result<Self, AssignmentDomainError> {
        let total = u32::from(skill) + u32::from(workload) + u32::from(complexity);
        if total != u32::from(Self::TOTAL) {
            return Err(AssignmentDomainError::InvalidWeights(format!(
                "weights must sum to {}, got {total}",
                Self::TOTAL
            )));
        }
        if u32::from(skill) * 4 < u32::from(complexity) * 5 {
            return Err(AssignmentDomainError::InvalidWeights(format!(
                "complexity weight {complexity} too large for skill weight {skill}"
            )));
        }
        Ok(Self {
            skill,
            workload,
            complexity,
        })
    }

    /// Weights that favour raw expertise over spreading load.
    #[must_use]
    pub const fn skill_first() -> Self {
        Self {
            skill: 60,
            workload: 25,
            complexity: 15,
        }
    }

    /// Weights that give workload as much say as skill.
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            skill: 40,
            workload: 40,
            complexity: 20,
        }
    }

    /// Returns the skill-match weight.
    #[must_use]
    pub const fn skill(self) -> u16 {
        self.skill
    }

    /// Returns the workload weight.
    #[must_use]
    pub const fn workload(self) -> u16 {
        self.workload
    }

    /// Returns the complexity-fit weight.
    #[must_use]
    pub const fn complexity(self) -> u16 {
        self.complexity
    }
}
