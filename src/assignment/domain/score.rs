//! Score values, per-candidate breakdowns, and assignment decisions.

use super::{MemberId, Workload};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suitability score on a 0 to 100 scale, held in hundredths of a point.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    /// Highest possible score, in hundredths.
    pub const MAX_HUNDREDTHS: u32 = 10_000;

    /// Creates a score from hundredths of a point, clamped to `0..=10_000`.
    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        if hundredths > Self::MAX_HUNDREDTHS {
            Self(Self::MAX_HUNDREDTHS)
        } else {
            Self(hundredths)
        }
    }

    /// Returns the score in hundredths of a point.
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Returns the whole-point part of the score (0 to 100).
    #[must_use]
    pub const fn whole_points(self) -> u32 {
        self.0.div_euclid(100)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole_points(), self.0.rem_euclid(100))
    }
}

/// Coarse workload band used in rationales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadBand {
    /// At most one open task.
    Low,
    /// Two to four open tasks.
    Moderate,
    /// Five or more open tasks.
    High,
}

impl WorkloadBand {
    /// Classifies a workload.
    #[must_use]
    pub const fn of(workload: Workload) -> Self {
        match workload.open_tasks() {
            0..=1 => Self::Low,
            2..=4 => Self::Moderate,
            _ => Self::High,
        }
    }

    /// Returns the rationale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// Coarse complexity-fit band used in rationales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBand {
    /// Fit of 75% or more.
    Good,
    /// Fit of 50% to 74%.
    Fair,
    /// Fit below 50%.
    Poor,
}

impl FitBand {
    /// Classifies a complexity-fit percentage.
    #[must_use]
    pub const fn of(fit_percent: u8) -> Self {
        match fit_percent {
            75.. => Self::Good,
            50..=74 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Returns the rationale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// The three scoring terms and the combined score for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Candidate the breakdown belongs to.
    pub member_id: MemberId,
    /// Candidate workload at scoring time.
    pub workload: Workload,
    /// Skill-match term, 0 to 100 percent.
    pub skill_match: u8,
    /// Remaining-capacity term, 0 to 100 percent.
    pub workload_capacity: u8,
    /// Complexity-fit term, 0 to 100 percent.
    pub complexity_fit: u8,
    /// Weighted combination of the three terms.
    pub score: Score,
}

impl ScoreBreakdown {
    /// Returns a short human-readable explanation of the score.
    #[must_use]
    pub fn rationale(&self) -> String {
        format!(
            "skill match {}%, workload {}, complexity fit {}",
            self.skill_match,
            WorkloadBand::of(self.workload).as_str(),
            FitBand::of(self.complexity_fit).as_str(),
        )
    }
}

/// Outcome of scoring a candidate pool: the chosen member and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDecision {
    member_id: MemberId,
    score: Score,
    rationale: String,
    breakdown: ScoreBreakdown,
}

impl AssignmentDecision {
    /// Builds a decision from the winning candidate's breakdown.
    #[must_use]
    pub fn from_breakdown(breakdown: ScoreBreakdown) -> Self {
        Self {
            member_id: breakdown.member_id,
            score: breakdown.score,
            rationale: breakdown.rationale(),
            breakdown,
        }
    }

    /// Returns the selected member.
    #[must_use]
    pub const fn member_id(&self) -> MemberId {
        self.member_id
    }

    /// Returns the winning score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the rationale string.
    #[must_use]
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    /// Returns the winner's term breakdown.
    #[must_use]
    pub const fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }
}
