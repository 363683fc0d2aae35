//! Pure ranking of project members for a task.
//!
//! Each candidate receives three percentage terms:
//!
//! - **skill match**: proficiency in the task's required skill times 20
//!   (0 when the skill is absent);
//! - **workload capacity**: 100 minus 10 per open task, floored at 0;
//! - **complexity fit**: 100 minus 25 per level of distance between the
//!   member's proficiency and the level the task complexity calls for,
//!   floored at 0.
//!
//! The terms are combined with [`ScoringWeights`] into a score in hundredths
//! of a point. Ties go to the lower workload, then to the earlier candidate.

use super::{
    AssignmentDecision, AssignmentError, Member, Score, ScoreBreakdown, ScoringWeights,
    TaskRequest,
};

const SKILL_PERCENT_PER_LEVEL: u32 = 20;
const WORKLOAD_PENALTY_PER_TASK: u32 = 10;
const FIT_PENALTY_PER_LEVEL: u32 = 25;
const FULL_PERCENT: u32 = 100;

/// Deterministic, side-effect-free assignment scorer.
///
/// # Examples
///
/// ```
/// use taskmatch::assignment::domain::{
///     AssignmentScorer, Member, ProjectId, Skill, TaskRequest,
/// };
///
/// let project = ProjectId::new();
/// let task = TaskRequest::new(project, "Build login form", "development").unwrap();
/// let alice = Member::new(project, "Alice")
///     .unwrap()
///     .with_skill(Skill::new("development", 4).unwrap());
///
/// let decision = AssignmentScorer::default().select(&task, &[alice.clone()]).unwrap();
/// assert_eq!(decision.member_id(), alice.id());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentScorer {
    weights: ScoringWeights,
}

impl AssignmentScorer {
    /// Creates a scorer using the given weights.
    #[must_use]
    pub const fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Returns the weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Scores a single member against a task.
    #[must_use]
    pub fn score(&self, task: &TaskRequest, member: &Member) -> ScoreBreakdown {
        let level = member
            .proficiency_in(task.required_skill())
            .map_or(0, |proficiency| u32::from(proficiency.level()));
        let ideal = u32::from(task.complexity().ideal_proficiency());

        let skill_match = level * SKILL_PERCENT_PER_LEVEL;
        let workload_capacity = FULL_PERCENT.saturating_sub(
            member
                .workload()
                .open_tasks()
                .saturating_mul(WORKLOAD_PENALTY_PER_TASK),
        );
        let complexity_fit =
            FULL_PERCENT.saturating_sub(level.abs_diff(ideal) * FIT_PENALTY_PER_LEVEL);

        let hundredths = u32::from(self.weights.skill()) * skill_match
            + u32::from(self.weights.workload()) * workload_capacity
            + u32::from(self.weights.complexity()) * complexity_fit;

        ScoreBreakdown {
            member_id: member.id(),
            workload: member.workload(),
            skill_match: percent(skill_match),
            workload_capacity: percent(workload_capacity),
            complexity_fit: percent(complexity_fit),
            score: Score::from_hundredths(hundredths),
        }
    }

    /// Scores every eligible candidate and orders them best first.
    ///
    /// Unavailable members are skipped. The order is by descending score,
    /// then ascending workload, then input position.
    #[must_use]
    pub fn rank(&self, task: &TaskRequest, candidates: &[Member]) -> Vec<ScoreBreakdown> {
        let mut ranked: Vec<ScoreBreakdown> = candidates
            .iter()
            .filter(|member| member.is_available())
            .map(|member| self.score(task, member))
            .collect();
        // Stable sort keeps input order among full ties.
        ranked.sort_by(|left, right| {
            right
                .score
                .cmp(&left.score)
                .then_with(|| left.workload.cmp(&right.workload))
        });
        ranked
    }

    /// Selects the best candidate for a task.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::NoCandidates`] when `candidates` is empty
    /// or contains no available member.
    pub fn select(
        &self,
        task: &TaskRequest,
        candidates: &[Member],
    ) -> Result<AssignmentDecision, AssignmentError> {
        self.rank(task, candidates)
            .into_iter()
            .next()
            .map(AssignmentDecision::from_breakdown)
            .ok_or(AssignmentError::NoCandidates)
    }
}

fn percent(value: u32) -> u8 {
    u8::try_from(value.min(FULL_PERCENT)).unwrap_or(u8::MAX)
}
