//! Rubric model: weighted criteria, declarative ladders, and the evaluation
//! outcome handed to the report builder.

pub mod catalog;
pub(crate) mod ladder;
pub(crate) mod scorers;

use serde::{Deserialize, Serialize};

use super::domain::{AssignmentId, Document};
use super::engine::EngineConfig;

/// Points awarded by one criterion scorer plus the explanation shown to the
/// student. Scorers return whole tiers; the criterion clamps to its maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionScore {
    pub points: u16,
    pub explanation: String,
}

impl CriterionScore {
    pub fn new(points: u16, explanation: impl Into<String>) -> Self {
        Self {
            points,
            explanation: explanation.into(),
        }
    }
}

/// Everything a criterion scorer may look at during one evaluation.
/// `text` is the lower-cased copy of the document's plain text.
pub struct ScoringContext<'a> {
    pub document: &'a Document,
    pub text: &'a str,
    pub config: &'a EngineConfig,
}

pub type ScorerFn = fn(&ScoringContext<'_>) -> CriterionScore;

/// One weighted, independently scored aspect of a submission.
pub struct Criterion {
    name: &'static str,
    max_points: u16,
    scorer: ScorerFn,
}

impl Criterion {
    pub const fn new(name: &'static str, max_points: u16, scorer: ScorerFn) -> Self {
        Self {
            name,
            max_points,
            scorer,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn max_points(&self) -> u16 {
        self.max_points
    }

    /// Run the scorer and clamp the award into `0..=max_points`.
    pub fn score(&self, context: &ScoringContext<'_>) -> CriterionScore {
        let mut score = (self.scorer)(context);
        score.points = score.points.min(self.max_points);
        score
    }
}

/// Ordered criteria for one assignment. The declared maximum is the criterion
/// sum by construction, so the capping invariant cannot drift.
pub struct Rubric {
    criteria: Vec<Criterion>,
    max_points: u16,
    summary: &'static str,
}

impl Rubric {
    pub fn new(criteria: Vec<Criterion>, summary: &'static str) -> Self {
        let max_points = criteria.iter().map(Criterion::max_points).sum();
        Self {
            criteria,
            max_points,
            summary,
        }
    }

    pub fn max_points(&self) -> u16 {
        self.max_points
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Score every criterion in declared order. The total is capped at the
    /// rubric maximum.
    pub fn evaluate(&self, context: &ScoringContext<'_>) -> (Vec<BreakdownEntry>, u16) {
        let mut breakdown = Vec::with_capacity(self.criteria.len());
        let mut total: u16 = 0;

        for criterion in &self.criteria {
            let score = criterion.score(context);
            total = total.saturating_add(score.points);
            breakdown.push(BreakdownEntry {
                criterion: criterion.name().to_string(),
                points: score.points,
                max: criterion.max_points(),
                explanation: score.explanation,
            });
        }

        (breakdown, total.min(self.max_points))
    }
}

/// One row of the per-criterion breakdown surfaced to students and notifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub criterion: String,
    pub points: u16,
    pub max: u16,
    pub explanation: String,
}

/// Evaluation output for one submission against one rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub assignment_id: AssignmentId,
    pub assignment_label: String,
    pub score: u16,
    pub rubric_max: u16,
    pub breakdown: Vec<BreakdownEntry>,
    pub summary: String,
}
