use super::domain::{AssignmentId, Document};
use super::rubric::catalog::RubricCatalog;
use super::rubric::{EvaluationOutcome, ScoringContext};
use super::signals::HeadingAliases;
use super::text;

/// Knobs the host passes in at construction. The engine reads no ambient
/// state; everything that varies by deployment arrives through this value.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub heading_aliases: HeadingAliases,
    /// Inclusive word band for the introduction-plus-theory assignment.
    pub intro_word_range: (usize, usize),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            heading_aliases: HeadingAliases::default(),
            intro_word_range: (400, 600),
        }
    }
}

const UNKNOWN_ASSIGNMENT_SUMMARY: &str =
    "No se encontró una rúbrica para el práctico seleccionado; no se asignó puntaje.";

/// Stateless evaluator dispatching documents to the rubric registered for an
/// assignment. Evaluation is a pure function of its inputs, so concurrent use
/// needs no locking.
pub struct EvaluationEngine {
    catalog: RubricCatalog,
    config: EngineConfig,
}

impl EvaluationEngine {
    pub fn new(catalog: RubricCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn with_defaults() -> Self {
        Self::new(RubricCatalog::builtin(), EngineConfig::default())
    }

    pub fn catalog(&self) -> &RubricCatalog {
        &self.catalog
    }

    /// Score a document against the rubric for `assignment`.
    ///
    /// Unknown identifiers fail open: a zero score with an empty breakdown
    /// and an explanatory summary, never an error. The identifier is in
    /// practice constrained by the enumeration offered upstream.
    pub fn evaluate(&self, assignment: &AssignmentId, document: &Document) -> EvaluationOutcome {
        let Some(entry) = self.catalog.get(assignment) else {
            return EvaluationOutcome {
                assignment_id: assignment.clone(),
                assignment_label: assignment.as_str().to_string(),
                score: 0,
                rubric_max: 0,
                breakdown: Vec::new(),
                summary: UNKNOWN_ASSIGNMENT_SUMMARY.to_string(),
            };
        };

        let normalized = text::normalize(&document.plain_text);
        let context = ScoringContext {
            document,
            text: &normalized,
            config: &self.config,
        };

        let (breakdown, score) = entry.rubric().evaluate(&context);

        EvaluationOutcome {
            assignment_id: assignment.clone(),
            assignment_label: entry.label().to_string(),
            score,
            rubric_max: entry.rubric().max_points(),
            breakdown,
            summary: entry.rubric().summary().to_string(),
        }
    }
}
