//! Rubric-based grading of short academic assignments.
//!
//! The pipeline is deliberately narrow: an already-extracted [`Document`]
//! (plain text plus paragraph records, produced by the ingestion collaborator)
//! is matched against the rubric registered for the chosen assignment, and the
//! result is rendered into a fixed-format feedback report that doubles as the
//! notification payload. Scoring is pure pattern matching over lower-cased
//! text and structural counts; it never fails for a well-typed document.

pub mod domain;
pub mod engine;
pub mod intake;
pub mod report;
pub mod repository;
pub mod router;
pub mod rubric;
pub mod service;
pub(crate) mod signals;
pub(crate) mod text;

#[cfg(test)]
mod tests;

pub use domain::{
    AssignmentId, Document, FileKind, GradingSubmission, Paragraph, StudentIdentity, SubmissionId,
    SubmissionStatus,
};
pub use engine::{EngineConfig, EvaluationEngine};
pub use intake::{IntakeGuard, IntakeViolation};
pub use report::{feedback_download, render_feedback, FeedbackDownload};
pub use repository::{
    FeedbackEmail, NotificationPublisher, NotifyError, RepositoryError, SubmissionRecord,
    SubmissionRepository, SubmissionStatusView,
};
pub use router::grading_router;
pub use rubric::catalog::{AssignmentView, CatalogError, RubricCatalog};
pub use rubric::{BreakdownEntry, EvaluationOutcome};
pub use service::{GradingService, GradingServiceError};
pub use signals::HeadingAliases;
