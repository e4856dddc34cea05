use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{AssignmentId, StudentIdentity, SubmissionId, SubmissionStatus};
use super::rubric::EvaluationOutcome;

/// Stored record for one graded submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub submission_id: SubmissionId,
    pub student: StudentIdentity,
    pub assignment_id: AssignmentId,
    pub received_on: NaiveDate,
    pub status: SubmissionStatus,
    pub outcome: Option<EvaluationOutcome>,
    pub rendered_report: Option<String>,
}

impl SubmissionRecord {
    pub fn score_summary(&self) -> String {
        match &self.outcome {
            Some(outcome) => outcome.summary.clone(),
            None => "pendiente de corrección".to_string(),
        }
    }

    pub fn status_view(&self) -> SubmissionStatusView {
        SubmissionStatusView {
            submission_id: self.submission_id.clone(),
            status: self.status.label(),
            score: self.outcome.as_ref().map(|outcome| outcome.score),
            rubric_max: self.outcome.as_ref().map(|outcome| outcome.rubric_max),
            summary: self.score_summary(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait SubmissionRepository: Send + Sync {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError>;
    fn update(&self, record: SubmissionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound mail payload: the rendered report plus addressing. The transport
/// itself (SMTP or otherwise) lives behind this trait in a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Trait describing outbound feedback delivery hooks.
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, email: FeedbackEmail) -> Result<(), NotifyError>;
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
    #[error("notification channel disabled")]
    Disabled,
}

/// Sanitized representation of a submission's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionStatusView {
    pub submission_id: SubmissionId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubric_max: Option<u16>,
    pub summary: String,
}
