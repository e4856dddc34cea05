use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::warn;

use super::domain::{GradingSubmission, SubmissionId, SubmissionStatus};
use super::engine::EvaluationEngine;
use super::intake::{IntakeGuard, IntakeViolation};
use super::report;
use super::repository::{
    FeedbackEmail, NotificationPublisher, RepositoryError, SubmissionRecord, SubmissionRepository,
};
use super::rubric::catalog::AssignmentView;

/// Service composing the intake guard, evaluation engine, repository, and
/// notification seam into the grade-and-deliver workflow.
pub struct GradingService<R, N> {
    guard: IntakeGuard,
    repository: Arc<R>,
    notifier: Arc<N>,
    engine: Arc<EvaluationEngine>,
    faculty_copy: Option<String>,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let id = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub-{id:06}"))
}

impl<R, N> GradingService<R, N>
where
    R: SubmissionRepository + 'static,
    N: NotificationPublisher + 'static,
{
    /// `faculty_copy` is the address that always receives a copy of every
    /// feedback mail, with the student's address prepended to the body.
    pub fn new(
        repository: Arc<R>,
        notifier: Arc<N>,
        engine: EvaluationEngine,
        faculty_copy: Option<String>,
    ) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            notifier,
            engine: Arc::new(engine),
            faculty_copy,
        }
    }

    pub fn engine(&self) -> &EvaluationEngine {
        self.engine.as_ref()
    }

    /// The assignment enumeration offered to the presentation layer.
    pub fn assignments(&self) -> Vec<AssignmentView> {
        self.engine.catalog().assignments()
    }

    /// Grade a submission end to end: validate identity, evaluate, render,
    /// store, and hand the report to the notifier. Notification failures are
    /// logged and never fail the grading itself.
    pub fn submit(
        &self,
        submission: GradingSubmission,
    ) -> Result<SubmissionRecord, GradingServiceError> {
        self.guard.validate(&submission)?;

        let outcome = self
            .engine
            .evaluate(&submission.assignment, &submission.document);
        let rendered_report = report::render_feedback(&submission.student.full_name, &outcome);

        let record = SubmissionRecord {
            submission_id: next_submission_id(),
            student: submission.student,
            assignment_id: submission.assignment,
            received_on: submission.received_on,
            status: SubmissionStatus::Graded,
            outcome: Some(outcome),
            rendered_report: Some(rendered_report),
        };

        let mut record = self.repository.insert(record)?;

        if self.notify(&record) {
            record.status = SubmissionStatus::Notified;
            self.repository.update(record.clone())?;
        }

        Ok(record)
    }

    /// Fetch a submission and current status for API responses.
    pub fn get(&self, submission_id: &SubmissionId) -> Result<SubmissionRecord, GradingServiceError> {
        let record = self
            .repository
            .fetch(submission_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    fn notify(&self, record: &SubmissionRecord) -> bool {
        let Some(outcome) = &record.outcome else {
            return false;
        };
        let Some(body) = &record.rendered_report else {
            return false;
        };

        let subject = format!(
            "Resultado — {} · {}",
            outcome.assignment_label, record.student.full_name
        );

        let student_mail = FeedbackEmail {
            to: record.student.email.clone(),
            subject: subject.clone(),
            body: body.clone(),
        };
        if let Err(error) = self.notifier.publish(student_mail) {
            warn!(%error, submission_id = %record.submission_id.0, "feedback mail not delivered");
            return false;
        }

        if let Some(faculty) = &self.faculty_copy {
            // The faculty copy always leads with the student's address so the
            // chair can reply directly.
            let faculty_mail = FeedbackEmail {
                to: faculty.clone(),
                subject,
                body: format!("Correo del alumno: {}\n\n{}", record.student.email, body),
            };
            if let Err(error) = self.notifier.publish(faculty_mail) {
                warn!(%error, submission_id = %record.submission_id.0, "faculty copy not delivered");
            }
        }

        true
    }
}

/// Error raised by the grading service.
#[derive(Debug, thiserror::Error)]
pub enum GradingServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
