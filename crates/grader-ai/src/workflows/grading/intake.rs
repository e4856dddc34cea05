//! Pre-flight validation of the identity fields that travel with a
//! submission. Document quality is deliberately not validated here: empty or
//! degraded documents still grade (as "no evidence"), only a missing student
//! identity stops the workflow.

use super::domain::GradingSubmission;

/// Validation errors raised before a submission reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("student name must not be empty")]
    MissingStudentName,
    #[error("student e-mail address '{0}' is not plausible")]
    MalformedEmail(String),
}

/// Guard applied by the service to every inbound submission.
#[derive(Debug, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn validate(&self, submission: &GradingSubmission) -> Result<(), IntakeViolation> {
        if submission.student.full_name.trim().is_empty() {
            return Err(IntakeViolation::MissingStudentName);
        }

        let email = submission.student.email.trim();
        let plausible = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !plausible {
            return Err(IntakeViolation::MalformedEmail(email.to_string()));
        }

        Ok(())
    }
}
