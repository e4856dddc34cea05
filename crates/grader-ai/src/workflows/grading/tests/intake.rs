use super::common::*;
use crate::workflows::grading::intake::{IntakeGuard, IntakeViolation};

#[test]
fn accepts_a_complete_identity() {
    let guard = IntakeGuard;
    let submission = submission("practico-1", outline_full_marks_document());
    assert!(guard.validate(&submission).is_ok());
}

#[test]
fn rejects_an_empty_student_name() {
    let guard = IntakeGuard;
    let mut submission = submission("practico-1", outline_full_marks_document());
    submission.student.full_name = "   ".to_string();

    match guard.validate(&submission) {
        Err(IntakeViolation::MissingStudentName) => {}
        other => panic!("expected missing name violation, got {other:?}"),
    }
}

#[test]
fn rejects_implausible_email_addresses() {
    let guard = IntakeGuard;
    for address in ["", "sin-arroba", "@uccuyo.edu.ar", "ana@"] {
        let mut submission = submission("practico-1", outline_full_marks_document());
        submission.student.email = address.to_string();

        match guard.validate(&submission) {
            Err(IntakeViolation::MalformedEmail(reported)) => {
                assert_eq!(reported, address.trim());
            }
            other => panic!("expected malformed email for '{address}', got {other:?}"),
        }
    }
}
