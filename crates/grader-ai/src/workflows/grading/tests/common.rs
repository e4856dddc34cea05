use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::grading::domain::{
    AssignmentId, Document, GradingSubmission, Paragraph, StudentIdentity, SubmissionId,
};
use crate::workflows::grading::engine::EvaluationEngine;
use crate::workflows::grading::repository::{
    FeedbackEmail, NotificationPublisher, NotifyError, RepositoryError, SubmissionRecord,
    SubmissionRepository,
};
use crate::workflows::grading::service::GradingService;

pub(super) const FACULTY_COPY: &str = "catedra@uccuyo.edu.ar";

pub(super) fn evaluation_engine() -> EvaluationEngine {
    EvaluationEngine::with_defaults()
}

pub(super) fn student() -> StudentIdentity {
    StudentIdentity {
        full_name: "Ana María Pérez".to_string(),
        email: "ana.perez@uccuyo.edu.ar".to_string(),
    }
}

pub(super) fn received_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).expect("valid date")
}

/// Flat text covering every criterion of the introductory rubric.
pub(super) fn outline_full_marks_text() -> &'static str {
    "El tema elegido y el título provisorio se presentan al inicio. \
     El paradigma adoptado es el interpretativo. \
     La pregunta de investigación orienta todo el anteproyecto. \
     El objetivo general se desagrega en objetivos específicos medibles. \
     La hipótesis de trabajo se enuncia al final."
}

pub(super) fn outline_full_marks_document() -> Document {
    Document::flat(outline_full_marks_text())
}

pub(super) fn empty_document() -> Document {
    Document::flat("")
}

/// Structured document with the requested number of headings per level.
pub(super) fn styled_document(level_one: usize, level_two: usize, level_three: usize) -> Document {
    let mut paragraphs = Vec::new();
    for index in 0..level_one {
        paragraphs.push(Paragraph::new(format!("Capítulo {}", index + 1), "Heading 1"));
        paragraphs.push(Paragraph::new("Texto del capítulo.", ""));
    }
    for index in 0..level_two {
        paragraphs.push(Paragraph::new(format!("Sección {}", index + 1), "Título 2"));
        paragraphs.push(Paragraph::new("Texto de la sección.", ""));
    }
    for index in 0..level_three {
        paragraphs.push(Paragraph::new(
            format!("Apartado {}", index + 1),
            "Heading 3",
        ));
        paragraphs.push(Paragraph::new("Texto del apartado.", ""));
    }
    Document::structured(paragraphs)
}

pub(super) fn submission(assignment: &str, document: Document) -> GradingSubmission {
    GradingSubmission {
        student: student(),
        assignment: AssignmentId::new(assignment),
        document,
        received_on: received_on(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<SubmissionId, SubmissionRecord>>>,
}

impl SubmissionRepository for MemoryRepository {
    fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.submission_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.submission_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SubmissionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.submission_id) {
            guard.insert(record.submission_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().take(limit).cloned().collect())
    }
}

/// Repository that rejects every insert, for conflict-path tests.
pub(super) struct ConflictRepository;

impl SubmissionRepository for ConflictRepository {
    fn insert(&self, _record: SubmissionRecord) -> Result<SubmissionRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: SubmissionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<SubmissionRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    pub(super) sent: Arc<Mutex<Vec<FeedbackEmail>>>,
}

impl NotificationPublisher for MemoryNotifier {
    fn publish(&self, email: FeedbackEmail) -> Result<(), NotifyError> {
        self.sent.lock().expect("notifier mutex poisoned").push(email);
        Ok(())
    }
}

/// Notifier standing in for an unconfigured mail collaborator.
pub(super) struct DisabledNotifier;

impl NotificationPublisher for DisabledNotifier {
    fn publish(&self, _email: FeedbackEmail) -> Result<(), NotifyError> {
        Err(NotifyError::Disabled)
    }
}

pub(super) fn grading_service(
    repository: MemoryRepository,
    notifier: MemoryNotifier,
) -> GradingService<MemoryRepository, MemoryNotifier> {
    GradingService::new(
        Arc::new(repository),
        Arc::new(notifier),
        evaluation_engine(),
        Some(FACULTY_COPY.to_string()),
    )
}
