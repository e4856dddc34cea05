use std::collections::HashMap;
use std::fs::File;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

use grader_ai::config::AppConfig;
use grader_ai::error::AppError;
use grader_ai::workflows::grading::{
    EngineConfig, EvaluationEngine, FeedbackEmail, NotificationPublisher, NotifyError,
    RepositoryError, RubricCatalog, SubmissionId, SubmissionRecord, SubmissionRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the evaluation engine from configuration: the built-in catalog plus
/// whatever extension sources the deployment provides.
pub(crate) fn build_engine(config: &AppConfig) -> Result<EvaluationEngine, AppError> {
    let mut catalog = RubricCatalog::builtin();

    if let Some(json) = &config.catalog.extra_json {
        let added = catalog.extend_from_json(json)?;
        info!(added, "assignment catalog extended from JSON");
    }
    if let Some(path) = &config.catalog.csv_path {
        let file = File::open(path)?;
        let added = catalog.extend_from_csv(file)?;
        info!(added, path = %path.display(), "assignment catalog extended from CSV");
    }

    Ok(EvaluationEngine::new(catalog, EngineConfig::default()))
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<HashMap<SubmissionId, SubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
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

/// Delivery adapter chosen from configuration. The real SMTP transport is an
/// external collaborator; until it is wired in, configured deployments log the
/// hand-off and unconfigured ones surface `Disabled` so records stay `graded`.
pub(crate) enum MailAdapter {
    Log { sender: String },
    Disabled,
}

impl MailAdapter {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        match &config.smtp {
            Some(smtp) => Self::Log {
                sender: smtp.sender.clone(),
            },
            None => Self::Disabled,
        }
    }
}

impl NotificationPublisher for MailAdapter {
    fn publish(&self, email: FeedbackEmail) -> Result<(), NotifyError> {
        match self {
            MailAdapter::Log { sender } => {
                info!(from = %sender, to = %email.to, subject = %email.subject, "feedback mail dispatched");
                Ok(())
            }
            MailAdapter::Disabled => Err(NotifyError::Disabled),
        }
    }
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("'{value}' is not a YYYY-MM-DD date"))
}
