use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{GradingSubmission, SubmissionId};
use super::report::feedback_download;
use super::repository::{NotificationPublisher, RepositoryError, SubmissionRepository};
use super::service::{GradingService, GradingServiceError};

// Header values must stay visible ASCII; accented student names are common.
fn ascii_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Router builder exposing HTTP endpoints for grading and feedback retrieval.
pub fn grading_router<R, N>(service: Arc<GradingService<R, N>>) -> Router
where
    R: SubmissionRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/grading/submissions", post(submit_handler::<R, N>))
        .route(
            "/api/v1/grading/submissions/:submission_id",
            get(status_handler::<R, N>),
        )
        .route(
            "/api/v1/grading/submissions/:submission_id/report",
            get(report_handler::<R, N>),
        )
        .route(
            "/api/v1/grading/assignments",
            get(assignments_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<GradingService<R, N>>>,
    axum::Json(submission): axum::Json<GradingSubmission>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(GradingServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(GradingServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "submission already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<GradingService<R, N>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(GradingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "submission_id": id.0,
                "error": "submission not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<R, N>(
    State(service): State<Arc<GradingService<R, N>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => {
            let Some(report) = record.rendered_report.as_deref() else {
                let payload = json!({
                    "error": "report not yet rendered",
                });
                return (StatusCode::CONFLICT, axum::Json(payload)).into_response();
            };

            let download = feedback_download(&record.student.full_name, report);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, download.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!(
                            "attachment; filename=\"{}\"",
                            ascii_file_name(&download.file_name)
                        ),
                    ),
                ],
                download.body,
            )
                .into_response()
        }
        Err(GradingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "submission_id": id.0,
                "error": "submission not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn assignments_handler<R, N>(
    State(service): State<Arc<GradingService<R, N>>>,
) -> Response
where
    R: SubmissionRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let assignments = service.assignments();
    (StatusCode::OK, axum::Json(assignments)).into_response()
}
