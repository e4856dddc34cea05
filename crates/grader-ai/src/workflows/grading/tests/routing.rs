use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};

use super::common::*;
use crate::workflows::grading::router;
use crate::workflows::grading::service::GradingService;

#[tokio::test]
async fn submit_handler_accepts_a_graded_submission() {
    let service = Arc::new(grading_service(
        MemoryRepository::default(),
        MemoryNotifier::default(),
    ));

    let response = router::submit_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        axum::Json(submission("practico-1", outline_full_marks_document())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn submit_handler_rejects_intake_violations_as_unprocessable() {
    let service = Arc::new(grading_service(
        MemoryRepository::default(),
        MemoryNotifier::default(),
    ));

    let mut bad = submission("practico-1", outline_full_marks_document());
    bad.student.full_name = String::new();

    let response = router::submit_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        axum::Json(bad),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_surfaces_repository_conflicts() {
    let service = Arc::new(GradingService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryNotifier::default()),
        evaluation_engine(),
        None,
    ));

    let response = router::submit_handler::<ConflictRepository, MemoryNotifier>(
        State(service),
        axum::Json(submission("practico-1", outline_full_marks_document())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn status_handler_returns_not_found_for_unknown_submissions() {
    let service = Arc::new(grading_service(
        MemoryRepository::default(),
        MemoryNotifier::default(),
    ));

    let response = router::status_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        Path("sub-999999".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn report_handler_serves_a_plain_text_attachment() {
    let service = Arc::new(grading_service(
        MemoryRepository::default(),
        MemoryNotifier::default(),
    ));
    let record = service
        .submit(submission("practico-1", outline_full_marks_document()))
        .expect("submission grades");

    let response = router::report_handler::<MemoryRepository, MemoryNotifier>(
        State(service),
        Path(record.submission_id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type set")
        .to_str()
        .expect("ascii header");
    assert!(content_type.starts_with("text/plain"));
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .expect("attachment header set")
        .to_str()
        .expect("ascii header");
    assert!(disposition.contains("Devolucion_"));
}

#[tokio::test]
async fn assignments_handler_lists_the_catalog() {
    let service = Arc::new(grading_service(
        MemoryRepository::default(),
        MemoryNotifier::default(),
    ));

    let response =
        router::assignments_handler::<MemoryRepository, MemoryNotifier>(State(service)).await;

    assert_eq!(response.status(), StatusCode::OK);
}
