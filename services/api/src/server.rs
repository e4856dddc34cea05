use crate::cli::ServeArgs;
use crate::infra::{self, AppState, InMemorySubmissionRepository, MailAdapter};
use crate::routes::with_grading_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use grader_ai::config::AppConfig;
use grader_ai::error::AppError;
use grader_ai::telemetry;
use grader_ai::workflows::grading::GradingService;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = infra::build_engine(&config)?;
    let repository = Arc::new(InMemorySubmissionRepository::default());
    let notifier = Arc::new(MailAdapter::from_config(&config));
    let faculty_copy = config.smtp.as_ref().map(|smtp| smtp.faculty_copy.clone());
    let grading_service = Arc::new(GradingService::new(
        repository,
        notifier,
        engine,
        faculty_copy,
    ));

    let app = with_grading_routes(grading_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "coursework grading service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
