use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionStore};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use prakriti::config::AppConfig;
use prakriti::error::AppError;
use prakriti::telemetry;
use prakriti::workflows::assessment::{AssessmentService, QuestionBank};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let bank = Arc::new(QuestionBank::standard());
    let store = Arc::new(InMemorySessionStore::with_ttl(config.sessions.ttl));
    let assessment_service = Arc::new(AssessmentService::new(store, bank.clone()));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        questions = bank.len(),
        session_ttl_secs = config.sessions.ttl.num_seconds(),
        "prakriti assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
