use crate::cli::ServeArgs;
use crate::infra::{build_generators, AppState};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lumethis::config::AppConfig;
use lumethis::error::AppError;
use lumethis::identity::Roster;
use lumethis::telemetry;
use lumethis::workflows::training::InMemorySubmissionRepository;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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
        roster: Arc::new(Roster::standard()),
    };

    let repository = Arc::new(InMemorySubmissionRepository::seeded());
    if !config.genai.is_enabled() {
        warn!("no completion API key configured; generators will return empty results");
    }
    let generators = build_generators(&config.genai)?;

    let app = with_dashboard_routes(repository, generators, &app_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, model = %config.genai.model, "lumethis dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
