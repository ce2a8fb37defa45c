use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryOutlineRepository};
use crate::routes::with_drafting_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use legaldoc::config::AppConfig;
use legaldoc::drafting::DraftingService;
use legaldoc::error::AppError;
use legaldoc::telemetry;
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

    let repository = Arc::new(InMemoryOutlineRepository::default());
    let drafting_service = Arc::new(DraftingService::new(repository, config.drafting.clone()));

    let app = with_drafting_routes(drafting_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_place = %config.drafting.default_place,
        vat_rate = %config.drafting.vat_rate_percent,
        "legal document drafting service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
