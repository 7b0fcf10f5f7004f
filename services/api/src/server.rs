use crate::cli::ServeArgs;
use crate::infra::{build_service, AppState};
use crate::routes::with_scheme_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use yojana::config::AppConfig;
use yojana::error::AppError;
use yojana::schemes::CatalogProvider;
use yojana::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(schemes) = args.schemes.take() {
        config.catalog.schemes_csv = schemes;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let scheme_service = build_service(&config.catalog, &config.translation)?;
    let catalog = scheme_service.catalog().load_catalog()?;

    let app = with_scheme_routes(scheme_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        schemes = catalog.len(),
        cached = config.catalog.cache,
        "scheme eligibility service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
