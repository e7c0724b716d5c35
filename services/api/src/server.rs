use crate::cli::ServeArgs;
use crate::infra::{load_profile, AppState};
use crate::routes::with_appraisal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use deal_valuation::appraisal::{AppraisalService, StaticRuleRepository};
use deal_valuation::config::AppConfig;
use deal_valuation::error::AppError;
use deal_valuation::telemetry;
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

    let profile = load_profile(args.profile.take(), &config.valuation)?;
    info!(
        rules = profile.rules.len(),
        composite_weights = profile.composite_weights.len(),
        rule_group_weights = profile.rule_group_weights.len(),
        "valuation profile loaded"
    );

    let repository = Arc::new(StaticRuleRepository::new(profile));
    let appraisal_service = Arc::new(AppraisalService::new(repository));

    let app = with_appraisal_routes(appraisal_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "deal valuation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
