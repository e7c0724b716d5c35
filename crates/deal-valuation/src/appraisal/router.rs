use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AppraisalRequest, ValuationRequest, ValuationView};
use super::repository::RuleRepository;
use super::service::{AppraisalError, AppraisalService};
use crate::scoring::{AdjustmentMap, ListingMetrics, WeightMap};

#[derive(Debug, Deserialize)]
pub(crate) struct CompositeScoreRequest {
    #[serde(default)]
    pub(crate) metrics: ListingMetrics,
    #[serde(default)]
    pub(crate) weights: Option<WeightMap>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeightsRequest {
    #[serde(default)]
    pub(crate) weights: WeightMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RuleGroupRequest {
    #[serde(default)]
    pub(crate) adjustments: AdjustmentMap,
}

/// Router builder exposing HTTP endpoints for valuation and scoring.
pub fn appraisal_router<R>(service: Arc<AppraisalService<R>>) -> Router
where
    R: RuleRepository + 'static,
{
    Router::new()
        .route("/api/v1/valuations", post(valuation_handler::<R>))
        .route("/api/v1/appraisals", post(appraisal_handler::<R>))
        .route("/api/v1/scores/composite", post(composite_score_handler::<R>))
        .route(
            "/api/v1/rule-groups/validate",
            post(validate_weights_handler::<R>),
        )
        .route("/api/v1/rule-groups/apply", post(apply_rule_groups_handler::<R>))
        .with_state(service)
}

pub(crate) async fn valuation_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(request): axum::Json<ValuationRequest>,
) -> Response
where
    R: RuleRepository + 'static,
{
    match service.value_listing(&request) {
        Ok(result) => (StatusCode::OK, axum::Json(ValuationView::from(result))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn appraisal_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(request): axum::Json<AppraisalRequest>,
) -> Response
where
    R: RuleRepository + 'static,
{
    match service.appraise(&request) {
        Ok(appraisal) => (StatusCode::OK, axum::Json(appraisal)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn composite_score_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(request): axum::Json<CompositeScoreRequest>,
) -> Response
where
    R: RuleRepository + 'static,
{
    match service.composite_score(&request.metrics, request.weights.as_ref()) {
        Ok(score) => (StatusCode::OK, axum::Json(json!({ "score": score }))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn validate_weights_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(request): axum::Json<WeightsRequest>,
) -> Response
where
    R: RuleRepository + 'static,
{
    let validation = service.validate_weights(&request.weights);
    (StatusCode::OK, axum::Json(validation)).into_response()
}

pub(crate) async fn apply_rule_groups_handler<R>(
    State(service): State<Arc<AppraisalService<R>>>,
    axum::Json(request): axum::Json<RuleGroupRequest>,
) -> Response
where
    R: RuleRepository + 'static,
{
    match service.apply_rule_groups(&request.adjustments) {
        Ok(total) => (StatusCode::OK, axum::Json(json!({ "total": total }))).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AppraisalError) -> Response {
    let status = match err {
        AppraisalError::Weights(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppraisalError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
