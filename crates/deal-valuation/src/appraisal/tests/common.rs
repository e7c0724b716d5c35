use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::appraisal::repository::{RepositoryError, RuleRepository, StaticRuleRepository};
use crate::appraisal::{appraisal_router, AppraisalRequest, AppraisalService, ValuationProfile};
use crate::scoring::{ListingMetrics, WeightMap};
use crate::valuation::{
    ComponentMetric, ComponentType, ComponentValuationInput, Condition, ValuationRuleData,
};

pub(super) fn rules() -> Vec<ValuationRuleData> {
    vec![
        ValuationRuleData::new(ComponentType::Ram, ComponentMetric::PerGb, 4.0),
        ValuationRuleData::new(ComponentType::OsLicense, ComponentMetric::Flat, 35.0),
        ValuationRuleData::new(ComponentType::Ssd, ComponentMetric::PerTb, 50.0),
    ]
}

pub(super) fn weights(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

pub(super) fn profile() -> ValuationProfile {
    ValuationProfile {
        rules: rules(),
        composite_weights: weights(&[("cpu_mark_multi", 0.5), ("gpu_score", 0.5)]),
        rule_group_weights: weights(&[("cpu_valuation", 0.6), ("ram_valuation", 0.4)]),
    }
}

pub(super) fn components() -> Vec<ComponentValuationInput> {
    vec![
        ComponentValuationInput::new(ComponentType::Ram, 32.0, "32GB DDR4"),
        ComponentValuationInput::new(ComponentType::OsLicense, 1.0, "Windows 11 Pro"),
    ]
}

pub(super) fn metrics() -> ListingMetrics {
    ListingMetrics {
        cpu_mark_multi: Some(20_110.0),
        cpu_mark_single: Some(2_011.0),
        ..ListingMetrics::default()
    }
}

pub(super) fn appraisal_request() -> AppraisalRequest {
    AppraisalRequest {
        listing_price_usd: 500.0,
        condition: Condition::Used,
        components: components(),
        metrics: metrics(),
        rule_group_adjustments: None,
        weights: None,
    }
}

pub(super) fn build_service() -> (
    AppraisalService<StaticRuleRepository>,
    Arc<StaticRuleRepository>,
) {
    let repository = Arc::new(StaticRuleRepository::new(profile()));
    (AppraisalService::new(repository.clone()), repository)
}

pub(super) fn appraisal_router_with_service(
    service: AppraisalService<StaticRuleRepository>,
) -> axum::Router {
    appraisal_router(Arc::new(service))
}

pub(super) struct UnavailableRepository;

impl RuleRepository for UnavailableRepository {
    fn rules(&self) -> Result<Vec<ValuationRuleData>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn composite_weights(&self) -> Result<WeightMap, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn rule_group_weights(&self) -> Result<WeightMap, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
