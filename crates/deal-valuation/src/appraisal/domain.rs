use serde::{Deserialize, Serialize};

use crate::scoring::{AdjustmentMap, ListingMetrics, WeightMap};
use crate::valuation::{ComponentValuationInput, Condition, ValuationResult};

/// Listing price, condition, and attached components to value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub listing_price_usd: f64,
    pub condition: Condition,
    #[serde(default)]
    pub components: Vec<ComponentValuationInput>,
}

/// Full appraisal input: the valuation request plus scoring signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalRequest {
    pub listing_price_usd: f64,
    pub condition: Condition,
    #[serde(default)]
    pub components: Vec<ComponentValuationInput>,
    #[serde(default)]
    pub metrics: ListingMetrics,
    /// Per rule-group adjustments to combine with the configured group weights.
    #[serde(default)]
    pub rule_group_adjustments: Option<AdjustmentMap>,
    /// Composite weights overriding the configured ones for this request.
    #[serde(default)]
    pub weights: Option<WeightMap>,
}

/// Valuation result as returned to API clients, with the deduction total spelled out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationView {
    #[serde(flatten)]
    pub result: ValuationResult,
    pub total_deductions_usd: f64,
}

impl From<ValuationResult> for ValuationView {
    fn from(result: ValuationResult) -> Self {
        let total_deductions_usd = result.total_deductions();
        Self {
            result,
            total_deductions_usd,
        }
    }
}

/// Combined valuation and scoring output for one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingAppraisal {
    pub valuation: ValuationView,
    pub composite_score: f64,
    pub dollar_per_cpu_mark_multi: Option<f64>,
    pub dollar_per_cpu_mark_single: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_group_total: Option<f64>,
}

impl ListingAppraisal {
    pub fn adjusted_price_usd(&self) -> f64 {
        self.valuation.result.adjusted_price_usd
    }
}
