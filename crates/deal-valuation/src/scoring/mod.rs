//! Composite performance scoring and rule-group weighting.

mod composite;
mod metrics;
mod weights;

pub use composite::{compute_composite_score, dollar_per_metric};
pub use metrics::{ListingMetrics, METRIC_NAMES};
pub use weights::{
    apply_rule_group_weights, validate_rule_group_weights, AdjustmentMap, WeightMap,
    WeightValidation, WeightValidationError, WEIGHT_SUM_TOLERANCE,
};
