use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weight per metric or rule-group name. Iterates in key order, which keeps validation
/// messages stable.
pub type WeightMap = BTreeMap<String, f64>;

/// Adjustment amount per rule-group name.
pub type AdjustmentMap = BTreeMap<String, f64>;

/// Allowed distance between the weight total and 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Combine rule-group adjustments using their configured weights.
///
/// With no weights configured the adjustments are simply summed. Otherwise each adjustment is
/// scaled by its group weight (0.0 when unconfigured). The result is not renormalised.
pub fn apply_rule_group_weights(adjustments: &AdjustmentMap, weights: &WeightMap) -> f64 {
    if weights.is_empty() {
        return adjustments.values().sum();
    }

    adjustments
        .iter()
        .map(|(group, adjustment)| adjustment * weights.get(group).copied().unwrap_or(0.0))
        .sum()
}

/// Reason a rule-group weight configuration was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightValidationError {
    #[error("Weight for '{group}' must be non-negative (got {weight:?})")]
    Negative { group: String, weight: f64 },
    #[error("Weight for '{group}' must be <= 1.0 (got {weight:?})")]
    AboveOne { group: String, weight: f64 },
    #[error("Weights must sum to 1.0 (got {total:.3})")]
    BadTotal { total: f64 },
}

/// Check that rule-group weights are usable by [`apply_rule_group_weights`].
///
/// An empty mapping is valid. Otherwise every weight must be non-negative (NaN counts as
/// negative), then every weight must be at most 1.0, then the total must be within
/// [`WEIGHT_SUM_TOLERANCE`] of 1.0. The first failing entry in key order is reported.
pub fn validate_rule_group_weights(weights: &WeightMap) -> Result<(), WeightValidationError> {
    if weights.is_empty() {
        return Ok(());
    }

    if let Some((group, weight)) = weights
        .iter()
        .find(|(_, weight)| weight.is_nan() || **weight < 0.0)
    {
        return Err(WeightValidationError::Negative {
            group: group.clone(),
            weight: *weight,
        });
    }

    if let Some((group, weight)) = weights.iter().find(|(_, weight)| **weight > 1.0) {
        return Err(WeightValidationError::AboveOne {
            group: group.clone(),
            weight: *weight,
        });
    }

    let total: f64 = weights.values().sum();
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(WeightValidationError::BadTotal { total });
    }

    Ok(())
}

/// Flag-and-message view of a validation outcome, as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightValidation {
    pub valid: bool,
    pub error: Option<String>,
}

impl WeightValidation {
    pub fn check(weights: &WeightMap) -> Self {
        validate_rule_group_weights(weights).into()
    }
}

impl From<Result<(), WeightValidationError>> for WeightValidation {
    fn from(value: Result<(), WeightValidationError>) -> Self {
        match value {
            Ok(()) => Self {
                valid: true,
                error: None,
            },
            Err(err) => Self {
                valid: false,
                error: Some(err.to_string()),
            },
        }
    }
}
