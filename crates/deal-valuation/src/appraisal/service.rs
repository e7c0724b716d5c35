use std::sync::Arc;

use tracing::debug;

use super::domain::{AppraisalRequest, ListingAppraisal, ValuationRequest};
use super::repository::{RepositoryError, RuleRepository};
use crate::scoring::{
    apply_rule_group_weights, compute_composite_score, dollar_per_metric,
    validate_rule_group_weights, AdjustmentMap, ListingMetrics, WeightMap, WeightValidation,
    WeightValidationError,
};
use crate::valuation::{ValuationEngine, ValuationResult};

/// Service composing the repository-backed rules with the valuation and scoring functions.
pub struct AppraisalService<R> {
    repository: Arc<R>,
}

impl<R> AppraisalService<R>
where
    R: RuleRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Value the listing's components against the configured rules.
    pub fn value_listing(
        &self,
        request: &ValuationRequest,
    ) -> Result<ValuationResult, AppraisalError> {
        let engine = self.engine()?;
        Ok(engine.appraise(
            request.listing_price_usd,
            request.condition,
            &request.components,
        ))
    }

    /// Value the listing and score it on its performance metrics.
    ///
    /// Price-per-mark figures are taken against the adjusted price.
    pub fn appraise(&self, request: &AppraisalRequest) -> Result<ListingAppraisal, AppraisalError> {
        let engine = self.engine()?;
        let valuation = engine.appraise(
            request.listing_price_usd,
            request.condition,
            &request.components,
        );

        let composite_score = self.composite_score(&request.metrics, request.weights.as_ref())?;
        let adjusted = valuation.adjusted_price_usd;
        let rule_group_total = match &request.rule_group_adjustments {
            Some(adjustments) => Some(self.apply_rule_groups(adjustments)?),
            None => None,
        };

        debug!(
            listing_price_usd = request.listing_price_usd,
            adjusted_price_usd = adjusted,
            composite_score,
            "listing appraised"
        );

        Ok(ListingAppraisal {
            dollar_per_cpu_mark_multi: dollar_per_metric(adjusted, request.metrics.cpu_mark_multi),
            dollar_per_cpu_mark_single: dollar_per_metric(
                adjusted,
                request.metrics.cpu_mark_single,
            ),
            valuation: valuation.into(),
            composite_score,
            rule_group_total,
        })
    }

    /// Composite score using `weights` when given, otherwise the configured weights.
    pub fn composite_score(
        &self,
        metrics: &ListingMetrics,
        weights: Option<&WeightMap>,
    ) -> Result<f64, AppraisalError> {
        let score = match weights {
            Some(weights) => compute_composite_score(weights, metrics),
            None => compute_composite_score(&self.repository.composite_weights()?, metrics),
        };
        Ok(score)
    }

    pub fn validate_weights(&self, weights: &WeightMap) -> WeightValidation {
        WeightValidation::check(weights)
    }

    /// Combine rule-group adjustments with the configured weights after validating them.
    pub fn apply_rule_groups(&self, adjustments: &AdjustmentMap) -> Result<f64, AppraisalError> {
        let weights = self.repository.rule_group_weights()?;
        validate_rule_group_weights(&weights)?;
        Ok(apply_rule_group_weights(adjustments, &weights))
    }

    fn engine(&self) -> Result<ValuationEngine, AppraisalError> {
        let rules = self.repository.rules()?;
        Ok(ValuationEngine::new(&rules))
    }
}

/// Error raised by the appraisal service.
#[derive(Debug, thiserror::Error)]
pub enum AppraisalError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("rule group weights are misconfigured: {0}")]
    Weights(#[from] WeightValidationError),
}
