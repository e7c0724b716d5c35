use tracing::debug;

use super::domain::{
    ComponentValuationInput, Condition, ValuationLine, ValuationResult, ValuationRuleData,
};
use super::rulebook::RuleBook;
use crate::money::round_currency;

/// Stateless engine that prices listing components against a rule book.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    rules: RuleBook,
}

impl ValuationEngine {
    pub fn new(rules: &[ValuationRuleData]) -> Self {
        Self::from_rule_book(RuleBook::from_rules(rules))
    }

    pub fn from_rule_book(rules: RuleBook) -> Self {
        Self { rules }
    }

    pub fn rule_book(&self) -> &RuleBook {
        &self.rules
    }

    /// Deduct the value of each matched component from `listing_price_usd`.
    ///
    /// Components without a rule or with a non-positive quantity are skipped. Each line is
    /// rounded to cents before summing, the difference is rounded again, and the adjusted price
    /// never drops below zero.
    pub fn appraise(
        &self,
        listing_price_usd: f64,
        condition: Condition,
        components: &[ComponentValuationInput],
    ) -> ValuationResult {
        let lines: Vec<ValuationLine> = components
            .iter()
            .filter_map(|component| self.price_component(component, condition))
            .collect();

        let total_deductions: f64 = lines.iter().map(|line| line.deduction_usd).sum();
        let adjusted = round_currency(listing_price_usd - total_deductions);
        let adjusted_price_usd = if adjusted > 0.0 { adjusted } else { 0.0 };

        debug!(
            listing_price_usd,
            adjusted_price_usd,
            lines = lines.len(),
            skipped = components.len() - lines.len(),
            condition = condition.label(),
            "valuation computed"
        );

        ValuationResult {
            listing_price_usd,
            adjusted_price_usd,
            lines,
        }
    }

    fn price_component(
        &self,
        component: &ComponentValuationInput,
        condition: Condition,
    ) -> Option<ValuationLine> {
        let rule = self.rules.get(component.component_type)?;
        if component.quantity.is_nan() || component.quantity <= 0.0 {
            return None;
        }

        let quantity = rule.metric.normalize_quantity(component.quantity);
        let condition_multiplier = rule.multiplier_for(condition);
        let deduction_usd = round_currency(quantity * rule.unit_value_usd * condition_multiplier);

        Some(ValuationLine {
            label: component.label.clone(),
            component_type: component.component_type,
            quantity,
            unit_value: rule.unit_value_usd,
            condition_multiplier,
            deduction_usd,
        })
    }
}

/// Price a listing against `rules` in one call.
pub fn compute_adjusted_price(
    listing_price_usd: f64,
    condition: Condition,
    rules: &[ValuationRuleData],
    components: &[ComponentValuationInput],
) -> ValuationResult {
    ValuationEngine::new(rules).appraise(listing_price_usd, condition, components)
}
