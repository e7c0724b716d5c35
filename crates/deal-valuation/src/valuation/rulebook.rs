use std::collections::HashMap;

use tracing::warn;

use super::domain::{ComponentType, ValuationRuleData};

/// Lookup from component type to the rule that prices it.
///
/// When several rules share a component type the last one in the input wins. Every overwritten
/// type is recorded so callers can flag misconfigured rule sets; duplicates never fail a
/// valuation.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: HashMap<ComponentType, ValuationRuleData>,
    duplicates: Vec<ComponentType>,
}

impl RuleBook {
    pub fn from_rules(rules: &[ValuationRuleData]) -> Self {
        let mut book = Self::default();
        for rule in rules {
            book.insert(rule.clone());
        }
        book
    }

    /// Insert `rule`, replacing any rule already registered for its component type.
    pub fn insert(&mut self, rule: ValuationRuleData) {
        let component_type = rule.component_type;
        if let Some(previous) = self.rules.insert(component_type, rule) {
            warn!(
                component = component_type.label(),
                replaced_unit_value = previous.unit_value_usd,
                "duplicate valuation rule; keeping the later definition"
            );
            self.duplicates.push(component_type);
        }
    }

    pub fn get(&self, component_type: ComponentType) -> Option<&ValuationRuleData> {
        self.rules.get(&component_type)
    }

    /// Component types that appeared more than once, in the order the overwrite happened.
    pub fn duplicates(&self) -> &[ComponentType] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
