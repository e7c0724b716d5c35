//! Component-level valuation of hardware listings.
//!
//! A listing's price is reduced by the value of the components it ships with (RAM, storage,
//! OS license, and so on) so listings can be compared on the value of the base system.

pub mod domain;
mod engine;
mod rulebook;

pub use domain::{
    ComponentMetric, ComponentType, ComponentValuationInput, Condition, ValuationLine,
    ValuationResult, ValuationRuleData, GB_PER_TB,
};
pub use engine::{compute_adjusted_price, ValuationEngine};
pub use rulebook::RuleBook;
