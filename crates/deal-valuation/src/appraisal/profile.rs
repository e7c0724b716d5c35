use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::scoring::{validate_rule_group_weights, WeightMap, WeightValidationError};
use crate::valuation::{ComponentMetric, ComponentType, ValuationRuleData};

/// Rules and weights used to appraise listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationProfile {
    #[serde(default)]
    pub rules: Vec<ValuationRuleData>,
    #[serde(default)]
    pub composite_weights: WeightMap,
    #[serde(default)]
    pub rule_group_weights: WeightMap,
}

impl ValuationProfile {
    /// Built-in profile for used small-form-factor desktops and mini PCs.
    pub fn standard() -> Self {
        let rules = vec![
            ValuationRuleData::new(ComponentType::Ram, ComponentMetric::PerGb, 2.5),
            ValuationRuleData::new(ComponentType::Ssd, ComponentMetric::PerTb, 45.0),
            ValuationRuleData::new(ComponentType::Hdd, ComponentMetric::PerTb, 18.0)
                .with_multipliers(1.0, 0.6, 0.4),
            ValuationRuleData::new(ComponentType::OsLicense, ComponentMetric::Flat, 35.0),
            ValuationRuleData::new(ComponentType::Wifi, ComponentMetric::Flat, 12.0),
        ];

        let composite_weights = [
            ("cpu_mark_multi", 0.40),
            ("cpu_mark_single", 0.20),
            ("gpu_score", 0.15),
            ("perf_per_watt", 0.10),
            ("ram_capacity", 0.05),
            ("expandability", 0.04),
            ("encoder_capability", 0.03),
            ("ports_fit", 0.03),
        ]
        .into_iter()
        .map(|(name, weight)| (name.to_string(), weight))
        .collect();

        Self {
            rules,
            composite_weights,
            rule_group_weights: WeightMap::new(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a JSON profile, rejecting rule-group weights that fail validation.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_reader(reader)?;
        validate_rule_group_weights(&profile.rule_group_weights)?;
        Ok(profile)
    }
}

impl Default for ValuationProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read valuation profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid valuation profile JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid rule group weights: {0}")]
    InvalidWeights(#[from] WeightValidationError),
}
