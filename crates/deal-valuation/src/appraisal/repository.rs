use std::sync::{Arc, RwLock};

use super::profile::ValuationProfile;
use crate::scoring::WeightMap;
use crate::valuation::ValuationRuleData;

/// Source of valuation rules and scoring weights, so the service can run against any store.
pub trait RuleRepository: Send + Sync {
    fn rules(&self) -> Result<Vec<ValuationRuleData>, RepositoryError>;
    fn composite_weights(&self) -> Result<WeightMap, RepositoryError>;
    fn rule_group_weights(&self) -> Result<WeightMap, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("rule configuration unavailable: {0}")]
    Unavailable(String),
}

/// Repository serving a profile held in memory. The profile can be swapped at runtime.
#[derive(Debug, Clone, Default)]
pub struct StaticRuleRepository {
    profile: Arc<RwLock<ValuationProfile>>,
}

impl StaticRuleRepository {
    pub fn new(profile: ValuationProfile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(profile)),
        }
    }

    pub fn replace(&self, profile: ValuationProfile) -> Result<(), RepositoryError> {
        let mut guard = self
            .profile
            .write()
            .map_err(|_| RepositoryError::Unavailable("profile lock poisoned".to_string()))?;
        *guard = profile;
        Ok(())
    }

    fn read<T>(&self, select: impl FnOnce(&ValuationProfile) -> T) -> Result<T, RepositoryError> {
        let guard = self
            .profile
            .read()
            .map_err(|_| RepositoryError::Unavailable("profile lock poisoned".to_string()))?;
        Ok(select(&guard))
    }
}

impl RuleRepository for StaticRuleRepository {
    fn rules(&self) -> Result<Vec<ValuationRuleData>, RepositoryError> {
        self.read(|profile| profile.rules.clone())
    }

    fn composite_weights(&self) -> Result<WeightMap, RepositoryError> {
        self.read(|profile| profile.composite_weights.clone())
    }

    fn rule_group_weights(&self) -> Result<WeightMap, RepositoryError> {
        self.read(|profile| profile.rule_group_weights.clone())
    }
}
