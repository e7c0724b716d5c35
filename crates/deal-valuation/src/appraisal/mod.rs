//! Listing appraisal: loads rules and weights from a repository, runs the valuation engine and
//! the scoring functions, and exposes the result over HTTP.

pub mod domain;
pub mod profile;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AppraisalRequest, ListingAppraisal, ValuationRequest, ValuationView};
pub use profile::{ProfileError, ValuationProfile};
pub use repository::{RepositoryError, RuleRepository, StaticRuleRepository};
pub use router::appraisal_router;
pub use service::{AppraisalError, AppraisalService};
