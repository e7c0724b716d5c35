//! Valuation and scoring core for computer-hardware deal listings.
//!
//! [`valuation`] prices the components bundled with a listing and deducts them from the asking
//! price. [`scoring`] blends performance metrics into a composite score and combines weighted
//! rule-group adjustments. [`appraisal`] wires both to a rule repository and an HTTP router.

pub mod appraisal;
pub mod config;
pub mod error;
pub mod money;
pub mod scoring;
pub mod telemetry;
pub mod valuation;
