//! Risk assessment domain - factor vectors, deterministic scoring,
//! classification, submissions, and trend derivation.

mod errors;
mod factors;
mod risk;
mod scoring;
mod submission;
mod trend;

pub use errors::AssessmentError;
pub use factors::{FactorInput, FactorVector, FactorViolations, FieldViolation, FACTOR_COUNT};
pub use risk::{Confidence, RiskAssessment, RiskLevel};
pub use scoring::{assess, risk_score};
pub use submission::{Provenance, Submission};
pub use trend::{derive_trend, Trend};
