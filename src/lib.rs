//! MindGuard - Mental Health Risk Assessment Service
//!
//! This crate turns a ten-factor questionnaire into a classified risk
//! assessment. A remote prediction service is consulted first; when it is
//! slow, unreachable, or wrong-shaped, a deterministic local scoring engine
//! answers instead, so assessment is always available.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
