//! Use case handlers for the assessment API.

mod get_history;
mod get_trend;
mod submit_assessment;

pub use get_history::{GetHistoryHandler, GetHistoryQuery};
pub use get_trend::{GetTrendHandler, GetTrendQuery};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
