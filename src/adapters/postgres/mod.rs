//! PostgreSQL adapters for the submission store and user counter.

mod submission_store;
mod user_counter;

pub use submission_store::PostgresSubmissionStore;
pub use user_counter::PostgresSubmissionCounter;
