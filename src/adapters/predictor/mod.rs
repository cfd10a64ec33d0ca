//! Predictor adapters - remote gateway, local engine, failover composition,
//! and a configurable mock for tests.

mod engine;
mod failover;
mod mock;
mod remote;

pub use engine::EnginePredictor;
pub use failover::FailoverPredictor;
pub use mock::MockPredictor;
pub use remote::{RemotePredictor, RemotePredictorConfig};
