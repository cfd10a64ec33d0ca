//! Application layer - use case handlers composing domain and ports.

pub mod handlers;
