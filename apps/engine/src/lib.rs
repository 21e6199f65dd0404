#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod session;
pub mod store;
pub mod telemetry;


// Re-exports for public API
pub use config::GameConfig;
pub use error::AppError;
pub use errors::domain::{CardIndexFault, DomainError};
pub use session::{GameSession, SessionUpdate};
pub use store::{HighScore, JsonFileStore, KeyValueStore, MemoryStore};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
