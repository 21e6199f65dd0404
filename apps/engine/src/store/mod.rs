//! Durable key-value storage and the high score kept in it.

pub mod file;
pub mod high_score;
pub mod memory;

pub use file::JsonFileStore;
pub use high_score::{HighScore, HIGHSCORE_KEY};
pub use memory::MemoryStore;

use crate::error::AppError;

/// Minimal string key-value store, the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}
