//! Question pool loading.

use std::fs;
use std::path::Path;

use crate::domain::QuestionPool;
use crate::error::AppError;

const BUILTIN_POOL: &str = include_str!("../../data/questions.json");

/// Parse a pool from its JSON form.
pub fn parse_pool(json: &str) -> Result<QuestionPool, AppError> {
    serde_json::from_str(json).map_err(|e| AppError::pool(format!("invalid question pool: {e}")))
}

/// Pool shipped with the crate.
pub fn default_pool() -> Result<QuestionPool, AppError> {
    parse_pool(BUILTIN_POOL)
}

/// Pool from `path`, or the built-in pool when `path` is `None`.
pub fn load_pool(path: Option<&Path>) -> Result<QuestionPool, AppError> {
    let Some(path) = path else {
        return default_pool();
    };
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::pool(format!("failed to read {}: {e}", path.display())))?;
    parse_pool(&json)
}
