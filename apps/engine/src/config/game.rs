//! Game configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::ZoneMap;
use crate::error::AppError;

/// Completion summary delay: 500 ms for the placement check plus 800 ms
/// for the celebration animation.
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 1300;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Cards drawn from each zone per round.
    pub zone_counts: ZoneMap<usize>,
    /// Delay between the last placement and the completion signal.
    pub completion_delay_ms: u64,
    /// File backing the high score; in-memory when unset.
    pub highscore_path: Option<PathBuf>,
    /// JSON question pool replacing the built-in one.
    pub question_pool_path: Option<PathBuf>,
    /// Session seed; drawn from entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            zone_counts: ZoneMap::new(2, 2, 1),
            completion_delay_ms: DEFAULT_COMPLETION_DELAY_MS,
            highscore_path: None,
            question_pool_path: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let zone_counts = ZoneMap::new(
            parsed(&lookup, "TRIZONE_GREEN_CARDS")?.unwrap_or(defaults.zone_counts.green),
            parsed(&lookup, "TRIZONE_YELLOW_CARDS")?.unwrap_or(defaults.zone_counts.yellow),
            parsed(&lookup, "TRIZONE_RED_CARDS")?.unwrap_or(defaults.zone_counts.red),
        );
        if zone_counts.total() == 0 {
            return Err(AppError::config(
                "at least one of TRIZONE_GREEN_CARDS, TRIZONE_YELLOW_CARDS, TRIZONE_RED_CARDS must be positive",
            ));
        }

        let completion_delay_ms = parsed(&lookup, "TRIZONE_COMPLETION_DELAY_MS")?
            .unwrap_or(defaults.completion_delay_ms);

        Ok(Self {
            zone_counts,
            completion_delay_ms,
            highscore_path: path(&lookup, "TRIZONE_HIGHSCORE_PATH"),
            question_pool_path: path(&lookup, "TRIZONE_QUESTION_POOL"),
            seed: parsed(&lookup, "TRIZONE_SEED")?,
        })
    }
}

/// Parse an optional variable; present-but-invalid is an error.
fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::config(format!("{key} has invalid value '{raw}': {e}"))),
    }
}

fn path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}
