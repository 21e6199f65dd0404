use tracing::info;

use crate::error::AppError;
use crate::store::KeyValueStore;

/// Storage key of the persisted best score.
pub const HIGHSCORE_KEY: &str = "highscore";

/// Best score across rounds. Only ever increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore(u32);

impl HighScore {
    pub fn value(self) -> u32 {
        self.0
    }

    /// Read the stored value; absent means 0.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, AppError> {
        match store.get(HIGHSCORE_KEY)? {
            None => Ok(Self(0)),
            Some(raw) => raw.trim().parse::<u32>().map(Self).map_err(|e| {
                AppError::storage(format!("stored {HIGHSCORE_KEY} '{raw}' is not a score: {e}"))
            }),
        }
    }

    /// Raise to `score` if it beats the current best, writing through to
    /// `store`. Returns the new best when it changed.
    pub fn record<S: KeyValueStore + ?Sized>(
        &mut self,
        score: u32,
        store: &mut S,
    ) -> Result<Option<u32>, AppError> {
        if score <= self.0 {
            return Ok(None);
        }
        store.set(HIGHSCORE_KEY, &score.to_string())?;
        info!(previous = self.0, high_score = score, "new high score");
        self.0 = score;
        Ok(Some(score))
    }
}
