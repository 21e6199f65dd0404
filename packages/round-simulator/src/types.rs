//! Shared types for the simulator.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalityChoice {
    /// Every card is dragged with the pointer
    Pointer,
    /// Every card is dragged with a finger
    Touch,
    /// Coin flip per card
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Per-round JSON lines only
    Jsonl,
    /// CSV summary only
    Csv,
    /// JSON lines and the CSV summary
    All,
}

impl OutputFormat {
    pub fn wants_jsonl(self) -> bool {
        matches!(self, OutputFormat::Jsonl | OutputFormat::All)
    }

    pub fn wants_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::All)
    }
}
