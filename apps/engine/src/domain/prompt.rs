//! Prompts, the static question pool they are drawn from, and the
//! per-round card wrapper.

use serde::{Deserialize, Serialize};

use crate::domain::{Zone, ZoneMap};

/// A short text the learner must classify. Immutable once drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub text: String,
    pub correct_zone: Zone,
    pub emoji: String,
}

impl Prompt {
    /// Prompt carrying its zone's face emoji.
    pub fn new(text: impl Into<String>, correct_zone: Zone) -> Self {
        Self {
            text: text.into(),
            correct_zone,
            emoji: correct_zone.emoji().to_string(),
        }
    }
}

/// Prompt texts grouped by the zone they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionPool {
    texts: ZoneMap<Vec<String>>,
}

impl QuestionPool {
    pub fn new(texts: ZoneMap<Vec<String>>) -> Self {
        Self { texts }
    }

    pub fn texts(&self, zone: Zone) -> &[String] {
        &self.texts[zone]
    }

    /// Number of prompts available per zone.
    pub fn sizes(&self) -> ZoneMap<usize> {
        self.texts.map(Vec::len)
    }

    pub fn prompt(&self, zone: Zone, i: usize) -> Option<Prompt> {
        self.texts[zone].get(i).map(|t| Prompt::new(t.clone(), zone))
    }
}

/// A prompt bound to its ordinal position within the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundCard {
    /// Stable index; never reused or renumbered mid-round.
    pub index: usize,
    pub prompt: Prompt,
    /// Zone the card was dropped on, once scored.
    pub placed_in: Option<Zone>,
}

impl RoundCard {
    pub fn is_placed(&self) -> bool {
        self.placed_in.is_some()
    }
}
