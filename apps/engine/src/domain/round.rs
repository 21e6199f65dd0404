use serde::Serialize;

use crate::domain::{RoundCard, Zone, ZoneMap};

/// Mutable state of one round, from generation to completion.
///
/// Created fresh by the round generator and replaced, never reset in
/// place, when a new round starts. Only the scoring engine mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct RoundState {
    /// 1-based round number within the session.
    pub round_no: u32,
    pub(crate) cards: Vec<RoundCard>,
    pub(crate) placed_count: usize,
    pub(crate) correct_count: usize,
    pub(crate) zone_drop_counts: ZoneMap<usize>,
    pub(crate) score: u32,
}

impl RoundState {
    pub(crate) fn new(round_no: u32, cards: Vec<RoundCard>) -> Self {
        Self {
            round_no,
            cards,
            placed_count: 0,
            correct_count: 0,
            zone_drop_counts: ZoneMap::default(),
            score: 0,
        }
    }

    pub fn cards(&self) -> &[RoundCard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&RoundCard> {
        self.cards.get(index)
    }

    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Cards the learner still has to place.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.placed_count
    }

    /// Cards that landed in `zone`, correct or not.
    pub fn drop_count(&self, zone: Zone) -> usize {
        self.zone_drop_counts[zone]
    }

    pub fn zone_drop_counts(&self) -> &ZoneMap<usize> {
        &self.zone_drop_counts
    }

    pub fn is_complete(&self) -> bool {
        self.placed_count == self.cards.len()
    }

    /// Indices of cards not yet placed, in round order.
    pub fn unplaced_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .filter(|c| !c.is_placed())
            .map(|c| c.index)
    }
}
