use serde::Serialize;

use crate::domain::{RoundCard, RoundState, Zone};
use crate::errors::domain::DomainError;

/// Points awarded for each card placed in its correct zone.
pub const POINTS_PER_CORRECT: u32 = 20;

/// Feedback for one placement, for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementResult {
    pub is_correct: bool,
    pub card: RoundCard,
    pub new_score: u32,
    /// Cards now stacked in the target zone; also the new card's stack depth.
    pub zone_drop_count: usize,
    /// True when this placement was the round's last.
    pub completes_round: bool,
}

/// Record `card_index` as dropped on `zone`.
///
/// Validates before mutating, so a rejected placement leaves the round
/// untouched. A card may be scored at most once.
pub fn apply_placement(
    state: &mut RoundState,
    card_index: usize,
    zone: Zone,
) -> Result<PlacementResult, DomainError> {
    let len = state.cards.len();
    let card = state
        .cards
        .get_mut(card_index)
        .ok_or_else(|| DomainError::out_of_range(card_index, len))?;
    if card.is_placed() {
        return Err(DomainError::already_placed(card_index));
    }

    let is_correct = card.prompt.correct_zone == zone;
    card.placed_in = Some(zone);
    let card = card.clone();

    state.placed_count += 1;
    if is_correct {
        state.correct_count += 1;
        state.score += POINTS_PER_CORRECT;
    }
    state.zone_drop_counts[zone] += 1;

    Ok(PlacementResult {
        is_correct,
        card,
        new_score: state.score,
        zone_drop_count: state.zone_drop_counts[zone],
        completes_round: state.is_complete(),
    })
}

/// Accuracy-based feedback tier for the completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl FeedbackTier {
    pub fn for_accuracy(percent: u32) -> Self {
        if percent >= 80 {
            FeedbackTier::Excellent
        } else if percent >= 60 {
            FeedbackTier::Good
        } else {
            FeedbackTier::NeedsImprovement
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "excellent",
            FeedbackTier::Good => "good",
            FeedbackTier::NeedsImprovement => "needs-improvement",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "🎉 Amazing! You are an expert in the AI three zones!",
            FeedbackTier::Good => "👍 Very good! Keep learning together!",
            FeedbackTier::NeedsImprovement => "🤔 There is more to learn. Try again!",
        }
    }
}

/// `round(100 * correct / total)`, refusing an empty round.
pub fn accuracy_percent(correct: usize, total: usize) -> Result<u32, DomainError> {
    if total == 0 {
        return Err(DomainError::EmptyRound);
    }
    // Integer round-half-up of 100 * correct / total.
    Ok(((200 * correct + total) / (2 * total)) as u32)
}

/// Completion signal for a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundComplete {
    pub round_no: u32,
    pub score: u32,
    pub correct_count: usize,
    pub total_cards: usize,
}

impl RoundComplete {
    /// Summary of `state`, or `None` while cards remain.
    pub fn from_state(state: &RoundState) -> Option<Self> {
        state.is_complete().then(|| Self {
            round_no: state.round_no,
            score: state.score,
            correct_count: state.correct_count,
            total_cards: state.total_cards(),
        })
    }

    pub fn accuracy_percent(&self) -> Result<u32, DomainError> {
        accuracy_percent(self.correct_count, self.total_cards)
    }

    pub fn tier(&self) -> Result<FeedbackTier, DomainError> {
        self.accuracy_percent().map(FeedbackTier::for_accuracy)
    }
}
