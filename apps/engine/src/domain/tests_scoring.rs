use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::fixtures::small_pool;
use crate::domain::{
    accuracy_percent, apply_placement, generate_round, FeedbackTier, RoundComplete, RoundState,
    Zone, ZoneMap,
};
use crate::errors::domain::{CardIndexFault, DomainError};

fn five_card_round(seed: u64) -> RoundState {
    generate_round(
        &small_pool(),
        &ZoneMap::new(2, 2, 1),
        1,
        &mut ChaCha8Rng::seed_from_u64(seed),
    )
    .unwrap()
}

/// Some zone other than `zone`.
fn wrong_zone(zone: Zone) -> Zone {
    match zone {
        Zone::Green => Zone::Red,
        Zone::Yellow => Zone::Green,
        Zone::Red => Zone::Yellow,
    }
}

fn correct_zone(state: &RoundState, i: usize) -> Zone {
    state.card(i).unwrap().prompt.correct_zone
}

#[test]
fn correct_placement_scores_twenty() {
    let mut state = five_card_round(1);
    let zone = correct_zone(&state, 0);
    let result = apply_placement(&mut state, 0, zone).unwrap();

    assert!(result.is_correct);
    assert_eq!(result.new_score, 20);
    assert_eq!(result.zone_drop_count, 1);
    assert!(!result.completes_round);
    assert_eq!(state.placed_count(), 1);
    assert_eq!(state.correct_count(), 1);
    assert_eq!(state.remaining(), 4);
    assert_eq!(result.card.placed_in, Some(zone));
}

#[test]
fn wrong_placement_counts_drop_but_not_score() {
    let mut state = five_card_round(2);
    let zone = wrong_zone(correct_zone(&state, 3));
    let result = apply_placement(&mut state, 3, zone).unwrap();

    assert!(!result.is_correct);
    assert_eq!(result.new_score, 0);
    assert_eq!(state.drop_count(zone), 1);
    assert_eq!(state.placed_count(), 1);
    assert_eq!(state.correct_count(), 0);
}

#[test]
fn second_placement_of_same_card_is_rejected() {
    let mut state = five_card_round(3);
    let zone = correct_zone(&state, 2);
    apply_placement(&mut state, 2, zone).unwrap();

    let err = apply_placement(&mut state, 2, zone).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidCardIndex {
            index: 2,
            fault: CardIndexFault::AlreadyPlaced
        }
    );
    assert_eq!(state.placed_count(), 1);
    assert_eq!(state.score(), 20);
    assert_eq!(state.drop_count(zone), 1);
}

#[test]
fn out_of_range_index_is_rejected_without_mutation() {
    let mut state = five_card_round(4);
    let err = apply_placement(&mut state, 5, Zone::Green).unwrap_err();
    assert_eq!(err, DomainError::out_of_range(5, 5));
    assert_eq!(state.placed_count(), 0);
    assert_eq!(state.drop_count(Zone::Green), 0);
}

#[test]
fn four_of_five_correct_reaches_excellent_threshold() {
    let mut state = five_card_round(5);
    for i in 0..4 {
        let zone = correct_zone(&state, i);
        apply_placement(&mut state, i, zone).unwrap();
    }
    let last = wrong_zone(correct_zone(&state, 4));
    let result = apply_placement(&mut state, 4, last).unwrap();
    assert!(result.completes_round);

    let summary = RoundComplete::from_state(&state).unwrap();
    assert_eq!(summary.score, 80);
    assert_eq!(summary.correct_count, 4);
    assert_eq!(summary.total_cards, 5);
    assert_eq!(summary.accuracy_percent().unwrap(), 80);
    // 80% sits on the excellent threshold.
    assert_eq!(summary.tier().unwrap(), FeedbackTier::Excellent);
}

#[test]
fn zero_correct_needs_improvement() {
    let mut state = five_card_round(6);
    for i in 0..5 {
        let zone = wrong_zone(correct_zone(&state, i));
        apply_placement(&mut state, i, zone).unwrap();
    }
    let summary = RoundComplete::from_state(&state).unwrap();
    assert_eq!(summary.score, 0);
    assert_eq!(summary.accuracy_percent().unwrap(), 0);
    assert_eq!(summary.tier().unwrap(), FeedbackTier::NeedsImprovement);
}

#[test]
fn summary_absent_until_last_card() {
    let mut state = five_card_round(7);
    for i in 0..4 {
        let zone = correct_zone(&state, i);
        apply_placement(&mut state, i, zone).unwrap();
        assert!(RoundComplete::from_state(&state).is_none());
    }
}

#[test]
fn accuracy_rounds_half_up() {
    assert_eq!(accuracy_percent(4, 5).unwrap(), 80);
    assert_eq!(accuracy_percent(1, 8).unwrap(), 13);
    assert_eq!(accuracy_percent(2, 3).unwrap(), 67);
    assert_eq!(accuracy_percent(1, 3).unwrap(), 33);
    assert_eq!(accuracy_percent(5, 5).unwrap(), 100);
}

#[test]
fn accuracy_refuses_empty_round() {
    assert_eq!(accuracy_percent(0, 0), Err(DomainError::EmptyRound));
}

#[test]
fn tier_thresholds() {
    assert_eq!(FeedbackTier::for_accuracy(100), FeedbackTier::Excellent);
    assert_eq!(FeedbackTier::for_accuracy(80), FeedbackTier::Excellent);
    assert_eq!(FeedbackTier::for_accuracy(79), FeedbackTier::Good);
    assert_eq!(FeedbackTier::for_accuracy(60), FeedbackTier::Good);
    assert_eq!(FeedbackTier::for_accuracy(59), FeedbackTier::NeedsImprovement);
    assert_eq!(FeedbackTier::for_accuracy(0), FeedbackTier::NeedsImprovement);
    assert_eq!(FeedbackTier::NeedsImprovement.slug(), "needs-improvement");
}
