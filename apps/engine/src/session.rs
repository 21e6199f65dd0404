//! Game session: owns the live round and wires the gesture adapters to
//! the scoring engine, the completion timer and the high score.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::domain::{
    apply_placement, generate_round, round_rng, CardDroppedOnZone, CompletionTimer,
    GestureOutcome, GestureTracker, InputAdapter, PlacementResult, PointerAdapter, PointerEvent,
    QuestionPool, RoundComplete, RoundState, TouchAdapter, TouchEvent, Zone, ZoneLayout,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::store::{HighScore, KeyValueStore};

/// Everything the presentation layer needs after one input event.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    pub gesture: GestureOutcome,
    /// Present when the event placed a card.
    pub placement: Option<PlacementResult>,
    /// Present when the placement raised the high score.
    pub new_high_score: Option<u32>,
}

impl SessionUpdate {
    fn gesture_only(gesture: GestureOutcome) -> Self {
        Self {
            gesture,
            placement: None,
            new_high_score: None,
        }
    }
}

pub struct GameSession<S: KeyValueStore> {
    config: GameConfig,
    pool: QuestionPool,
    store: S,
    session_seed: u64,
    round: RoundState,
    tracker: GestureTracker,
    pointer: PointerAdapter,
    touch: TouchAdapter,
    completion: CompletionTimer,
    high_score: HighScore,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Load the high score from `store` and start round 1.
    pub fn new(
        config: GameConfig,
        pool: QuestionPool,
        store: S,
        touch: TouchAdapter,
    ) -> Result<Self, AppError> {
        let high_score = HighScore::load(&store)?;
        let session_seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let round = generate_round(
            &pool,
            &config.zone_counts,
            1,
            &mut round_rng(session_seed, 1),
        )?;
        info!(
            session_seed,
            high_score = high_score.value(),
            cards = round.total_cards(),
            "session started"
        );
        Ok(Self {
            tracker: GestureTracker::new(round.total_cards()),
            config,
            pool,
            store,
            session_seed,
            round,
            pointer: PointerAdapter::new(),
            touch,
            completion: CompletionTimer::new(),
            high_score,
        })
    }

    /// Replace the round with a fresh one. Counters start from zero, any
    /// pending completion signal from the old round is cancelled, and the
    /// high score carries over.
    pub fn new_game(&mut self) -> Result<&RoundState, AppError> {
        let round_no = self.round.round_no + 1;
        let round = generate_round(
            &self.pool,
            &self.config.zone_counts,
            round_no,
            &mut round_rng(self.session_seed, round_no),
        )?;
        self.tracker.reset(round.total_cards());
        self.pointer = PointerAdapter::new();
        self.touch.reset_hover();
        self.completion.start_round();
        self.round = round;
        info!(round_no, cards = self.round.total_cards(), "new round");
        Ok(&self.round)
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.value()
    }

    pub fn session_seed(&self) -> u64 {
        self.session_seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn layout(&self) -> &ZoneLayout {
        self.touch.layout()
    }

    /// Swap in re-measured drop zones.
    pub fn set_layout(&mut self, layout: ZoneLayout) {
        self.touch.set_layout(layout);
    }

    /// Drop zone currently highlighted by either input modality.
    pub fn hovered_zone(&self) -> Option<Zone> {
        self.pointer.hovered().or(self.touch.hovered())
    }

    pub fn completion_pending(&self) -> bool {
        self.completion.is_pending()
    }

    pub fn pointer(&mut self, event: PointerEvent) -> Result<SessionUpdate, AppError> {
        let gesture = self.pointer.handle(&mut self.tracker, event);
        self.follow_up(gesture)
    }

    pub fn touch(&mut self, event: TouchEvent) -> Result<SessionUpdate, AppError> {
        let gesture = self.touch.handle(&mut self.tracker, event);
        self.follow_up(gesture)
    }

    fn follow_up(&mut self, gesture: GestureOutcome) -> Result<SessionUpdate, AppError> {
        let GestureOutcome::Dropped(dropped) = gesture else {
            return Ok(SessionUpdate::gesture_only(gesture));
        };
        let (placement, new_high_score) = self.place(dropped)?;
        Ok(SessionUpdate {
            gesture,
            placement,
            new_high_score,
        })
    }

    /// Score a drop and mark the card placed for every input adapter.
    ///
    /// An unknown or already placed card is logged and ignored. A failed
    /// high-score write is logged too; the placement and any completion
    /// signal stand regardless.
    pub fn place(
        &mut self,
        dropped: CardDroppedOnZone,
    ) -> Result<(Option<PlacementResult>, Option<u32>), AppError> {
        let result = match apply_placement(&mut self.round, dropped.card_index, dropped.zone) {
            Ok(result) => result,
            Err(err @ DomainError::InvalidCardIndex { .. }) => {
                warn!(
                    round_no = self.round.round_no,
                    card_index = dropped.card_index,
                    zone = %dropped.zone,
                    error = %err,
                    "ignoring placement"
                );
                return Ok((None, None));
            }
            Err(err) => return Err(err.into()),
        };
        debug!(
            round_no = self.round.round_no,
            card_index = dropped.card_index,
            zone = %dropped.zone,
            correct = result.is_correct,
            score = result.new_score,
            "card placed"
        );
        self.tracker.mark_placed(dropped.card_index);

        if result.completes_round {
            if let Some(summary) = RoundComplete::from_state(&self.round) {
                self.completion.arm(summary, self.config.completion_delay_ms);
            }
        }

        let new_high_score = match self.high_score.record(result.new_score, &mut self.store) {
            Ok(raised) => raised,
            Err(err) => {
                warn!(
                    round_no = self.round.round_no,
                    score = result.new_score,
                    error = %err,
                    "failed to persist high score"
                );
                None
            }
        };
        Ok((Some(result), new_high_score))
    }

    /// Advance the host clock; returns the completion summary once the
    /// presentation delay after the last placement has passed.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<RoundComplete> {
        let summary = self.completion.advance(elapsed_ms)?;
        info!(
            round_no = summary.round_no,
            score = summary.score,
            correct = summary.correct_count,
            total = summary.total_cards,
            "round complete"
        );
        Some(summary)
    }
}
