//! Headless rounds played by a simulated learner.
//!
//! The learner never calls the scoring engine directly: each card is moved
//! through the same pointer and touch adapters a browser host would feed.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use trizone::domain::{
    GestureOutcome, Point, PointerEvent, RoundComplete, TouchEvent, Zone, ZoneMap,
};
use trizone::{AppError, GameSession, KeyValueStore};

use crate::types::ModalityChoice;

/// Host clock step while waiting for the completion signal.
const TICK_MS: u64 = 100;
/// Upper bound on clock steps before giving up on a completion signal.
const MAX_WAIT_TICKS: u32 = 1000;
/// Where undragged cards rest, above every drop zone.
const DECK_ORIGIN: Point = Point::new(40.0, 60.0);

#[derive(Debug, Clone, Copy)]
pub struct LearnerProfile {
    /// Probability of choosing the correct zone.
    pub accuracy: f64,
    /// Probability that a release misses every zone.
    pub miss_rate: f64,
    pub modality: ModalityChoice,
}

#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub summary: RoundComplete,
    pub zone_drops: ZoneMap<usize>,
    pub returned_gestures: u32,
    pub pointer_drops: u32,
    pub touch_drops: u32,
    pub high_score: u32,
    pub new_high_score: bool,
}

pub struct Simulator<S: KeyValueStore> {
    session: GameSession<S>,
    rng: ChaCha8Rng,
    profile: LearnerProfile,
}

impl<S: KeyValueStore> Simulator<S> {
    pub fn new(session: GameSession<S>, learner_seed: u64, profile: LearnerProfile) -> Self {
        Self {
            session,
            rng: ChaCha8Rng::seed_from_u64(learner_seed),
            profile,
        }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Play the current round to completion, then start the next one.
    pub fn play_round(&mut self) -> Result<RoundOutcome, Box<dyn std::error::Error>> {
        let mut returned_gestures = 0;
        let mut pointer_drops = 0;
        let mut touch_drops = 0;
        let mut new_high_score = false;
        let mut summary = None;

        let pending: Vec<usize> = self.session.round().unplaced_indices().collect();
        for card in pending {
            let target = self.choose_zone(card);
            let use_touch = match self.profile.modality {
                ModalityChoice::Pointer => false,
                ModalityChoice::Touch => true,
                ModalityChoice::Mixed => self.rng.random_bool(0.5),
            };

            loop {
                let miss = self.rng.random_bool(self.profile.miss_rate);
                let outcome = if use_touch {
                    self.touch_drag(card, target, miss)?
                } else {
                    self.pointer_drag(card, target, miss)?
                };
                match outcome {
                    Some(raised) => {
                        new_high_score |= raised;
                        if use_touch {
                            touch_drops += 1;
                        } else {
                            pointer_drops += 1;
                        }
                        break;
                    }
                    None => returned_gestures += 1,
                }
            }
            // Learner reads the feedback before picking up the next card.
            let think_ms = self.rng.random_range(200..1200);
            summary = summary.or(self.session.tick(think_ms));
        }

        let summary = match summary {
            Some(summary) => summary,
            None => self.await_completion()?,
        };
        let zone_drops = self.session.round().zone_drop_counts().clone();
        let outcome = RoundOutcome {
            summary,
            zone_drops,
            returned_gestures,
            pointer_drops,
            touch_drops,
            high_score: self.session.high_score(),
            new_high_score,
        };
        self.session.new_game()?;
        Ok(outcome)
    }

    fn choose_zone(&mut self, card: usize) -> Zone {
        let correct = self
            .session
            .round()
            .card(card)
            .map(|c| c.prompt.correct_zone)
            .unwrap_or(Zone::Green);
        if self.rng.random_bool(self.profile.accuracy) {
            return correct;
        }
        let wrong: Vec<Zone> = Zone::ALL.into_iter().filter(|z| *z != correct).collect();
        *wrong.choose(&mut self.rng).unwrap_or(&correct)
    }

    /// One pointer drag. `Some(raised_high_score)` once the card is placed.
    fn pointer_drag(
        &mut self,
        card: usize,
        target: Zone,
        miss: bool,
    ) -> Result<Option<bool>, AppError> {
        self.session.pointer(PointerEvent::DragStart { card })?;
        self.session.pointer(PointerEvent::DragOver { zone: target })?;
        if miss {
            self.session.pointer(PointerEvent::DragLeave { zone: target })?;
            let update = self.session.pointer(PointerEvent::DragEnd)?;
            debug!(card, gesture = ?update.gesture, "pointer drag abandoned");
            return Ok(None);
        }
        let update = self.session.pointer(PointerEvent::Drop { zone: target })?;
        self.session.pointer(PointerEvent::DragEnd)?;
        Ok(update
            .placement
            .map(|_| update.new_high_score.is_some()))
    }

    /// One touch drag. `Some(raised_high_score)` once the card is placed.
    fn touch_drag(
        &mut self,
        card: usize,
        target: Zone,
        miss: bool,
    ) -> Result<Option<bool>, AppError> {
        let Some(rect) = self.session.layout().rect(target) else {
            return Err(AppError::config(format!("layout has no {target} zone")));
        };
        let aim = rect.center();
        let release = if miss { DECK_ORIGIN } else { aim };

        self.session.touch(TouchEvent::Start {
            card,
            at: DECK_ORIGIN,
        })?;
        let midway = Point::new(
            (DECK_ORIGIN.x + aim.x) / 2.0,
            (DECK_ORIGIN.y + aim.y) / 2.0,
        );
        for at in [midway, aim, release] {
            self.session.touch(TouchEvent::Move { at })?;
        }
        let update = self.session.touch(TouchEvent::End { at: release })?;
        if let GestureOutcome::Returned { .. } = update.gesture {
            debug!(card, "touch released outside every zone");
        }
        Ok(update
            .placement
            .map(|_| update.new_high_score.is_some()))
    }

    fn await_completion(&mut self) -> Result<RoundComplete, Box<dyn std::error::Error>> {
        for _ in 0..MAX_WAIT_TICKS {
            if let Some(summary) = self.session.tick(TICK_MS) {
                return Ok(summary);
            }
        }
        Err(format!(
            "round {} never signalled completion",
            self.session.round().round_no
        )
        .into())
    }
}
