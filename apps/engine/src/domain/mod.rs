//! Domain layer: pure game logic types and helpers.

pub mod completion;
pub mod generator;
pub mod gesture;
pub mod prompt;
pub mod round;
pub mod scoring;
pub mod seed_derivation;
pub mod zone;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_gesture;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use completion::{CompletionTimer, RoundToken};
pub use generator::generate_round;
pub use gesture::{
    CardDroppedOnZone, GestureOutcome, GestureTracker, InputAdapter, Modality, Point,
    PointerAdapter, PointerEvent, Rect, Size, TouchAdapter, TouchEvent, ZoneLayout,
};
pub use prompt::{Prompt, QuestionPool, RoundCard};
pub use round::RoundState;
pub use scoring::{
    accuracy_percent, apply_placement, FeedbackTier, PlacementResult, RoundComplete,
    POINTS_PER_CORRECT,
};
pub use seed_derivation::{derive_round_seed, round_rng};
pub use zone::{Zone, ZoneMap};
