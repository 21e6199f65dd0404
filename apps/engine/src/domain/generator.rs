//! Round generation: per-zone random draw followed by a full shuffle.

use rand::seq::{index, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::domain::{QuestionPool, RoundCard, RoundState, Zone, ZoneMap};
use crate::errors::domain::DomainError;

/// Build a fresh round from `pool`.
///
/// For each zone, draws `counts[zone]` prompts uniformly without
/// replacement, concatenates the draws in zone order and applies a
/// uniform permutation. All counters start at zero.
///
/// Fails with [`DomainError::InsufficientPoolSize`] if any zone cannot
/// supply its count; the round is never short-filled. Fails with
/// [`DomainError::EmptyRound`] if every count is zero.
pub fn generate_round<R: Rng + ?Sized>(
    pool: &QuestionPool,
    counts: &ZoneMap<usize>,
    round_no: u32,
    rng: &mut R,
) -> Result<RoundState, DomainError> {
    // Check every zone before drawing anything.
    for (zone, &requested) in counts.iter() {
        let available = pool.texts(zone).len();
        if requested > available {
            return Err(DomainError::InsufficientPoolSize {
                zone,
                requested,
                available,
            });
        }
    }
    if counts.total() == 0 {
        return Err(DomainError::EmptyRound);
    }

    let mut prompts = Vec::with_capacity(counts.total());
    for zone in Zone::ALL {
        let available = pool.texts(zone).len();
        for i in index::sample(rng, available, counts[zone]) {
            if let Some(prompt) = pool.prompt(zone, i) {
                prompts.push(prompt);
            }
        }
    }

    prompts.shuffle(rng);

    let cards: Vec<RoundCard> = prompts
        .into_iter()
        .enumerate()
        .map(|(index, prompt)| RoundCard {
            index,
            prompt,
            placed_in: None,
        })
        .collect();

    debug!(round_no, cards = cards.len(), "generated round");
    Ok(RoundState::new(round_no, cards))
}
