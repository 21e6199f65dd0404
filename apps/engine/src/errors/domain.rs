//! Domain-level error type used by the round generator, gesture tracker
//! and scoring engine.
//!
//! This error type knows nothing about storage or configuration. Callers
//! outside the domain return `Result<T, crate::error::AppError>` and
//! convert through the provided `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::Zone;

/// Why a placement referenced a card the round cannot score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIndexFault {
    /// Index is past the end of the round's card list.
    OutOfRange { len: usize },
    /// Card was already scored earlier in the round.
    AlreadyPlaced,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A zone's pool holds fewer prompts than the round asked for.
    InsufficientPoolSize {
        zone: Zone,
        requested: usize,
        available: usize,
    },
    /// Placement referenced an unknown or already-placed card.
    InvalidCardIndex { index: usize, fault: CardIndexFault },
    /// Round would contain no cards (all requested counts are zero).
    EmptyRound,
    /// Two drop-zone rectangles intersect.
    OverlappingDropZones { first: Zone, second: Zone },
    /// Any other rule violation.
    Validation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InsufficientPoolSize {
                zone,
                requested,
                available,
            } => write!(
                f,
                "insufficient pool size for {zone}: requested {requested}, available {available}"
            ),
            DomainError::InvalidCardIndex { index, fault } => match fault {
                CardIndexFault::OutOfRange { len } => {
                    write!(f, "invalid card index {index}: round has {len} cards")
                }
                CardIndexFault::AlreadyPlaced => {
                    write!(f, "invalid card index {index}: card already placed")
                }
            },
            DomainError::EmptyRound => write!(f, "round has no cards"),
            DomainError::OverlappingDropZones { first, second } => {
                write!(f, "drop zones {first} and {second} overlap")
            }
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::InvalidCardIndex {
            index,
            fault: CardIndexFault::OutOfRange { len },
        }
    }

    pub fn already_placed(index: usize) -> Self {
        Self::InvalidCardIndex {
            index,
            fault: CardIndexFault::AlreadyPlaced,
        }
    }
}
