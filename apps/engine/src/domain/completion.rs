//! Deferred, cancellable round-completion signal.
//!
//! The completion summary is shown a short moment after the last card
//! lands so its feedback animation can finish. The delay is driven by the
//! host clock through [`CompletionTimer::advance`]; starting a new round
//! issues a new [`RoundToken`], and a timer armed for an older token never
//! fires.

use crate::domain::RoundComplete;

/// Identity of one round within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundToken(u64);

impl RoundToken {
    pub const fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    token: RoundToken,
    remaining_ms: u64,
    summary: RoundComplete,
}

#[derive(Debug, Clone)]
pub struct CompletionTimer {
    live: RoundToken,
    pending: Option<Pending>,
}

impl Default for CompletionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionTimer {
    pub fn new() -> Self {
        Self {
            live: RoundToken::first(),
            pending: None,
        }
    }

    /// Token of the round currently in play.
    pub fn live_token(&self) -> RoundToken {
        self.live
    }

    /// Move on to a new round, cancelling anything still pending.
    pub fn start_round(&mut self) -> RoundToken {
        self.live = self.live.next();
        self.pending = None;
        self.live
    }

    /// Schedule `summary` to fire after `delay_ms` for the live round.
    pub fn arm(&mut self, summary: RoundComplete, delay_ms: u64) {
        self.pending = Some(Pending {
            token: self.live,
            remaining_ms: delay_ms,
            summary,
        });
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some_and(|p| p.token == self.live)
    }

    /// Let `elapsed_ms` pass; returns the summary once its delay is over.
    pub fn advance(&mut self, elapsed_ms: u64) -> Option<RoundComplete> {
        let mut pending = self.pending.take()?;
        if pending.token != self.live {
            return None;
        }
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms == 0 {
            return Some(pending.summary);
        }
        self.pending = Some(pending);
        None
    }
}
