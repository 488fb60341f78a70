//! Tap detection and resolution.
//!
//! The single source of truth for "is there a valid tap opportunity right
//! now" and for fairly resolving concurrent tap attempts. The engine here
//! owns only window state - pattern flags, generation counter, the pending
//! first attempt, assist modifiers. Pile and hand mutation stay with the
//! match coordinator, which calls in after every card addition and on
//! every external tap attempt.
//!
//! ## Window generations
//!
//! Each opened window gets a fresh generation number. AI reaction timers
//! and the tie-break timer are tagged with the generation they were
//! scheduled under; once the window closes (resolution or lapse) the
//! generation moves on and stale timers no-op.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::SeatId;

/// Lowest allowed assist reaction-time multiplier.
pub const MIN_ASSIST_MULTIPLIER: f64 = 0.5;

/// A detected pile pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapPattern {
    /// Two most recently played cards share rank.
    Double,
    /// Most recent and third-most-recent cards share rank.
    Sandwich,
}

/// The recorded first attempt on an open window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingAttempt {
    seat: SeatId,
    at: Duration,
    is_human: bool,
}

/// Outcome of registering a tap attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapVerdict {
    /// No open window: the attempt is a false tap. The coordinator checks
    /// the seat's allowance and applies the penalty choreography.
    FalseTap,
    /// First attempt on this window; schedule a tie-break timer for
    /// `resolve_at` and wait for a rival.
    Pending { resolve_at: Duration },
    /// The window resolved to this winner and is now closed.
    Winner(SeatId),
}

/// Tap window lifecycle and arbitration.
#[derive(Clone, Debug)]
pub struct TapEngine {
    doubles_enabled: bool,
    sandwiches_enabled: bool,
    tie_break_window: Duration,
    open: bool,
    generation: u64,
    pending: Option<PendingAttempt>,
    assist_multiplier: f64,
    assist_delay_s: f64,
}

impl TapEngine {
    /// Create a tap engine with the match's rule toggles.
    #[must_use]
    pub fn new(doubles_enabled: bool, sandwiches_enabled: bool, tie_break_window: Duration) -> Self {
        Self {
            doubles_enabled,
            sandwiches_enabled,
            tie_break_window,
            open: false,
            generation: 0,
            pending: None,
            assist_multiplier: 1.0,
            assist_delay_s: 0.0,
        }
    }

    /// Evaluate the pile after a card addition.
    ///
    /// Doubles are checked before sandwiches; with both enabled a pile
    /// ending [7, x, 7, 7] reports a double off the last two cards.
    #[must_use]
    pub fn detect(&self, pile: &Vector<Card>) -> Option<TapPattern> {
        let n = pile.len();
        if self.doubles_enabled && n >= 2 && pile[n - 1].rank == pile[n - 2].rank {
            return Some(TapPattern::Double);
        }
        if self.sandwiches_enabled && n >= 3 && pile[n - 1].rank == pile[n - 3].rank {
            return Some(TapPattern::Sandwich);
        }
        None
    }

    /// Whether a window is currently open and valid.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Generation of the current (or most recent) window.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open a fresh window: resets tie tracking, bumps the generation.
    ///
    /// Returns the new generation for tagging AI reaction timers.
    pub fn open_window(&mut self) -> u64 {
        self.generation += 1;
        self.open = true;
        self.pending = None;
        tracing::debug!(generation = self.generation, "tap window opened");
        self.generation
    }

    /// Close the window without a winner (non-matching card addition,
    /// grace expiry, teardown). Safe to call when already closed.
    pub fn close_window(&mut self) {
        if self.open {
            tracing::debug!(generation = self.generation, "tap window closed");
        }
        self.open = false;
        self.pending = None;
    }

    /// Register a tap attempt at `now`.
    ///
    /// Arbitration: the first attempt on a window goes pending until the
    /// tie-break interval elapses. A second attempt inside that interval
    /// is simultaneous - the human wins if either attempt is human,
    /// otherwise the earliest. Outside the interval the earliest wins
    /// unconditionally. A `Winner` verdict closes the window; the caller
    /// transfers the pile.
    pub fn register_attempt(&mut self, seat: SeatId, is_human: bool, now: Duration) -> TapVerdict {
        if !self.open {
            return TapVerdict::FalseTap;
        }

        match self.pending {
            None => {
                self.pending = Some(PendingAttempt {
                    seat,
                    at: now,
                    is_human,
                });
                TapVerdict::Pending {
                    resolve_at: now + self.tie_break_window,
                }
            }
            Some(first) => {
                let gap = now.saturating_sub(first.at);
                let winner = if gap <= self.tie_break_window {
                    if first.is_human {
                        first.seat
                    } else if is_human {
                        seat
                    } else {
                        first.seat
                    }
                } else {
                    first.seat
                };
                self.close_window();
                TapVerdict::Winner(winner)
            }
        }
    }

    /// The tie-break timer elapsed with no rival: the lone pending
    /// attempt wins. Returns `None` if the timer is stale (window already
    /// resolved or lapsed).
    pub fn resolve_tie_break(&mut self, window: u64) -> Option<SeatId> {
        if !self.open || window != self.generation {
            return None;
        }
        let first = self.pending.take()?;
        self.close_window();
        Some(first.seat)
    }

    /// Set assist modifiers for future AI reaction schedules.
    ///
    /// The multiplier is clamped to at least [`MIN_ASSIST_MULTIPLIER`]
    /// and the additive delay to non-negative. Returns `true` if the
    /// assist active/inactive status changed.
    pub fn set_assist(&mut self, multiplier: f64, additive_delay_s: f64) -> bool {
        let was_active = self.assist_active();
        self.assist_multiplier = multiplier.max(MIN_ASSIST_MULTIPLIER);
        self.assist_delay_s = additive_delay_s.max(0.0);
        self.assist_active() != was_active
    }

    /// Whether assist modifiers differ from neutral.
    #[must_use]
    pub fn assist_active(&self) -> bool {
        self.assist_multiplier != 1.0 || self.assist_delay_s != 0.0
    }

    /// The current reaction-time multiplier. Also stretches AI play
    /// delays, so easing a player's match eases the whole pace.
    #[must_use]
    pub fn assist_multiplier(&self) -> f64 {
        self.assist_multiplier
    }

    /// Apply assist modifiers to a sampled reaction delay in seconds.
    #[must_use]
    pub fn scale_reaction(&self, seconds: f64) -> f64 {
        seconds * self.assist_multiplier + self.assist_delay_s
    }
}
