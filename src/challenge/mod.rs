//! Face-card challenge state machine.
//!
//! Pure state transitions, no timing. A face card starts a challenge with
//! the rank's chance count; each non-face play consumes one chance; at the
//! zero boundary the challenge fails and the pile is forfeited to the
//! initiator. Empty-handed responders pass the unchanged count along.
//! The coordinator owns when these transitions fire; this module only
//! guarantees the counting invariants.

use serde::{Deserialize, Serialize};

use crate::core::SeatId;

/// Outcome of a non-face play during a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeOutcome {
    /// Chances remain; the challenge continues on the next seat.
    Continue { remaining: u8 },
    /// Chances hit zero; the initiator takes the pile.
    Fail { initiator: SeatId },
}

/// Active-challenge tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeState {
    awaiting: bool,
    chances: u8,
    initiator: SeatId,
}

impl ChallengeState {
    /// No challenge active.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            awaiting: false,
            chances: 0,
            initiator: SeatId::HUMAN,
        }
    }

    /// Whether a challenge is awaiting a face card.
    #[must_use]
    pub fn awaiting(&self) -> bool {
        self.awaiting
    }

    /// Chances remaining.
    #[must_use]
    pub fn chances(&self) -> u8 {
        self.chances
    }

    /// Seat that played the challenging face card.
    #[must_use]
    pub fn initiator(&self) -> SeatId {
        self.initiator
    }

    /// Start a challenge (or overwrite the active one - a fresh face card
    /// always resets the chance count and initiator).
    pub fn start(&mut self, chances: u8, initiator: SeatId) {
        debug_assert!(chances > 0, "a challenge needs at least one chance");
        self.awaiting = true;
        self.chances = chances;
        self.initiator = initiator;
    }

    /// A responder played a non-face card.
    ///
    /// The only operation that decrements chances; failure fires exactly
    /// at the zero boundary and resets the state.
    pub fn on_non_face_played(&mut self, _seat: SeatId) -> ChallengeOutcome {
        debug_assert!(self.awaiting, "no active challenge");
        self.chances = self.chances.saturating_sub(1);
        if self.chances == 0 {
            let initiator = self.initiator;
            self.reset();
            ChallengeOutcome::Fail { initiator }
        } else {
            ChallengeOutcome::Continue {
                remaining: self.chances,
            }
        }
    }

    /// A responder had no cards: pass-through, count unchanged.
    pub fn on_player_empty(&mut self, _seat: SeatId) -> ChallengeOutcome {
        ChallengeOutcome::Continue {
            remaining: self.chances,
        }
    }

    /// Clear the challenge (failure handled, or the pile was captured).
    pub fn reset(&mut self) {
        *self = Self::idle();
    }
}

impl Default for ChallengeState {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state() {
        let challenge = ChallengeState::idle();
        assert!(!challenge.awaiting());
        assert_eq!(challenge.chances(), 0);
    }

    #[test]
    fn test_full_chain_fails_at_zero() {
        let mut challenge = ChallengeState::idle();
        challenge.start(3, SeatId::new(1));

        assert_eq!(
            challenge.on_non_face_played(SeatId::new(2)),
            ChallengeOutcome::Continue { remaining: 2 }
        );
        assert_eq!(
            challenge.on_non_face_played(SeatId::new(3)),
            ChallengeOutcome::Continue { remaining: 1 }
        );
        assert_eq!(
            challenge.on_non_face_played(SeatId::new(0)),
            ChallengeOutcome::Fail {
                initiator: SeatId::new(1)
            }
        );

        // Failure resets the machine.
        assert!(!challenge.awaiting());
        assert_eq!(challenge.chances(), 0);
    }

    #[test]
    fn test_single_chance_jack() {
        let mut challenge = ChallengeState::idle();
        challenge.start(1, SeatId::new(2));

        assert_eq!(
            challenge.on_non_face_played(SeatId::new(3)),
            ChallengeOutcome::Fail {
                initiator: SeatId::new(2)
            }
        );
    }

    #[test]
    fn test_empty_seat_passes_count_through() {
        let mut challenge = ChallengeState::idle();
        challenge.start(2, SeatId::new(0));

        assert_eq!(
            challenge.on_player_empty(SeatId::new(1)),
            ChallengeOutcome::Continue { remaining: 2 }
        );
        assert_eq!(challenge.chances(), 2);
        assert!(challenge.awaiting());
    }

    #[test]
    fn test_restart_overwrites() {
        let mut challenge = ChallengeState::idle();
        challenge.start(3, SeatId::new(1));
        challenge.on_non_face_played(SeatId::new(2));

        // A new face card overwrites chances and initiator.
        challenge.start(4, SeatId::new(2));
        assert_eq!(challenge.chances(), 4);
        assert_eq!(challenge.initiator(), SeatId::new(2));
    }

    #[test]
    fn test_reset_clears() {
        let mut challenge = ChallengeState::idle();
        challenge.start(2, SeatId::new(3));
        challenge.reset();

        assert!(!challenge.awaiting());
        assert_eq!(challenge.chances(), 0);
    }
}
