//! Observer interface and match events.
//!
//! The engine has zero dependency on any rendering or UI layer; everything
//! a collaborator needs to know arrives as a `MatchEvent` through the
//! `MatchObserver` trait. Collaborators register at construction time -
//! there is no capability probing at call time. Tests attach a
//! `RecordingObserver` and assert on the stream.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::SeatId;

/// Why a pile was awarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardReason {
    /// Won by tapping a detected pattern.
    Tap,
    /// Forfeited by a failed face-card challenge.
    Challenge,
}

impl AwardReason {
    /// Stable lowercase label, used in score events.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AwardReason::Tap => "tap",
            AwardReason::Challenge => "challenge",
        }
    }
}

/// Everything the engine tells the outside world.
///
/// Events fire synchronously, in order, after the state change they
/// describe has been applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Human-readable narration (the only user-visible failure channel).
    Status { message: String },
    /// The center pile changed; `top` is the label of the top card, or
    /// `None` when the pile is empty.
    PileChanged { top: Option<String> },
    /// A new seat became current.
    TurnChanged { seat: SeatId },
    /// A card landed on the pile.
    CardPlayed { seat: SeatId, card: String },
    /// A pattern was detected and the pile is claimable.
    TapWindowOpened,
    /// The window resolved or lapsed.
    TapWindowClosed,
    /// A seat tapped with no valid window open.
    FalseTap { seat: SeatId },
    /// A seat won the pile (fires before the transfer details).
    PileAwarded { seat: SeatId },
    /// The pile transfer completed.
    PileCleared {
        seat: SeatId,
        cards: u32,
        value: i64,
        reason: AwardReason,
    },
    /// Score changed for a seat.
    ScoreAwarded {
        seat: SeatId,
        delta: i64,
        reason: String,
        total: i64,
    },
    /// A face card opened a challenge with this many chances.
    ChallengeStarted { seat: SeatId, chances: u8 },
    /// A responder produced a face card, surviving the challenge.
    ChallengePassed { seat: SeatId },
    /// Chances ran out; the initiator takes the pile.
    ChallengeFailed { initiator: SeatId },
    /// The challenge was wiped by a pile clear.
    ChallengeCleared,
    /// Difficulty-assist modifiers toggled on or off.
    DdsActiveChanged { active: bool },
    /// Terminal: the match ended.
    GameOver { winner: SeatId },
}

impl MatchEvent {
    /// Stable kind label for tallies and log filtering.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MatchEvent::Status { .. } => "status",
            MatchEvent::PileChanged { .. } => "pile_changed",
            MatchEvent::TurnChanged { .. } => "turn_changed",
            MatchEvent::CardPlayed { .. } => "card_played",
            MatchEvent::TapWindowOpened => "tap_window_opened",
            MatchEvent::TapWindowClosed => "tap_window_closed",
            MatchEvent::FalseTap { .. } => "false_tap",
            MatchEvent::PileAwarded { .. } => "pile_awarded",
            MatchEvent::PileCleared { .. } => "pile_cleared",
            MatchEvent::ScoreAwarded { .. } => "score_awarded",
            MatchEvent::ChallengeStarted { .. } => "challenge_started",
            MatchEvent::ChallengePassed { .. } => "challenge_passed",
            MatchEvent::ChallengeFailed { .. } => "challenge_failed",
            MatchEvent::ChallengeCleared => "challenge_cleared",
            MatchEvent::DdsActiveChanged { .. } => "dds_active_changed",
            MatchEvent::GameOver { .. } => "game_over",
        }
    }
}

/// Listener for match events.
///
/// Observers must not call back into the engine; they receive a finished
/// fact, not an invitation to mutate.
pub trait MatchObserver {
    fn on_event(&mut self, event: &MatchEvent);
}

/// Adapter so a plain closure can subscribe.
pub struct FnObserver<F: FnMut(&MatchEvent)>(pub F);

impl<F: FnMut(&MatchEvent)> MatchObserver for FnObserver<F> {
    fn on_event(&mut self, event: &MatchEvent) {
        (self.0)(event)
    }
}

/// Shared log handle for [`RecordingObserver`].
pub type EventLogHandle = Rc<RefCell<Vec<MatchEvent>>>;

/// Observer that records every event for later inspection.
///
/// The engine owns the observer box; tests keep the shared handle.
///
/// ## Example
///
/// ```
/// use tapjack::events::{MatchEvent, MatchObserver, RecordingObserver};
///
/// let (mut observer, log) = RecordingObserver::new();
/// observer.on_event(&MatchEvent::TapWindowOpened);
///
/// assert_eq!(log.borrow().len(), 1);
/// ```
pub struct RecordingObserver {
    log: EventLogHandle,
    counts: Rc<RefCell<FxHashMap<&'static str, u32>>>,
}

impl RecordingObserver {
    /// Create a recorder and the handle to read its log.
    #[must_use]
    pub fn new() -> (Self, EventLogHandle) {
        let log: EventLogHandle = Rc::new(RefCell::new(Vec::new()));
        let observer = Self {
            log: Rc::clone(&log),
            counts: Rc::new(RefCell::new(FxHashMap::default())),
        };
        (observer, log)
    }

    /// Create a recorder that also exposes per-kind tallies.
    #[must_use]
    pub fn with_counts() -> (Self, EventLogHandle, Rc<RefCell<FxHashMap<&'static str, u32>>>) {
        let (observer, log) = Self::new();
        let counts = Rc::clone(&observer.counts);
        (observer, log, counts)
    }
}

impl MatchObserver for RecordingObserver {
    fn on_event(&mut self, event: &MatchEvent) {
        *self.counts.borrow_mut().entry(event.kind()).or_insert(0) += 1;
        self.log.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_orders_events() {
        let (mut observer, log) = RecordingObserver::new();

        observer.on_event(&MatchEvent::TurnChanged {
            seat: SeatId::new(1),
        });
        observer.on_event(&MatchEvent::TapWindowOpened);

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].kind(), "turn_changed");
        assert_eq!(log[1].kind(), "tap_window_opened");
    }

    #[test]
    fn test_recording_observer_counts() {
        let (mut observer, _log, counts) = RecordingObserver::with_counts();

        observer.on_event(&MatchEvent::TapWindowOpened);
        observer.on_event(&MatchEvent::TapWindowClosed);
        observer.on_event(&MatchEvent::TapWindowOpened);

        let counts = counts.borrow();
        assert_eq!(counts.get("tap_window_opened"), Some(&2));
        assert_eq!(counts.get("tap_window_closed"), Some(&1));
        assert_eq!(counts.get("false_tap"), None);
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = 0;
        {
            let mut observer = FnObserver(|_: &MatchEvent| seen += 1);
            observer.on_event(&MatchEvent::TapWindowOpened);
            observer.on_event(&MatchEvent::TapWindowClosed);
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = MatchEvent::PileCleared {
            seat: SeatId::new(2),
            cards: 7,
            value: 51,
            reason: AwardReason::Tap,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_award_reason_labels() {
        assert_eq!(AwardReason::Tap.label(), "tap");
        assert_eq!(AwardReason::Challenge.label(), "challenge");
    }
}
