//! Discrete-event timer queue with generation-token staleness.
//!
//! The match runs on a single logical thread; timers are the only
//! suspension points. Instead of OS timers and callbacks, the engine keeps
//! a priority queue of scheduled `Timer` values ordered by fire time, and
//! the host drives it by advancing the clock. Every timer carries the
//! generation token that was current when it was scheduled (turn token,
//! tap-window generation, or pause token); the coordinator re-validates
//! the token at dispatch, so a timer that outlived its context is a
//! silent no-op rather than a state corruption.
//!
//! Two timers scheduled for the same instant dispatch in schedule order
//! (sequence number tie-break), which keeps dispatch fully deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::core::SeatId;

/// A scheduled callback, tagged with the generation it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    /// Turn timeout: force one card from the current seat.
    TurnTimeout { token: u64 },
    /// An AI seat plays its top card.
    AiPlay { seat: SeatId, token: u64 },
    /// An AI seat reacts to an open tap window.
    TapReaction { seat: SeatId, window: u64 },
    /// An AI seat taps spontaneously with no window open.
    FalseTapUrge { seat: SeatId, token: u64 },
    /// The tie-break interval after a first tap attempt elapsed.
    TieBreak { window: u64 },
    /// The post-challenge tap grace interval elapsed.
    GraceExpiry { window: u64 },
    /// A choreography pause (mis-tap or pile-clear) finished.
    PauseOver { token: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    fire_at: Duration,
    seq: u64,
    timer: Timer,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fire_at
            .cmp(&other.fire_at)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of scheduled timers.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use tapjack::timers::{Timer, TimerQueue};
///
/// let mut queue = TimerQueue::new();
/// queue.schedule(Duration::from_millis(500), Timer::TurnTimeout { token: 1 });
///
/// assert!(queue.pop_due(Duration::from_millis(499)).is_none());
/// let (at, timer) = queue.pop_due(Duration::from_millis(500)).unwrap();
/// assert_eq!(at, Duration::from_millis(500));
/// assert_eq!(timer, Timer::TurnTimeout { token: 1 });
/// ```
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl TimerQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer at an absolute clock instant.
    pub fn schedule(&mut self, fire_at: Duration, timer: Timer) {
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            fire_at,
            seq: self.seq,
            timer,
        }));
    }

    /// Pop the earliest timer due at or before `now`, with its fire time.
    ///
    /// The fire time matters: dispatch sets the clock to it, so callbacks
    /// observe the instant they were scheduled for, not the end of the
    /// host's frame.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, Timer)> {
        if self.heap.peek().map_or(true, |Reverse(e)| e.fire_at > now) {
            return None;
        }
        self.heap
            .pop()
            .map(|Reverse(e)| (e.fire_at, e.timer))
    }

    /// Fire time of the earliest scheduled timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(e)| e.fire_at)
    }

    /// Drop every scheduled timer. Used at teardown; combined with the
    /// shutdown flag this guarantees no late callback touches dead state.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Number of scheduled timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_pops_in_time_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(300), Timer::TurnTimeout { token: 3 });
        queue.schedule(ms(100), Timer::TurnTimeout { token: 1 });
        queue.schedule(ms(200), Timer::TurnTimeout { token: 2 });

        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(1000)))
            .map(|(at, _)| at)
            .collect();
        assert_eq!(order, vec![ms(100), ms(200), ms(300)]);
    }

    #[test]
    fn test_same_instant_dispatches_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(100), Timer::TurnTimeout { token: 1 });
        queue.schedule(
            ms(100),
            Timer::AiPlay {
                seat: SeatId::new(1),
                token: 1,
            },
        );

        let (_, first) = queue.pop_due(ms(100)).unwrap();
        let (_, second) = queue.pop_due(ms(100)).unwrap();
        assert_eq!(first, Timer::TurnTimeout { token: 1 });
        assert!(matches!(second, Timer::AiPlay { .. }));
    }

    #[test]
    fn test_not_due_yet() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(100), Timer::TieBreak { window: 1 });

        assert!(queue.pop_due(ms(99)).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_due(ms(100)).is_some());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_next_due() {
        let mut queue = TimerQueue::new();
        assert_eq!(queue.next_due(), None);

        queue.schedule(ms(250), Timer::GraceExpiry { window: 1 });
        queue.schedule(ms(50), Timer::TieBreak { window: 1 });
        assert_eq!(queue.next_due(), Some(ms(50)));
    }

    #[test]
    fn test_clear() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(10), Timer::PauseOver { token: 1 });
        queue.schedule(ms(20), Timer::PauseOver { token: 2 });

        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.pop_due(ms(1000)).is_none());
    }
}
