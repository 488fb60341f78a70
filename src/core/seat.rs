//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier. A match always has [`SEAT_COUNT`] seats:
//! seat 0 is the human, seats 1-3 are AI opponents.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat data storage backed by an array for O(1) access.
//! Supports iteration and indexing by `SeatId`. Seat indices are the
//! stable keys for every per-seat table in the engine (hands, profiles,
//! elimination flags) - no nullable references, only "active" predicates.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a match: one human plus three AI opponents.
pub const SEAT_COUNT: usize = 4;

/// Seat identifier, 0-based. Seat 0 is the human seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// The human seat.
    pub const HUMAN: SeatId = SeatId(0);

    /// Create a new seat ID.
    ///
    /// Panics if `id` is out of range; seat IDs arriving from external
    /// input go through [`SeatId::try_new`] instead.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!((id as usize) < SEAT_COUNT, "Seat index out of range");
        Self(id)
    }

    /// Create a seat ID from untrusted input.
    #[must_use]
    pub fn try_new(id: usize) -> Option<Self> {
        (id < SEAT_COUNT).then(|| Self(id as u8))
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the human seat.
    #[must_use]
    pub const fn is_human(self) -> bool {
        self.0 == 0
    }

    /// The next seat in rotation order.
    ///
    /// Rotation is ascending seat index, wrapping at [`SEAT_COUNT`].
    /// This is the one fixed traversal direction used everywhere in the
    /// engine - turn advance and challenge hand-off both use it.
    #[must_use]
    pub const fn next(self) -> SeatId {
        SeatId((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// Iterate over all seat IDs in rotation order.
    pub fn all() -> impl Iterator<Item = SeatId> {
        (0..SEAT_COUNT as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `[T; SEAT_COUNT]` array. Use `SeatMap::new()` to create
/// with a factory function, or `SeatMap::with_value()` to initialize all
/// entries to the same value.
///
/// ## Example
///
/// ```
/// use tapjack::core::{SeatId, SeatMap};
///
/// let mut scores: SeatMap<i64> = SeatMap::with_value(0);
///
/// scores[SeatId::new(1)] = 15;
/// assert_eq!(scores[SeatId::new(1)], 15);
/// assert_eq!(scores[SeatId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    ///
    /// The factory receives the `SeatId` for each seat.
    pub fn new(factory: impl Fn(SeatId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(SeatId(i as u8))),
        }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over (SeatId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SeatId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }
}

impl<T> From<[T; SEAT_COUNT]> for SeatMap<T> {
    fn from(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
