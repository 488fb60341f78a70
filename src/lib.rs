//! # tapjack
//!
//! Deterministic rules engine for a real-time four-seat card-tapping game:
//! one human and three AI opponents race to claim the shared pile when the
//! last cards played form a pattern, while face cards spring challenges.
//!
//! ## Design Principles
//!
//! 1. **One coordinator**: every mutation of shared state (hands, pile,
//!    challenge, tap window) funnels through `MatchEngine`. Nothing else
//!    mutates unsupervised.
//!
//! 2. **Discrete-event time**: timers are the only suspension points.
//!    The host advances a virtual clock; due timers dispatch in fire-time
//!    order and re-validate a generation token first, so stale callbacks
//!    are no-ops instead of corruption.
//!
//! 3. **Seed-determined**: every random decision flows through one seeded
//!    RNG. A seed plus the scripted external inputs reproduces a match
//!    bit-for-bit.
//!
//! 4. **Engine knows no UI**: collaborators observe `MatchEvent`s and
//!    drive `ActionEvent`s. Racing input is silently dropped, never a
//!    crash.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors
//! - `cards`: card values, deck construction, shuffle, deal
//! - `players`: per-seat hand queue, score, penalty allowance
//! - `ai`: opponent timing profiles and difficulty presets
//! - `events`: observer interface and event vocabulary
//! - `timers`: discrete-event timer queue
//! - `tap`: pattern detection, tap windows, tie-break arbitration
//! - `challenge`: face-card challenge state machine
//! - `game`: match coordinator, turn state machine, replay
//! - `input`: external action routing with state gating

pub mod ai;
pub mod cards;
pub mod challenge;
pub mod core;
pub mod events;
pub mod game;
pub mod input;
pub mod players;
pub mod tap;
pub mod timers;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, EngineError, GameRng, GameRngState, MatchConfig, SeatId, SeatMap, SEAT_COUNT,
};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::players::Player;

pub use crate::ai::{default_assist, preset_profiles, AiProfile};

pub use crate::events::{
    AwardReason, EventLogHandle, FnObserver, MatchEvent, MatchObserver, RecordingObserver,
};

pub use crate::timers::{Timer, TimerQueue};

pub use crate::tap::{TapEngine, TapPattern, TapVerdict};

pub use crate::challenge::{ChallengeOutcome, ChallengeState};

pub use crate::game::{MatchEngine, MatchState, ReplayLog, ReplayStep};

pub use crate::input::{ActionEvent, InputRouter};
