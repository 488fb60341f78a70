//! Core engine types: seats, RNG, configuration, errors.
//!
//! This module contains the fundamental building blocks shared by every
//! subsystem. Nothing here mutates match state; the coordinator in
//! `crate::game` owns that.

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{Difficulty, MatchConfig};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
pub use seat::{SeatId, SeatMap, SEAT_COUNT};
