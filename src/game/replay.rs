//! Match replay logs.
//!
//! A replay is the resolved configuration, the seed actually used, and the
//! timestamped external inputs of one match. Because every other source of
//! variation flows through the seeded RNG, driving a fresh engine with the
//! same log reproduces the match bit-for-bit - the event stream, the final
//! hands, the winner. Logs encode compactly with `bincode` for storage by
//! the (external) persistence layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, MatchConfig};
use crate::game::MatchEngine;
use crate::input::{ActionEvent, InputRouter};

/// One timestamped external input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    /// Match-clock instant the input arrived.
    pub at: Duration,
    /// The input itself.
    pub event: ActionEvent,
}

/// A recorded match: configuration, seed, and scripted inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayLog {
    config: MatchConfig,
    seed: u64,
    steps: Vec<ReplayStep>,
}

impl ReplayLog {
    /// Start a log for a match running on `seed`.
    ///
    /// The stored configuration pins that seed, so replaying never
    /// depends on what the original config left to entropy.
    #[must_use]
    pub fn new(config: &MatchConfig, seed: u64) -> Self {
        let config = MatchConfig {
            seed: Some(seed),
            ..config.clone()
        };
        Self {
            config,
            seed,
            steps: Vec::new(),
        }
    }

    /// Record an input at a match-clock instant.
    ///
    /// Steps must be recorded in clock order; `drive` replays them in
    /// the order given.
    pub fn record(&mut self, at: Duration, event: ActionEvent) {
        self.steps.push(ReplayStep { at, event });
    }

    /// The seed the match ran on.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The recorded steps.
    #[must_use]
    pub fn steps(&self) -> &[ReplayStep] {
        &self.steps
    }

    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self)
            .map_err(|e| EngineError::InvalidArgument(format!("replay encode: {}", e)))
    }

    /// Decode from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes)
            .map_err(|e| EngineError::InvalidArgument(format!("replay decode: {}", e)))
    }

    /// Drive a fresh match on `engine` from this log: start with the
    /// pinned config, then advance the clock to each step and route it.
    ///
    /// The engine keeps running afterwards; the caller decides how much
    /// further to advance.
    pub fn drive(&self, engine: &mut MatchEngine) -> Result<(), EngineError> {
        engine.start_new_game(self.config.clone())?;
        let mut clock = Duration::ZERO;
        for step in &self.steps {
            if step.at > clock {
                engine.advance(step.at - clock);
                clock = step.at;
            }
            InputRouter::route(engine, &step.event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_bytes() {
        let mut log = ReplayLog::new(&MatchConfig::default(), 42);
        log.record(Duration::from_millis(100), ActionEvent::PlayTopCard);
        log.record(
            Duration::from_millis(2500),
            ActionEvent::AttemptTap { seat: 0 },
        );

        let bytes = log.to_bytes().unwrap();
        let back = ReplayLog::from_bytes(&bytes).unwrap();
        assert_eq!(log, back);
    }

    #[test]
    fn test_log_pins_seed() {
        let config = MatchConfig {
            seed: None,
            ..MatchConfig::default()
        };
        let log = ReplayLog::new(&config, 77);
        assert_eq!(log.seed(), 77);

        let mut engine = MatchEngine::new();
        log.drive(&mut engine).unwrap();
        assert_eq!(engine.seed(), 77);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(ReplayLog::from_bytes(&[0xff, 0x01, 0x02]).is_err());
    }
}
