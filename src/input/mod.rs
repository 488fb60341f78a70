//! External action routing.
//!
//! The router is the single doorway from the outside world (input-device
//! mapping, network, scripted harnesses) into the coordinator. It maps
//! `ActionEvent` values to engine calls and enforces the gating the
//! engine's real-time model expects: stale or out-of-range input is
//! silently dropped, never an error. Only a malformed new-match
//! configuration surfaces as a hard failure.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, MatchConfig, SeatId};
use crate::game::MatchEngine;

/// An external action event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionEvent {
    /// Play the current seat's top card (human input).
    PlayTopCard,
    /// Attempt a tap for a seat.
    AttemptTap { seat: usize },
    /// Start a new match with a resolved configuration.
    NewMatch { config: MatchConfig },
    /// Freeze the match clock.
    Pause,
    /// Unfreeze the match clock.
    Resume,
}

/// Stateless router from action events to coordinator calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputRouter;

impl InputRouter {
    /// Route one action event into the engine.
    ///
    /// Gating rules:
    /// - `PlayTopCard` only reaches the engine while the play loop is
    ///   active with the human seat current (the engine enforces this;
    ///   the router just forwards).
    /// - `AttemptTap` with an out-of-range seat index is dropped.
    /// - Only `NewMatch` can fail, and only for misconfiguration.
    pub fn route(engine: &mut MatchEngine, event: &ActionEvent) -> Result<(), EngineError> {
        match event {
            ActionEvent::PlayTopCard => {
                engine.play_current_top();
                Ok(())
            }
            ActionEvent::AttemptTap { seat } => {
                if let Some(seat) = SeatId::try_new(*seat) {
                    engine.attempt_tap(seat);
                }
                Ok(())
            }
            ActionEvent::NewMatch { config } => engine.start_new_game(config.clone()),
            ActionEvent::Pause => {
                engine.set_paused(true);
                Ok(())
            }
            ActionEvent::Resume => {
                engine.set_paused(false);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfig;

    #[test]
    fn test_new_match_routes_config() {
        let mut engine = MatchEngine::new();
        let event = ActionEvent::NewMatch {
            config: MatchConfig {
                seed: Some(11),
                ..MatchConfig::default()
            },
        };

        InputRouter::route(&mut engine, &event).unwrap();
        assert_eq!(engine.seed(), 11);
    }

    #[test]
    fn test_bad_config_surfaces_error() {
        let mut engine = MatchEngine::new();
        let event = ActionEvent::NewMatch {
            config: MatchConfig {
                turn_timeout_s: f64::NAN,
                ..MatchConfig::default()
            },
        };

        assert!(InputRouter::route(&mut engine, &event).is_err());
    }

    #[test]
    fn test_out_of_range_seat_is_dropped() {
        let mut engine = MatchEngine::new();
        InputRouter::route(
            &mut engine,
            &ActionEvent::NewMatch {
                config: MatchConfig {
                    seed: Some(11),
                    ..MatchConfig::default()
                },
            },
        )
        .unwrap();

        // Seat 9 does not exist; nothing happens, nothing errors.
        InputRouter::route(&mut engine, &ActionEvent::AttemptTap { seat: 9 }).unwrap();
        for seat in crate::core::SeatId::all() {
            assert_eq!(
                engine.player(seat).tap_challenges_left(),
                engine.config().tap_challenge_allowance
            );
        }
    }

    #[test]
    fn test_action_event_serde_round_trip() {
        let event = ActionEvent::AttemptTap { seat: 2 };
        let json = serde_json::to_string(&event).unwrap();
        let back: ActionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
