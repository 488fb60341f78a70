//! Match configuration.
//!
//! The engine reads one resolved `MatchConfig` at match start. Persisted
//! settings, menus, and tutorial flags live in the excluded configuration
//! layer; by the time a config reaches the engine every field is concrete.
//!
//! All timing fields are seconds as `f64`; the coordinator converts to
//! `Duration` when scheduling.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// AI difficulty tier. Selects the opponent profile preset and whether
/// the reaction-assist modifiers start active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Slow AI reactions, assist modifiers on by default.
    Easy,
    /// Baseline profiles, no assist.
    Normal,
    /// Tight reaction ranges, low miss rates.
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Normal
    }
}

/// Resolved configuration for one match.
///
/// ## Example
///
/// ```
/// use tapjack::core::MatchConfig;
///
/// let config = MatchConfig {
///     enable_sandwiches: false,
///     seed: Some(42),
///     ..MatchConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Doubles (two most recent ranks equal) open tap windows.
    pub enable_doubles: bool,

    /// Sandwiches (most recent and third-most-recent ranks equal) open
    /// tap windows.
    pub enable_sandwiches: bool,

    /// Per-turn timeout in seconds; expiry forces one card from the
    /// current seat's hand.
    pub turn_timeout_s: f64,

    /// False taps each seat may make before further taps are ignored.
    pub tap_challenge_allowance: u8,

    /// Opponent difficulty tier.
    pub difficulty: Difficulty,

    /// Two tap attempts closer than this are simultaneous and human-biased.
    pub tie_break_window_s: f64,

    /// Grace interval after a failed challenge whose terminal card also
    /// completed a pattern: any seat may still win the pile by tap.
    pub tap_grace_window_s: f64,

    /// Choreography pause after a false-tap penalty.
    pub mis_tap_pause_s: f64,

    /// Choreography pause after any pile award.
    pub pile_clear_pause_s: f64,

    /// Lower bound on sampled AI play delays.
    pub ai_play_delay_floor_s: f64,

    /// Lower bound on sampled AI tap reactions; keeps AI reaction human
    /// even under tight profiles.
    pub ai_tap_reaction_floor_s: f64,

    /// Shuffle seed. `None` draws one from OS entropy (the engine still
    /// reports the seed it used).
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            enable_doubles: true,
            enable_sandwiches: true,
            turn_timeout_s: 3.0,
            tap_challenge_allowance: 3,
            difficulty: Difficulty::Normal,
            tie_break_window_s: 0.020,
            tap_grace_window_s: 0.5,
            mis_tap_pause_s: 1.2,
            pile_clear_pause_s: 1.0,
            ai_play_delay_floor_s: 0.35,
            ai_tap_reaction_floor_s: 1.5,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Validate the configuration.
    ///
    /// Returns `InvalidArgument` for values the state machine cannot run
    /// with. Rule toggles may both be off - that is a legal (tap-less)
    /// variant, not an error.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.turn_timeout_s > 0.0) {
            return Err(EngineError::InvalidArgument(format!(
                "turn timeout must be positive, got {}",
                self.turn_timeout_s
            )));
        }
        if !(self.tie_break_window_s >= 0.0) {
            return Err(EngineError::InvalidArgument(format!(
                "tie-break window must be non-negative, got {}",
                self.tie_break_window_s
            )));
        }
        for (name, value) in [
            ("tap grace window", self.tap_grace_window_s),
            ("mis-tap pause", self.mis_tap_pause_s),
            ("pile-clear pause", self.pile_clear_pause_s),
            ("AI play delay floor", self.ai_play_delay_floor_s),
            ("AI tap reaction floor", self.ai_tap_reaction_floor_s),
        ] {
            if !(value >= 0.0) {
                return Err(EngineError::InvalidArgument(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = MatchConfig {
            turn_timeout_s: 0.0,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_pause() {
        let config = MatchConfig {
            pile_clear_pause_s: f64::NAN,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_both_patterns_disabled_is_legal() {
        let config = MatchConfig {
            enable_doubles: false,
            enable_sandwiches: false,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = MatchConfig {
            difficulty: Difficulty::Hard,
            seed: Some(99),
            ..MatchConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
