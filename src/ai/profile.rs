//! AI opponent timing and behavior profiles.
//!
//! A profile is immutable for the duration of a match. All sampling is
//! pure over the supplied `GameRng`, so AI behavior is reproducible from
//! the match seed. Flavor content (personality, portraits) lives outside
//! the engine; `name` here is only a stable label for logs and events.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, EngineError, GameRng};

/// Tunable per-seat AI parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiProfile {
    /// Stable label for this opponent.
    pub name: String,

    /// Play delay range in seconds (min, max).
    pub play_delay_s: (f64, f64),

    /// Tap reaction range in seconds (min, max).
    pub tap_reaction_s: (f64, f64),

    /// Probability a scheduled tap reaction silently does not attempt.
    pub miss_tap_probability: f64,

    /// Rate of spontaneous false taps, per second of turn time.
    pub false_tap_per_second: f64,

    /// Seconds shaved off the play delay while a challenge is active.
    /// Negative values slow the seat down under pressure instead.
    pub face_focus_bias_s: f64,
}

impl AiProfile {
    /// Validate the profile.
    ///
    /// Malformed profiles are genuine misconfiguration and surface as
    /// hard errors rather than being silently clamped.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (what, (min, max)) in [
            ("play delay", self.play_delay_s),
            ("tap reaction", self.tap_reaction_s),
        ] {
            if !(min >= 0.0 && max >= min) {
                return Err(EngineError::InvalidArgument(format!(
                    "profile '{}': {} range must satisfy 0 <= min <= max, got ({}, {})",
                    self.name, what, min, max
                )));
            }
        }
        for (what, p) in [
            ("miss-tap probability", self.miss_tap_probability),
            ("false-tap rate", self.false_tap_per_second),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(EngineError::InvalidArgument(format!(
                    "profile '{}': {} must be in [0, 1], got {}",
                    self.name, what, p
                )));
            }
        }
        if !self.face_focus_bias_s.is_finite() {
            return Err(EngineError::InvalidArgument(format!(
                "profile '{}': face-focus bias must be finite",
                self.name
            )));
        }
        Ok(())
    }

    /// Sample a play delay in seconds.
    pub fn sample_play_delay(&self, rng: &mut GameRng) -> f64 {
        rng.gen_range_f64(self.play_delay_s.0, self.play_delay_s.1)
    }

    /// Sample a tap reaction in seconds.
    pub fn sample_tap_reaction(&self, rng: &mut GameRng) -> f64 {
        rng.gen_range_f64(self.tap_reaction_s.0, self.tap_reaction_s.1)
    }
}

/// Default assist modifiers applied at match start for a difficulty:
/// (reaction multiplier, additive reaction delay in seconds).
#[must_use]
pub fn default_assist(difficulty: Difficulty) -> (f64, f64) {
    match difficulty {
        Difficulty::Easy => (1.4, 0.25),
        Difficulty::Normal | Difficulty::Hard => (1.0, 0.0),
    }
}

/// The three opponent profiles for a difficulty tier.
///
/// Indexed by AI seat order: the profile for seat N+1 is `presets[N]`.
#[must_use]
pub fn preset_profiles(difficulty: Difficulty) -> [AiProfile; 3] {
    match difficulty {
        Difficulty::Easy => [
            AiProfile {
                name: "easy-steady".into(),
                play_delay_s: (1.2, 2.4),
                tap_reaction_s: (2.2, 3.6),
                miss_tap_probability: 0.35,
                false_tap_per_second: 0.02,
                face_focus_bias_s: 0.2,
            },
            AiProfile {
                name: "easy-drowsy".into(),
                play_delay_s: (1.5, 2.8),
                tap_reaction_s: (2.6, 4.0),
                miss_tap_probability: 0.45,
                false_tap_per_second: 0.04,
                face_focus_bias_s: 0.0,
            },
            AiProfile {
                name: "easy-jumpy".into(),
                play_delay_s: (1.0, 2.2),
                tap_reaction_s: (2.0, 3.4),
                miss_tap_probability: 0.30,
                false_tap_per_second: 0.08,
                face_focus_bias_s: 0.1,
            },
        ],
        Difficulty::Normal => [
            AiProfile {
                name: "normal-steady".into(),
                play_delay_s: (0.8, 1.8),
                tap_reaction_s: (1.7, 2.6),
                miss_tap_probability: 0.18,
                false_tap_per_second: 0.02,
                face_focus_bias_s: 0.3,
            },
            AiProfile {
                name: "normal-careful".into(),
                play_delay_s: (1.0, 2.0),
                tap_reaction_s: (1.8, 2.8),
                miss_tap_probability: 0.22,
                false_tap_per_second: 0.01,
                face_focus_bias_s: 0.2,
            },
            AiProfile {
                name: "normal-jumpy".into(),
                play_delay_s: (0.7, 1.6),
                tap_reaction_s: (1.6, 2.5),
                miss_tap_probability: 0.15,
                false_tap_per_second: 0.06,
                face_focus_bias_s: 0.35,
            },
        ],
        Difficulty::Hard => [
            AiProfile {
                name: "hard-sharp".into(),
                play_delay_s: (0.5, 1.1),
                tap_reaction_s: (1.5, 2.0),
                miss_tap_probability: 0.06,
                false_tap_per_second: 0.01,
                face_focus_bias_s: 0.4,
            },
            AiProfile {
                name: "hard-patient".into(),
                play_delay_s: (0.6, 1.3),
                tap_reaction_s: (1.5, 2.1),
                miss_tap_probability: 0.08,
                false_tap_per_second: 0.0,
                face_focus_bias_s: 0.3,
            },
            AiProfile {
                name: "hard-vicious".into(),
                play_delay_s: (0.4, 1.0),
                tap_reaction_s: (1.5, 1.9),
                miss_tap_probability: 0.05,
                false_tap_per_second: 0.03,
                face_focus_bias_s: 0.5,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_profile() -> AiProfile {
        AiProfile {
            name: "test".into(),
            play_delay_s: (0.5, 1.5),
            tap_reaction_s: (1.0, 2.0),
            miss_tap_probability: 0.1,
            false_tap_per_second: 0.05,
            face_focus_bias_s: 0.2,
        }
    }

    #[test]
    fn test_presets_are_valid() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            for profile in preset_profiles(difficulty) {
                profile.validate().unwrap_or_else(|e| {
                    panic!("preset {:?}/{} invalid: {}", difficulty, profile.name, e)
                });
            }
        }
    }

    #[test]
    fn test_rejects_inverted_range() {
        let profile = AiProfile {
            play_delay_s: (2.0, 1.0),
            ..base_profile()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_delay() {
        let profile = AiProfile {
            tap_reaction_s: (-0.5, 1.0),
            ..base_profile()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let profile = AiProfile {
            miss_tap_probability: 1.5,
            ..base_profile()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_sampling_within_range() {
        let profile = base_profile();
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            let d = profile.sample_play_delay(&mut rng);
            assert!((0.5..1.5).contains(&d));
            let r = profile.sample_tap_reaction(&mut rng);
            assert!((1.0..2.0).contains(&r));
        }
    }

    #[test]
    fn test_sampling_deterministic() {
        let profile = base_profile();
        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);

        for _ in 0..20 {
            assert_eq!(
                profile.sample_play_delay(&mut rng1),
                profile.sample_play_delay(&mut rng2)
            );
        }
    }

    #[test]
    fn test_easy_assist_is_active() {
        let (mult, add) = default_assist(Difficulty::Easy);
        assert!(mult > 1.0);
        assert!(add > 0.0);

        assert_eq!(default_assist(Difficulty::Normal), (1.0, 0.0));
    }
}
