//! AI opponent parameters: timing profiles and difficulty presets.

pub mod profile;

pub use profile::{default_assist, preset_profiles, AiProfile};
