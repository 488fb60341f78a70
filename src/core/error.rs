//! Engine error taxonomy.
//!
//! The engine favors silent rejection over erroring for anything reachable
//! via normal UI races (stale clicks, double inputs, late timers) - those
//! paths simply no-op. Hard errors are reserved for genuine misconfiguration
//! surfaced to the caller at setup time: malformed AI profiles, nonsense
//! timing values, zero-seat deals.

use thiserror::Error;

/// Errors surfaced by the engine's fallible entry points.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Caller supplied a malformed argument (zero-seat deal, profile with
    /// min > max, non-positive timeout). The only variant returned from
    /// setup APIs.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An action raced the state machine (playing during a tap window,
    /// tapping during a pause). Ignored internally, never returned; the
    /// variant exists so collaborators can classify rejections they log.
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// A per-match budget ran out (tap attempt with zero allowances left).
    /// Treated as a silent no-op inside the engine.
    #[error("exhausted resource: {0}")]
    ExhaustedResource(String),
}
