//! Configuration error types.

use thiserror::Error;

/// A single rule a [`GameConfig`](super::GameConfig) breaks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("total_questions must be greater than zero")]
    NoQuestions,

    #[error("max_attempt must be greater than zero")]
    NoAttempts,

    #[error("score_decrement must be positive (got {0})")]
    NonPositiveDecrement(i32),

    #[error("tick_interval_ms must be greater than zero")]
    ZeroTickInterval,

    #[error("max_score ({max}) is below min_score ({min})")]
    ScoreRange { min: i32, max: i32 },
}

/// Errors that can occur when building or loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every violated rule, not just the first one found
    #[error(
        "Invalid game configuration: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    Invalid(Vec<ConfigViolation>),

    /// Configuration text could not be parsed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}

impl ConfigError {
    /// Violations carried by an `Invalid` error; empty otherwise.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::DeserializationFailed(_) => &[],
        }
    }
}
