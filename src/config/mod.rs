//! Game configuration.
//!
//! A [`GameConfig`] fixes the scoring and pacing rules of every session
//! started from it. Configurations are validated with Stillwater's
//! `Validation` so a bad config reports every broken rule at once.
//!
//! # Example
//!
//! ```rust
//! use geoquiz::config::{GameConfig, ScoreFloor};
//!
//! let config = GameConfig::builder()
//!     .total_questions(10)
//!     .score_floor(ScoreFloor::Clamped)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.total_questions, 10);
//! assert_eq!(config.max_score, 100);
//! ```

pub mod builder;
pub mod error;

pub use builder::GameConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub const MAX_SCORE: i32 = 100;
pub const MIN_SCORE: i32 = 0;
pub const SCORE_DECREMENT: i32 = 5;
pub const TOTAL_QUESTIONS: u32 = 15;
pub const MAX_ATTEMPT: u32 = 3;
pub const TICK_INTERVAL_MS: u64 = 1000;

/// How a wrong answer's penalty treats the minimum score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFloor {
    /// Skip the penalty only when the score is already at or below the
    /// minimum. A penalty starting above the minimum is applied in full and
    /// may leave the score below it (3 - 5 = -2).
    #[default]
    Guarded,
    /// Never let a penalty take the score below the minimum.
    Clamped,
}

/// How the next question is drawn from the question set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Independent uniform draw each time; repeats are possible.
    #[default]
    Uniform,
    /// Deal from a shuffled deck, reshuffling once every question was shown.
    Shuffled,
}

/// Rules for a quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_score: i32,
    pub min_score: i32,
    pub score_decrement: i32,
    /// Questions shown per session, counting the first one
    pub total_questions: u32,
    /// Wrong answers allowed on one question before moving on
    pub max_attempt: u32,
    pub tick_interval_ms: u64,
    pub score_floor: ScoreFloor,
    pub selection: SelectionStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_score: MAX_SCORE,
            min_score: MIN_SCORE,
            score_decrement: SCORE_DECREMENT,
            total_questions: TOTAL_QUESTIONS,
            max_attempt: MAX_ATTEMPT,
            tick_interval_ms: TICK_INTERVAL_MS,
            score_floor: ScoreFloor::default(),
            selection: SelectionStrategy::default(),
        }
    }
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = vec![
            check(self.total_questions > 0, ConfigViolation::NoQuestions),
            check(self.max_attempt > 0, ConfigViolation::NoAttempts),
            check(
                self.score_decrement > 0,
                ConfigViolation::NonPositiveDecrement(self.score_decrement),
            ),
            check(self.tick_interval_ms > 0, ConfigViolation::ZeroTickInterval),
            check(
                self.max_score >= self.min_score,
                ConfigViolation::ScoreRange {
                    min: self.min_score,
                    max: self.max_score,
                },
            ),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
