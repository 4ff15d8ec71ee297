//! Builder API for game configurations.

use super::{ConfigError, GameConfig, ScoreFloor, SelectionStrategy};

/// Fluent builder for [`GameConfig`]. Starts from the defaults.
#[derive(Debug, Clone, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_score(mut self, score: i32) -> Self {
        self.config.max_score = score;
        self
    }

    pub fn min_score(mut self, score: i32) -> Self {
        self.config.min_score = score;
        self
    }

    /// Points lost per wrong answer
    pub fn score_decrement(mut self, points: i32) -> Self {
        self.config.score_decrement = points;
        self
    }

    pub fn total_questions(mut self, n: u32) -> Self {
        self.config.total_questions = n;
        self
    }

    pub fn max_attempt(mut self, n: u32) -> Self {
        self.config.max_attempt = n;
        self
    }

    pub fn tick_interval_ms(mut self, ms: u64) -> Self {
        self.config.tick_interval_ms = ms;
        self
    }

    pub fn score_floor(mut self, floor: ScoreFloor) -> Self {
        self.config.score_floor = floor;
        self
    }

    pub fn selection(mut self, strategy: SelectionStrategy) -> Self {
        self.config.selection = strategy;
        self
    }

    /// Build the configuration.
    /// Returns every violated rule if the result would be invalid.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;

    #[test]
    fn builder_overrides_defaults() {
        let config = GameConfigBuilder::new()
            .max_score(50)
            .score_decrement(10)
            .total_questions(2)
            .max_attempt(1)
            .tick_interval_ms(250)
            .selection(SelectionStrategy::Shuffled)
            .build()
            .unwrap();

        assert_eq!(config.max_score, 50);
        assert_eq!(config.score_decrement, 10);
        assert_eq!(config.total_questions, 2);
        assert_eq!(config.max_attempt, 1);
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.selection, SelectionStrategy::Shuffled);
        assert_eq!(config.min_score, 0);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let result = GameConfigBuilder::new().total_questions(0).build();

        let err = result.unwrap_err();
        assert_eq!(err.violations(), &[ConfigViolation::NoQuestions]);
    }

    #[test]
    fn builder_rejects_inverted_score_range() {
        let result = GameConfigBuilder::new().max_score(10).min_score(20).build();

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(ref v)) if v == &[ConfigViolation::ScoreRange { min: 20, max: 10 }]
        ));
    }
}
