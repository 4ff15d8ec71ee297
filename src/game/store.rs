//! Score, question progression and session timestamps.

use super::selector::QuestionSelector;
use crate::config::{GameConfig, ScoreFloor};
use crate::core::{GamePhase, Question, State, StateHistory, StateTransition};
use crate::timer::StartTime;
use chrono::{DateTime, Utc};
use tokio::sync::watch;

/// State of the current quiz session.
///
/// `Game` holds the data; [`Session`](super::Session) drives it together
/// with the timer and answer tracker.
pub struct Game {
    config: GameConfig,
    score: i32,
    current_question_count: u32,
    questions: Vec<Question>,
    current: Option<usize>,
    start_at: watch::Sender<Option<DateTime<Utc>>>,
    end_at: Option<DateTime<Utc>>,
    phase: GamePhase,
    history: StateHistory<GamePhase>,
    selector: QuestionSelector,
}

impl Game {
    pub fn new(config: GameConfig, selector: QuestionSelector) -> Self {
        let (start_at, _) = watch::channel(None);
        Self {
            score: config.max_score,
            config,
            current_question_count: 0,
            questions: Vec::new(),
            current: None,
            start_at,
            end_at: None,
            phase: GamePhase::NotStarted,
            history: StateHistory::new(),
            selector,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn total_question_count(&self) -> u32 {
        self.config.total_questions
    }

    pub fn current_question_count(&self) -> u32 {
        self.current_question_count
    }

    pub fn max_attempt(&self) -> u32 {
        self.config.max_attempt
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.and_then(|i| self.questions.get(i))
    }

    pub fn start_at(&self) -> Option<DateTime<Utc>> {
        *self.start_at.borrow()
    }

    pub fn end_at(&self) -> Option<DateTime<Utc>> {
        self.end_at
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn history(&self) -> &StateHistory<GamePhase> {
        &self.history
    }

    /// Receiver for the start time, read by the timer on every tick.
    pub fn subscribe_start(&self) -> StartTime {
        self.start_at.subscribe()
    }

    /// Started, not finished, and a question is on screen.
    pub fn is_ongoing(&self) -> bool {
        self.start_at().is_some()
            && self.end_at.is_none()
            && self.current_question().is_some()
            && !self.questions.is_empty()
    }

    /// Time played: up to `end_at` once finished, otherwise up to `now`.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        let start = self.start_at()?;
        Some(self.end_at.unwrap_or(now).signed_duration_since(start))
    }

    /// Apply the wrong-answer penalty.
    ///
    /// Does nothing when the score is already at or below the minimum.
    /// Under [`ScoreFloor::Guarded`] a penalty that starts above the minimum
    /// is applied in full even if it lands below it. Returns whether the
    /// score changed.
    pub fn decrement_score(&mut self) -> bool {
        let min = self.config.min_score;
        if self.score <= min {
            return false;
        }
        let next = self.score.saturating_sub(self.config.score_decrement);
        self.score = match self.config.score_floor {
            ScoreFloor::Guarded => next,
            ScoreFloor::Clamped => next.max(min),
        };
        if self.score < min {
            log::warn!("Score dropped below minimum: {} < {}", self.score, min);
        }
        true
    }

    /// Start a new session over `questions`.
    pub(crate) fn reset(&mut self, questions: Vec<Question>, now: DateTime<Utc>) {
        self.questions = questions;
        self.current = None;
        self.current_question_count = 0;
        self.score = self.config.max_score;
        self.start_at.send_replace(Some(now));
        self.end_at = None;
        self.selector.reset();
        self.transition_to(GamePhase::Active, now);
    }

    /// Count one more question shown. Returns `true` once the budget is used up.
    pub(crate) fn advance_count(&mut self) -> bool {
        self.current_question_count += 1;
        self.current_question_count >= self.config.total_questions
    }

    /// Draw the next current question.
    pub(crate) fn select_question(&mut self) -> Option<&Question> {
        self.current = self.selector.pick(self.questions.len());
        self.current_question()
    }

    pub(crate) fn finish(&mut self, now: DateTime<Utc>) {
        self.end_at = Some(now);
        if self.phase != GamePhase::Finished {
            self.transition_to(GamePhase::Finished, now);
        }
    }

    fn transition_to(&mut self, phase: GamePhase, now: DateTime<Utc>) {
        log::debug!("Game phase {} -> {}", self.phase.name(), phase.name());
        self.history.record(StateTransition {
            from: self.phase,
            to: phase,
            timestamp: now,
            question_count: self.current_question_count,
        });
        self.phase = phase;
    }
}
