//! A quiz session: game state, timer and answer tracker under one owner.

use super::error::GameError;
use super::event::{AnswerOutcome, EventListener, GameEvent, GameSummary};
use super::selector::QuestionSelector;
use super::store::Game;
use crate::answer::AnswerTracker;
use crate::config::{ConfigError, GameConfig};
use crate::core::{Answer, Clock, Question, SystemClock};
use crate::timer::Timer;
use std::sync::Arc;
use uuid::Uuid;

/// Builder for [`Session`].
pub struct SessionBuilder {
    config: GameConfig,
    clock: Arc<dyn Clock>,
    seed: Option<u64>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            clock: Arc::new(SystemClock),
            seed: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Time source for timestamps and the timer display.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Seed question selection so a session can be replayed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session. Fails if the configuration is invalid.
    pub fn build<P>(self) -> Result<Session<P>, ConfigError> {
        self.config.validate()?;
        let selector = match self.seed {
            Some(seed) => QuestionSelector::seeded(self.config.selection, seed),
            None => QuestionSelector::new(self.config.selection),
        };
        let period = self.config.tick_interval();
        let game = Game::new(self.config, selector);
        let timer = Timer::new(game.subscribe_start(), Arc::clone(&self.clock), period);
        Ok(Session {
            id: None,
            game,
            answers: AnswerTracker::new(),
            timer,
            clock: self.clock,
            listeners: Vec::new(),
        })
    }
}

/// One player's quiz.
///
/// Sessions are created once and restarted with [`init_game`](Self::init_game);
/// each restart gets a fresh session id.
///
/// # Example
///
/// ```rust
/// use geoquiz::{Answer, GameConfig, Question, Session};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), geoquiz::GameError> {
/// let mut session: Session = Session::new(GameConfig::default())?;
/// session.init_game(vec![
///     Question::new("BA", "Bali"),
///     Question::new("AC", "Aceh"),
/// ])?;
///
/// let target = session.game().current_question().unwrap().clone();
/// let outcome = session.evaluate_answer(Answer::new(target.code, target.name))?;
/// assert!(outcome.correct);
/// assert_eq!(session.game().current_question_count(), 2);
/// # Ok(())
/// # }
/// ```
pub struct Session<P = ()> {
    id: Option<Uuid>,
    game: Game,
    answers: AnswerTracker<P>,
    timer: Timer,
    clock: Arc<dyn Clock>,
    listeners: Vec<EventListener>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }
}

impl<P> Session<P> {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        SessionBuilder::new().config(config).build()
    }

    /// Id of the running (or last) session, `None` before the first start.
    pub fn session_id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn answers(&self) -> &AnswerTracker<P> {
        &self.answers
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Re-run one timer tick right away.
    pub fn refresh_timer(&self) -> bool {
        self.timer.refresh()
    }

    pub fn is_ongoing(&self) -> bool {
        self.game.is_ongoing()
    }

    /// Register a listener for [`GameEvent`]s.
    pub fn on_event<F>(&mut self, listener: F)
    where
        F: Fn(&GameEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Register a hook run with the previous answer each time the attempt
    /// counter is reset (new question or correct answer).
    pub fn on_attempt_reset<F>(&mut self, hook: F)
    where
        F: Fn(&Answer<P>) + Send + Sync + 'static,
    {
        self.answers.on_reset(hook);
    }

    /// Start a new session over `questions`.
    ///
    /// Resets the timer, score and question counter, records the start time,
    /// draws the first question and starts the timer. On error the session
    /// is left exactly as it was.
    pub fn init_game(&mut self, questions: Vec<Question>) -> Result<(), GameError> {
        if questions.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "question set is empty".to_string(),
            ));
        }
        // a one-question budget finishes before the timer would start
        if self.game.total_question_count() > 1 {
            Timer::ensure_runtime()?;
        }

        self.timer.reset_timer();
        let id = Uuid::new_v4();
        let question_count = questions.len();
        self.id = Some(id);
        self.game.reset(questions, self.clock.now());
        log::info!(
            "Starting session {} with {} questions ({} to ask)",
            id,
            question_count,
            self.game.total_question_count()
        );
        self.emit(GameEvent::Started {
            session_id: id,
            question_count,
        });

        self.next_question();

        if self.game.end_at().is_none() {
            self.timer.start_timer()?;
        }
        Ok(())
    }

    /// Apply the wrong-answer penalty. Returns whether the score changed.
    pub fn decrement_score(&mut self) -> bool {
        let changed = self.game.decrement_score();
        if changed {
            self.emit(GameEvent::ScoreChanged {
                score: self.game.score(),
            });
        }
        changed
    }

    /// Move on to another question.
    ///
    /// Resets the attempt counter and counts the new question. When that
    /// uses up the question budget the game is finished first; a question is
    /// drawn either way.
    pub fn next_question(&mut self) {
        self.answers.reset_answer_attempt();
        if self.game.advance_count() {
            self.set_game_finished();
        }

        let number = self.game.current_question_count();
        if let Some(question) = self.game.select_question().cloned() {
            log::debug!("Question {}: {} ({})", number, question.name, question.code);
            self.emit(GameEvent::QuestionChanged { question, number });
        }
    }

    /// Check `answer` against the current question.
    ///
    /// A correct answer, or a wrong one that uses up the last attempt, moves
    /// on to the next question. Without a current question every answer is
    /// wrong. Answers after the game finished are rejected.
    pub fn evaluate_answer(&mut self, answer: Answer<P>) -> Result<AnswerOutcome, GameError> {
        if !self.game.phase().accepts_answers() {
            return Err(GameError::GameFinished);
        }

        let correct = self
            .game
            .current_question()
            .is_some_and(|question| answer.answers(question));
        log::debug!(
            "Answer {} is {}",
            answer.code,
            if correct { "correct" } else { "wrong" }
        );
        self.answers.set_last_answer(answer);

        if correct {
            self.mark_correct();
        } else {
            self.mark_wrong();
        }

        let attempts = self.answers.answer_attempt();
        self.emit(GameEvent::AnswerEvaluated {
            correct,
            attempt: attempts,
        });

        let advanced = self.answers.is_correct() || attempts >= self.game.max_attempt();
        let was_finished = self.game.end_at().is_some();
        if advanced {
            self.next_question();
        }

        Ok(AnswerOutcome {
            correct,
            attempts,
            advanced,
            finished: !was_finished && self.game.end_at().is_some(),
            score: self.game.score(),
        })
    }

    /// Record the end time and stop the timer.
    pub fn set_game_finished(&mut self) {
        let now = self.clock.now();
        self.game.finish(now);
        self.timer.stop_timer();

        let summary = GameSummary {
            session_id: self.id,
            score: self.game.score(),
            questions_shown: self.game.current_question_count(),
            elapsed: self.game.elapsed(now).and_then(|d| d.to_std().ok()),
        };
        log::info!(
            "Session finished with score {} after {} questions",
            summary.score,
            summary.questions_shown
        );
        self.emit(GameEvent::Finished(summary));
    }

    fn mark_correct(&mut self) {
        self.answers.mark_correct();
    }

    fn mark_wrong(&mut self) {
        self.answers.set_correct(false);
        self.decrement_score();
        self.answers.increment_attempt();
    }

    fn emit(&self, event: GameEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}
