//! Per-question answer bookkeeping.
//!
//! The tracker counts attempts on the current question, remembers whether
//! the last evaluation was correct, and keeps the last submitted answer
//! (payload included) for collaborators such as a map styling layer.

use crate::core::Answer;

/// Callback run whenever the attempt counter is reset while a previous
/// answer is on record. Receives that answer, e.g. to restore the style of
/// the map feature it highlighted.
pub type ResetHook<P> = Box<dyn Fn(&Answer<P>) + Send + Sync>;

/// Attempt counter, correctness flag and last answer for one session.
pub struct AnswerTracker<P = ()> {
    answer_attempt: u32,
    is_correct: bool,
    last_answer: Option<Answer<P>>,
    reset_hooks: Vec<ResetHook<P>>,
}

impl<P> Default for AnswerTracker<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> AnswerTracker<P> {
    pub fn new() -> Self {
        Self {
            answer_attempt: 0,
            is_correct: false,
            last_answer: None,
            reset_hooks: Vec::new(),
        }
    }

    pub fn answer_attempt(&self) -> u32 {
        self.answer_attempt
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn last_answer(&self) -> Option<&Answer<P>> {
        self.last_answer.as_ref()
    }

    /// Register a hook run on every attempt reset that has a previous answer.
    pub fn on_reset<F>(&mut self, hook: F)
    where
        F: Fn(&Answer<P>) + Send + Sync + 'static,
    {
        self.reset_hooks.push(Box::new(hook));
    }

    /// Store the latest answer. No validation.
    pub fn set_last_answer(&mut self, answer: Answer<P>) {
        self.last_answer = Some(answer);
    }

    pub fn set_correct(&mut self, correct: bool) {
        self.is_correct = correct;
    }

    /// Zero the attempt counter and notify reset hooks.
    pub fn reset_answer_attempt(&mut self) {
        self.answer_attempt = 0;
        let Some(last) = self.last_answer.as_ref() else {
            return;
        };
        for hook in &self.reset_hooks {
            hook(last);
        }
    }

    /// Whether the current question has already been answered wrongly.
    pub fn already_answered(&self) -> bool {
        self.answer_attempt > 0
    }

    /// Count one more attempt. The cap is enforced by the game.
    pub fn increment_attempt(&mut self) {
        self.answer_attempt += 1;
    }

    /// Flag the last answer correct and start the attempt count over.
    pub fn mark_correct(&mut self) {
        self.is_correct = true;
        self.reset_answer_attempt();
    }
}
