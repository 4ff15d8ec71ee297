//! Notifications emitted by a session and evaluation results.

use crate::core::Question;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Listener registered with [`Session::on_event`](super::Session::on_event).
pub type EventListener = Box<dyn Fn(&GameEvent) + Send + Sync>;

/// Final numbers of a finished session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub session_id: Option<Uuid>,
    pub score: i32,
    pub questions_shown: u32,
    /// Wall-clock time from start to finish
    pub elapsed: Option<Duration>,
}

/// Something observable changed in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started {
        session_id: Uuid,
        question_count: usize,
    },
    QuestionChanged {
        question: Question,
        /// 1-based position of the question in the session
        number: u32,
    },
    AnswerEvaluated {
        correct: bool,
        attempt: u32,
    },
    ScoreChanged {
        score: i32,
    },
    Finished(GameSummary),
}

/// Result of one [`Session::evaluate_answer`](super::Session::evaluate_answer) call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Wrong attempts recorded on the question after this answer
    pub attempts: u32,
    /// A new question was drawn
    pub advanced: bool,
    /// The question budget ran out with this answer
    pub finished: bool,
    pub score: i32,
}
