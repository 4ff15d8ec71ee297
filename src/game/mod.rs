//! Quiz progression and scoring.
//!
//! - [`Game`]: score, question counter, current question, timestamps
//! - [`Session`]: owns a game, its timer and answer tracker, and runs the
//!   question/answer state machine over them
//! - [`GameEvent`]: notifications for UI layers

mod error;
mod event;
mod selector;
mod session;
mod store;

pub use error::GameError;
pub use event::{AnswerOutcome, EventListener, GameEvent, GameSummary};
pub use selector::QuestionSelector;
pub use session::{Session, SessionBuilder};
pub use store::Game;
