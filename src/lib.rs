//! Geoquiz: state and scoring for map-based geography quizzes
//!
//! A player is shown a region name and has to find it on a map. This crate
//! keeps everything about that game except the map itself: the running
//! score, which question is on screen, how many attempts are left, and how
//! long the session has been going.
//!
//! # Core Concepts
//!
//! - **Session**: owns the game state, the timer and the answer tracker
//! - **Game**: score decay, question progression, start/end timestamps
//! - **Timer**: `MM:SS` display refreshed by a periodic Tokio task
//! - **AnswerTracker**: attempts on the current question and the last answer
//!
//! # Example
//!
//! ```rust
//! use geoquiz::{Answer, GameConfig, Question, Session};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), geoquiz::GameError> {
//! let config = GameConfig::builder().total_questions(3).build()?;
//! let mut session: Session = Session::new(config)?;
//!
//! session.init_game(vec![
//!     Question::new("JB", "Jawa Barat"),
//!     Question::new("JT", "Jawa Tengah"),
//! ])?;
//! assert!(session.is_ongoing());
//!
//! let outcome = session.evaluate_answer(Answer::new("XX", "Nowhere"))?;
//! assert!(!outcome.correct);
//! assert_eq!(session.game().score(), 95);
//! assert_eq!(session.timer().timer(), "00:00");
//! # Ok(())
//! # }
//! ```

pub mod answer;
pub mod config;
pub mod core;
pub mod game;
pub mod timer;

// Re-export commonly used types
pub use answer::AnswerTracker;
pub use config::{ConfigError, GameConfig, ScoreFloor, SelectionStrategy};
pub use crate::core::{Answer, Clock, GamePhase, ManualClock, Question, SystemClock};
pub use game::{AnswerOutcome, Game, GameError, GameEvent, GameSummary, Session, SessionBuilder};
pub use timer::{ElapsedDisplay, Timer, TimerError};
