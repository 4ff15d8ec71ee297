//! Core quiz types.
//!
//! This module contains the plain data the rest of the crate works on:
//! - Questions and answers
//! - Session lifecycle phases and their history
//! - Clocks used for every timestamp

mod clock;
mod history;
mod question;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use history::{StateHistory, StateTransition};
pub use question::{Answer, Question};
pub use state::{GamePhase, State};
