//! Lifecycle phases of a quiz session.
//!
//! A session moves `NotStarted -> Active -> Finished`, and a new
//! `init_game` call takes a finished (or running) session back to `Active`.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states recorded in a [`StateHistory`](super::StateHistory).
///
/// All methods are pure.
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Terminal states accept no further input until the machine is reset.
    fn is_final(&self) -> bool {
        false
    }
}

/// Phase of a game session.
///
/// # Example
///
/// ```rust
/// use geoquiz::core::{GamePhase, State};
///
/// assert_eq!(GamePhase::Active.name(), "Active");
/// assert!(GamePhase::Finished.is_final());
/// assert!(!GamePhase::Finished.accepts_answers());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No `init_game` call has happened yet.
    #[default]
    NotStarted,
    /// Questions are being asked.
    Active,
    /// The question budget was used up or the game was finished explicitly.
    Finished,
}

impl GamePhase {
    /// Whether answers are accepted in this phase.
    pub fn accepts_answers(&self) -> bool {
        !self.is_final()
    }
}

impl State for GamePhase {
    fn name(&self) -> &str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::Active => "Active",
            Self::Finished => "Finished",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(GamePhase::NotStarted.name(), "NotStarted");
        assert_eq!(GamePhase::Active.name(), "Active");
        assert_eq!(GamePhase::Finished.name(), "Finished");
    }

    #[test]
    fn only_finished_is_final() {
        assert!(!GamePhase::NotStarted.is_final());
        assert!(!GamePhase::Active.is_final());
        assert!(GamePhase::Finished.is_final());
    }

    #[test]
    fn finished_phase_rejects_answers() {
        assert!(GamePhase::NotStarted.accepts_answers());
        assert!(GamePhase::Active.accepts_answers());
        assert!(!GamePhase::Finished.accepts_answers());
    }

    #[test]
    fn default_phase_is_not_started() {
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
    }

    #[test]
    fn phase_serializes_by_name() {
        let json = serde_json::to_string(&GamePhase::Active).unwrap();
        assert_eq!(json, "\"Active\"");
        let back: GamePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GamePhase::Active);
    }
}
