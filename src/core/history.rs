//! Phase transition history.
//!
//! Every lifecycle change of a session is recorded with the time it happened
//! and how many questions had been shown at that point.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Questions shown in the session when the transition occurred
    pub question_count: u32,
}

/// Ordered history of phase transitions.
///
/// # Example
///
/// ```rust
/// use geoquiz::core::{GamePhase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: GamePhase::NotStarted,
///     to: GamePhase::Active,
///     timestamp: Utc::now(),
///     question_count: 0,
/// });
/// history.record(StateTransition {
///     from: GamePhase::Active,
///     to: GamePhase::Finished,
///     timestamp: Utc::now(),
///     question_count: 15,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&GamePhase::NotStarted, &GamePhase::Active, &GamePhase::Finished]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Most recent transition into `state`, if any.
    pub fn last_entered(&self, state: &S) -> Option<&StateTransition<S>> {
        self.transitions.iter().rev().find(|t| &t.to == state)
    }

    /// Time between the first and last recorded transitions.
    ///
    /// `None` when nothing was recorded or the timestamps run backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GamePhase;

    fn transition(
        from: GamePhase,
        to: GamePhase,
        timestamp: DateTime<Utc>,
        question_count: u32,
    ) -> StateTransition<GamePhase> {
        StateTransition {
            from,
            to,
            timestamp,
            question_count,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<GamePhase> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn path_follows_restarts() {
        let now = Utc::now();
        let mut history = StateHistory::new();
        history.record(transition(GamePhase::NotStarted, GamePhase::Active, now, 0));
        history.record(transition(GamePhase::Active, GamePhase::Finished, now, 15));
        history.record(transition(GamePhase::Finished, GamePhase::Active, now, 0));

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.get_path(),
            vec![
                &GamePhase::NotStarted,
                &GamePhase::Active,
                &GamePhase::Finished,
                &GamePhase::Active,
            ]
        );
    }

    #[test]
    fn last_entered_finds_most_recent() {
        let start = Utc::now();
        let restart = start + chrono::Duration::minutes(3);
        let mut history = StateHistory::new();
        history.record(transition(GamePhase::NotStarted, GamePhase::Active, start, 0));
        history.record(transition(GamePhase::Active, GamePhase::Finished, start, 15));
        history.record(transition(GamePhase::Finished, GamePhase::Active, restart, 0));

        let entered = history.last_entered(&GamePhase::Active).unwrap();
        assert_eq!(entered.timestamp, restart);
        assert_eq!(entered.from, GamePhase::Finished);
        assert!(history.last_entered(&GamePhase::NotStarted).is_none());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let end = start + chrono::Duration::seconds(75);
        let mut history = StateHistory::new();
        history.record(transition(GamePhase::NotStarted, GamePhase::Active, start, 0));
        history.record(transition(GamePhase::Active, GamePhase::Finished, end, 15));

        assert_eq!(history.duration(), Some(Duration::from_secs(75)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record(transition(
            GamePhase::NotStarted,
            GamePhase::Active,
            Utc::now(),
            0,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<GamePhase> = serde_json::from_str(&json).unwrap();
        assert_eq!(history.transitions(), deserialized.transitions());
    }
}
