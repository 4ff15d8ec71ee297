//! Questions and the answers submitted against them.

use serde::{Deserialize, Serialize};

/// A place the player is asked to find on the map.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// Region identifier, e.g. an administrative code
    pub code: String,
    /// Human readable region name
    pub name: String,
}

impl Question {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A candidate answer: the region the player picked plus whatever the map
/// layer attached to the pick (feature, click event, ...).
///
/// The payload is carried through the game untouched so collaborators such
/// as a styling layer can get it back from the answer tracker.
///
/// # Example
///
/// ```rust
/// use geoquiz::core::{Answer, Question};
///
/// let jakarta = Question::new("31", "DKI Jakarta");
/// let answer = Answer::from_question(&jakarta, "feature-31");
/// assert!(answer.answers(&jakarta));
/// assert_eq!(answer.payload, "feature-31");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer<P = ()> {
    pub code: String,
    pub name: String,
    pub payload: P,
}

impl Answer<()> {
    /// Answer without a map payload.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_payload(code, name, ())
    }
}

impl<P> Answer<P> {
    pub fn with_payload(code: impl Into<String>, name: impl Into<String>, payload: P) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            payload,
        }
    }

    /// Answer naming `question`'s region.
    pub fn from_question(question: &Question, payload: P) -> Self {
        Self::with_payload(question.code.clone(), question.name.clone(), payload)
    }

    /// Whether this answer names `question`. Codes are compared by value.
    pub fn answers(&self, question: &Question) -> bool {
        self.code == question.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_matches_by_code_only() {
        let question = Question::new("JB", "Jawa Barat");
        assert!(Answer::new("JB", "West Java").answers(&question));
        assert!(!Answer::new("JT", "Jawa Barat").answers(&question));
    }

    #[test]
    fn from_question_copies_identity() {
        let question = Question::new("BA", "Bali");
        let answer = Answer::from_question(&question, 7_u32);
        assert_eq!(answer.code, "BA");
        assert_eq!(answer.name, "Bali");
        assert_eq!(answer.payload, 7);
    }

    #[test]
    fn question_deserializes_from_json() {
        let question: Question =
            serde_json::from_str(r#"{"code":"AC","name":"Aceh"}"#).unwrap();
        assert_eq!(question, Question::new("AC", "Aceh"));
    }
}
