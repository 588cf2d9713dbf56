use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ModelError;

//
// ─── CHOICE ───────────────────────────────────────────────────────────────────
//

/// Which of the two player cards a choice refers to.
///
/// Travels on the wire as the bare integer `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    pub const BOTH: [Choice; 2] = [Choice::First, Choice::Second];

    /// Converts the wire value (1 or 2) into a `Choice`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidChoice` for any other value.
    pub fn from_u8(value: u8) -> Result<Self, ModelError> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            _ => Err(ModelError::InvalidChoice(value)),
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Choice::First => 1,
            Choice::Second => 2,
        }
    }

    /// Zero-based slot index, handy for indexing two-element arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Choice::First => 0,
            Choice::Second => 1,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Choice::First => Choice::Second,
            Choice::Second => Choice::First,
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> Self {
        choice.as_u8()
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

//
// ─── REQUEST / RESULT ─────────────────────────────────────────────────────────
//

/// JSON body posted to the answer endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: Choice,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error(
        "answer result disagrees with submitted choice {submitted}: correct answer {correct}, is_correct={is_correct}"
    )]
    Inconsistent {
        submitted: Choice,
        correct: Choice,
        is_correct: bool,
    },
}

/// Server verdict for one submitted answer.
///
/// Stat values arrive already formatted for display (e.g. `"1,500"` or `"64.2%"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub score: u32,
    pub player1_value: String,
    pub player2_value: String,
    pub stat_display: String,
    pub correct_answer: Choice,
    pub is_correct: bool,
}

impl AnswerResult {
    #[must_use]
    pub fn value_for(&self, choice: Choice) -> &str {
        match choice {
            Choice::First => &self.player1_value,
            Choice::Second => &self.player2_value,
        }
    }

    /// Checks that the verdict matches the choice that was actually submitted.
    ///
    /// A mismatch means the server answered for different input than ours,
    /// e.g. a stale question index.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::Inconsistent` when `is_correct` disagrees with
    /// `submitted == correct_answer`.
    pub fn check(&self, submitted: Choice) -> Result<(), AnswerError> {
        if self.is_correct == (submitted == self.correct_answer) {
            return Ok(());
        }
        Err(AnswerError::Inconsistent {
            submitted,
            correct: self.correct_answer,
            is_correct: self.is_correct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(correct_answer: Choice, is_correct: bool) -> AnswerResult {
        AnswerResult {
            score: 3,
            player1_value: "1,500".into(),
            player2_value: "1,200".into(),
            stat_display: "rushing yards".into(),
            correct_answer,
            is_correct,
        }
    }

    #[test]
    fn choice_rejects_out_of_range_values() {
        assert_eq!(Choice::from_u8(1), Ok(Choice::First));
        assert_eq!(Choice::from_u8(2), Ok(Choice::Second));
        assert_eq!(Choice::from_u8(0), Err(ModelError::InvalidChoice(0)));
        assert_eq!(Choice::from_u8(3), Err(ModelError::InvalidChoice(3)));
    }

    #[test]
    fn answer_request_serializes_bare_integer() {
        let body = serde_json::to_string(&AnswerRequest {
            answer: Choice::Second,
        })
        .unwrap();
        assert_eq!(body, r#"{"answer":2}"#);
    }

    #[test]
    fn answer_result_decodes_server_payload() {
        let raw = r#"{
            "is_correct": false,
            "correct_answer": 2,
            "player1_value": "1,200",
            "player2_value": "1,500",
            "stat_display": "rushing yards",
            "score": 4
        }"#;
        let parsed: AnswerResult = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.correct_answer, Choice::Second);
        assert_eq!(parsed.value_for(Choice::Second), "1,500");
        assert!(!parsed.is_correct);
    }

    #[test]
    fn answer_result_rejects_unknown_correct_answer() {
        let raw = r#"{"is_correct":true,"correct_answer":3,"player1_value":"1",
            "player2_value":"2","stat_display":"sacks","score":1}"#;
        assert!(serde_json::from_str::<AnswerResult>(raw).is_err());
    }

    #[test]
    fn check_flags_contradictory_verdicts() {
        assert!(result(Choice::First, true).check(Choice::First).is_ok());
        assert!(result(Choice::Second, false).check(Choice::First).is_ok());
        assert_eq!(
            result(Choice::Second, true).check(Choice::First),
            Err(AnswerError::Inconsistent {
                submitted: Choice::First,
                correct: Choice::Second,
                is_correct: true,
            })
        );
    }
}
