use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{Choice, PlayerSummary};

/// Season a question is asked about.
///
/// The server sends a bare year (`2023`) but a label such as `"2023-24"` is
/// accepted as well; either way it is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeasonLabel(String);

impl SeasonLabel {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for SeasonLabel {
    fn from(year: u32) -> Self {
        Self(year.to_string())
    }
}

impl Serialize for SeasonLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SeasonLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Year(u64),
            Label(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Year(year) => Self(year.to_string()),
            Raw::Label(label) => Self(label),
        })
    }
}

/// A question as served by `GET /api/question/{n}`. The answer is not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_number: Option<u32>,
    pub total: u32,
    /// Comparative word for the stat, e.g. "more" or "a higher".
    pub question_word: String,
    pub stat_display: String,
    pub season: SeasonLabel,
    pub player1: PlayerSummary,
    pub player2: PlayerSummary,
}

impl QuestionPayload {
    #[must_use]
    pub fn player(&self, choice: Choice) -> &PlayerSummary {
        match choice {
            Choice::First => &self.player1,
            Choice::Second => &self.player2,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "Who had {} {} in {}?",
            self.question_word, self.stat_display, self.season
        )
    }
}
