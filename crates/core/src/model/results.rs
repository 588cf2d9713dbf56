use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of questions a quiz can be started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuizLength {
    #[default]
    Ten,
    Fifteen,
    TwentyFive,
}

impl QuizLength {
    pub const ALL: [QuizLength; 3] = [QuizLength::Ten, QuizLength::Fifteen, QuizLength::TwentyFive];

    /// # Errors
    ///
    /// Returns `ModelError::InvalidQuizLength` unless `count` is 10, 15 or 25.
    pub fn try_from_count(count: u32) -> Result<Self, ModelError> {
        match count {
            10 => Ok(Self::Ten),
            15 => Ok(Self::Fifteen),
            25 => Ok(Self::TwentyFive),
            other => Err(ModelError::InvalidQuizLength(other)),
        }
    }

    /// Lenient variant matching the server: unknown counts become ten questions.
    #[must_use]
    pub fn from_count_or_default(count: u32) -> Self {
        Self::try_from_count(count).unwrap_or_default()
    }

    #[must_use]
    pub fn count(self) -> u32 {
        match self {
            QuizLength::Ten => 10,
            QuizLength::Fifteen => 15,
            QuizLength::TwentyFive => 25,
        }
    }
}

impl fmt::Display for QuizLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} questions", self.count())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final tally shown on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub score: u32,
    pub total: u32,
}

impl ResultsSummary {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    /// Whole-number percentage; halves round to even.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let ratio = f64::from(self.score) / f64::from(self.total) * 100.0;
        ratio.round_ties_even() as u32
    }

    #[must_use]
    pub fn grade(&self) -> LetterGrade {
        LetterGrade::from_percentage(self.percentage())
    }
}
