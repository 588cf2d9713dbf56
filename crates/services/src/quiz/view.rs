use quiz_core::model::{AnswerResult, Choice, PlayerSummary, QuestionPayload};

/// Share of the quiz already behind the user, in percent.
#[must_use]
pub fn progress_percent(index: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(index) * 100.0 / f64::from(total)
}

/// Everything the page shows for a freshly loaded question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub index: u32,
    pub counter: String,
    pub progress_percent: f64,
    pub prompt: String,
    pub players: [PlayerSummary; 2],
}

impl QuestionView {
    #[must_use]
    pub fn new(index: u32, payload: &QuestionPayload) -> Self {
        Self {
            index,
            counter: format!("Question {} of {}", index.saturating_add(1), payload.total),
            progress_percent: progress_percent(index, payload.total),
            prompt: payload.prompt(),
            players: [payload.player1.clone(), payload.player2.clone()],
        }
    }

    #[must_use]
    pub fn player(&self, choice: Choice) -> &PlayerSummary {
        &self.players[choice.index()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardMarkers {
    pub correct: bool,
    pub winner: bool,
    pub wrong: bool,
}

impl CardMarkers {
    /// CSS class names in a stable order.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(3);
        if self.correct {
            out.push("correct");
        }
        if self.winner {
            out.push("winner");
        }
        if self.wrong {
            out.push("wrong");
        }
        out
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.correct || self.winner || self.wrong)
    }
}

/// A player card after the answer is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardReveal {
    pub value: String,
    pub label: String,
    pub markers: CardMarkers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Failure,
}

impl FeedbackKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            FeedbackKind::Success => "feedback success",
            FeedbackKind::Failure => "feedback failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub icon: &'static str,
    pub text: String,
}

impl Feedback {
    #[must_use]
    pub fn for_verdict(is_correct: bool) -> Self {
        if is_correct {
            Self {
                kind: FeedbackKind::Success,
                icon: "\u{2713}",
                text: "Correct!".into(),
            }
        } else {
            Self {
                kind: FeedbackKind::Failure,
                icon: "\u{2717}",
                text: "Wrong!".into(),
            }
        }
    }
}

/// Everything the page shows once the server has judged an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub score: u32,
    pub score_label: String,
    pub cards: [CardReveal; 2],
    pub feedback: Feedback,
}

impl AnswerView {
    /// The correct card is marked `correct winner`; the submitted card is
    /// marked `wrong` only when it is not the correct one.
    #[must_use]
    pub fn new(submitted: Choice, result: &AnswerResult) -> Self {
        let reveal = |choice: Choice| {
            let is_winner = choice == result.correct_answer;
            CardReveal {
                value: result.value_for(choice).to_string(),
                label: result.stat_display.clone(),
                markers: CardMarkers {
                    correct: is_winner,
                    winner: is_winner,
                    wrong: !result.is_correct && choice == submitted && !is_winner,
                },
            }
        };

        Self {
            score: result.score,
            score_label: format!("Score: {}", result.score),
            cards: [reveal(Choice::First), reveal(Choice::Second)],
            feedback: Feedback::for_verdict(result.is_correct),
        }
    }

    #[must_use]
    pub fn card(&self, choice: Choice) -> &CardReveal {
        &self.cards[choice.index()]
    }
}
