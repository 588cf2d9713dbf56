use crate::model::{AnswerResult, ResultsSummary};

/// Where the quiz is in its per-question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// A question request is outstanding (or failed and awaits a manual retry).
    #[default]
    Loading,
    /// Question is on screen and accepts a choice.
    DisplayingQuestion,
    /// Answer result is on screen; the advance timer is armed.
    AwaitingAdvance,
    /// Results page has been requested; nothing else happens.
    Finished,
}

/// Per-tab quiz state: current question, running score and the answer guard.
///
/// Owned by a single controller and mutated only from its callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSession {
    total_questions: u32,
    current_question: u32,
    loading_question: u32,
    score: u32,
    is_answering: bool,
    phase: QuizPhase,
}

impl QuizSession {
    #[must_use]
    pub fn new(total_questions: u32) -> Self {
        Self {
            total_questions,
            current_question: 0,
            loading_question: 0,
            score: 0,
            is_answering: false,
            phase: QuizPhase::Loading,
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn current_question(&self) -> u32 {
        self.current_question
    }

    /// Index most recently requested, whether or not it ever rendered.
    #[must_use]
    pub fn loading_question(&self) -> u32 {
        self.loading_question
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_answering(&self) -> bool {
        self.is_answering
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn begin_loading(&mut self, index: u32) {
        if self.phase != QuizPhase::Finished {
            self.loading_question = index;
            self.phase = QuizPhase::Loading;
        }
    }

    /// Question `index` rendered successfully; it becomes the current one and
    /// the server's `total` replaces the requested quiz length.
    pub fn commit_question(&mut self, index: u32, total: u32) {
        if total > 0 {
            self.total_questions = total;
        }
        self.current_question = index;
        self.loading_question = index;
        self.is_answering = false;
        self.phase = QuizPhase::DisplayingQuestion;
    }

    /// Takes the answer guard. Returns `false` (and changes nothing) when an
    /// answer is already outstanding or no question is accepting choices.
    pub fn begin_answer(&mut self) -> bool {
        if self.is_answering || self.phase != QuizPhase::DisplayingQuestion {
            return false;
        }
        self.is_answering = true;
        true
    }

    /// Applies the server verdict. The guard stays held until
    /// [`release_answer`](Self::release_answer) runs after the timer is armed.
    pub fn record_answer(&mut self, result: &AnswerResult) {
        self.score = result.score;
        self.phase = QuizPhase::AwaitingAdvance;
    }

    pub fn release_answer(&mut self) {
        self.is_answering = false;
    }

    /// Rolls back a failed submission so the same question can be answered again.
    pub fn abort_answer(&mut self) {
        self.is_answering = false;
        if self.phase == QuizPhase::AwaitingAdvance {
            self.phase = QuizPhase::DisplayingQuestion;
        }
    }

    /// Index of the question after the current one, or `None` when the quiz is done.
    #[must_use]
    pub fn next_question(&self) -> Option<u32> {
        let next = self.current_question.saturating_add(1);
        (next < self.total_questions).then_some(next)
    }

    pub fn finish(&mut self) {
        self.is_answering = false;
        self.phase = QuizPhase::Finished;
    }

    #[must_use]
    pub fn results(&self) -> ResultsSummary {
        ResultsSummary::new(self.score, self.total_questions)
    }
}
