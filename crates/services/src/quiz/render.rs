use quiz_core::model::ResultsSummary;

use super::view::{AnswerView, QuestionView};

/// Where the quiz sends the user once it is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Results(ResultsSummary),
}

/// Named render slots of the quiz page.
///
/// The controller never touches a document directly; a UI binds these slots
/// to whatever it draws with, and tests bind them to plain structs.
pub trait QuizRenderer {
    /// Drops the previous answer: revealed values, card markers, banner.
    /// Cards become clickable again.
    fn clear_result(&mut self);

    fn show_loading(&mut self);

    fn render_question(&mut self, view: &QuestionView);

    /// Replaces the question text with a static error message.
    fn show_question_error(&mut self, message: &str);

    fn set_cards_enabled(&mut self, enabled: bool);

    fn render_answer(&mut self, view: &AnswerView);

    fn set_progress(&mut self, percent: f64);

    fn navigate(&mut self, destination: Destination);
}
