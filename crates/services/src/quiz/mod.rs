mod controller;
mod render;
mod timer;
mod view;

pub use controller::{QUESTION_ERROR_MESSAGE, QuestionLoad, QuizController, SubmitOutcome};
pub use render::{Destination, QuizRenderer};
pub use timer::{LocalTask, ManualScheduler, Scheduler};
pub use view::{
    AnswerView, CardMarkers, CardReveal, Feedback, FeedbackKind, QuestionView, progress_percent,
};
