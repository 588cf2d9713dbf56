#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod quiz_api;

pub use error::QuizApiError;
pub use quiz::{
    AnswerView, CardMarkers, CardReveal, Destination, Feedback, FeedbackKind, LocalTask,
    ManualScheduler, QUESTION_ERROR_MESSAGE, QuestionLoad, QuestionView, QuizController,
    QuizRenderer, Scheduler, SubmitOutcome,
};
pub use quiz_api::{HttpQuizApi, QuestionFetch, QuizApi, QuizApiConfig};
pub use reqwest::StatusCode;
