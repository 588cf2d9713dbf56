mod answer;
mod player;
mod question;
mod results;
mod session;

pub use answer::{AnswerError, AnswerRequest, AnswerResult, Choice};
pub use player::PlayerSummary;
pub use question::{QuestionPayload, SeasonLabel};
pub use results::{LetterGrade, QuizLength, ResultsSummary};
pub use session::{QuizPhase, QuizSession};
