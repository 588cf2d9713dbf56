use services::QuizApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    ServerUnavailable,
    QuizNotStarted,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::ServerUnavailable => {
                "Could not reach the quiz server. Check that it is running and try again."
            }
            ViewError::QuizNotStarted => "The quiz server could not start a new quiz.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&QuizApiError> for ViewError {
    fn from(err: &QuizApiError) -> Self {
        match err {
            QuizApiError::Http(_) => ViewError::ServerUnavailable,
            QuizApiError::StartFailed(_) => ViewError::QuizNotStarted,
            _ => ViewError::Unknown,
        }
    }
}
