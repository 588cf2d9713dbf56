use std::env;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use quiz_core::model::{AnswerRequest, AnswerResult, Choice, QuestionPayload, QuizLength};

use crate::error::QuizApiError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizApiConfig {
    pub base_url: String,
}

impl QuizApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `NFL_QUIZ_BASE_URL`, falling back to the local development server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("NFL_QUIZ_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for QuizApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Outcome of asking for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFetch {
    Ready(QuestionPayload),
    /// The server has no question at that index: the quiz is over.
    Exhausted,
}

/// The two quiz endpoints plus the call that opens a server-side quiz session.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `QuizApiError` if the request fails or the server refuses to start.
    async fn start_quiz(&self, length: QuizLength) -> Result<(), QuizApiError>;

    /// Any non-success status maps to [`QuestionFetch::Exhausted`].
    ///
    /// # Errors
    ///
    /// Returns `QuizApiError::Http` for transport or decode failures.
    async fn fetch_question(&self, index: u32) -> Result<QuestionFetch, QuizApiError>;

    /// # Errors
    ///
    /// Returns `QuizApiError::Rejected` for a non-success status and
    /// `QuizApiError::Http` for transport or decode failures.
    async fn submit_answer(&self, index: u32, choice: Choice)
    -> Result<AnswerResult, QuizApiError>;
}

/// `QuizApi` over HTTP. Keeps a cookie jar because the server tracks the
/// quiz in its session cookie.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: QuizApiConfig,
}

impl HttpQuizApi {
    /// # Errors
    ///
    /// Returns `QuizApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: QuizApiConfig) -> Result<Self, QuizApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client, config })
    }

    /// # Errors
    ///
    /// Returns `QuizApiError::Http` if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, QuizApiError> {
        Self::new(QuizApiConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> &QuizApiConfig {
        &self.config
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn start_quiz(&self, length: QuizLength) -> Result<(), QuizApiError> {
        let url = self.config.url("/quiz/start");
        debug!(%url, questions = length.count(), "starting quiz");

        let response = self
            .client
            .post(url)
            .form(&[("num_questions", length.count())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuizApiError::StartFailed(response.status()));
        }
        Ok(())
    }

    async fn fetch_question(&self, index: u32) -> Result<QuestionFetch, QuizApiError> {
        let url = self.config.url(&format!("/api/question/{index}"));
        debug!(%url, "fetching question");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), index, "no question at index");
            return Ok(QuestionFetch::Exhausted);
        }

        let payload: QuestionPayload = response.json().await?;
        Ok(QuestionFetch::Ready(payload))
    }

    async fn submit_answer(
        &self,
        index: u32,
        choice: Choice,
    ) -> Result<AnswerResult, QuizApiError> {
        let url = self.config.url(&format!("/api/answer/{index}"));
        debug!(%url, %choice, "submitting answer");

        let response = self
            .client
            .post(url)
            .json(&AnswerRequest { answer: choice })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuizApiError::Rejected(response.status()));
        }

        Ok(response.json().await?)
    }
}
