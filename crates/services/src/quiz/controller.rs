use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use quiz_core::model::{AnswerResult, Choice, QuizPhase, QuizSession};
use quiz_core::timing::{ADVANCE_DELAY, FINISH_DELAY};

use super::render::{Destination, QuizRenderer};
use super::timer::Scheduler;
use super::view::{AnswerView, QuestionView};
use crate::error::QuizApiError;
use crate::quiz_api::{QuestionFetch, QuizApi};

pub const QUESTION_ERROR_MESSAGE: &str = "Failed to load question. Please refresh the page.";

/// What `load_question` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionLoad {
    Rendered,
    /// Server had no such question; the results page was requested.
    Exhausted,
    Failed,
    /// Retry requested while no load had failed.
    Ignored,
}

/// What `submit_answer` ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guard was held or no question was accepting answers; nothing changed.
    Ignored,
    Answered(AnswerResult),
    /// Request failed; the guard and cards were unlocked for another try.
    Failed,
}

struct ControllerState<R> {
    session: QuizSession,
    renderer: R,
}

/// Drives one quiz in a browser-like tab: fetch, render, answer, advance.
///
/// Cloning is cheap and every clone shares the same session. Meant for a
/// single-threaded event loop; borrows of the shared state never span an await.
pub struct QuizController<R> {
    api: Arc<dyn QuizApi>,
    scheduler: Rc<dyn Scheduler>,
    state: Rc<RefCell<ControllerState<R>>>,
}

impl<R> Clone for QuizController<R> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            scheduler: Rc::clone(&self.scheduler),
            state: Rc::clone(&self.state),
        }
    }
}

impl<R: QuizRenderer + 'static> QuizController<R> {
    #[must_use]
    pub fn new(
        api: Arc<dyn QuizApi>,
        scheduler: Rc<dyn Scheduler>,
        renderer: R,
        total_questions: u32,
    ) -> Self {
        Self {
            api,
            scheduler,
            state: Rc::new(RefCell::new(ControllerState {
                session: QuizSession::new(total_questions),
                renderer,
            })),
        }
    }

    #[must_use]
    pub fn session(&self) -> QuizSession {
        self.state.borrow().session
    }

    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        f(&self.state.borrow().renderer)
    }

    /// Fetches question `index` and renders it.
    ///
    /// A non-success answer from the server ends the quiz; transport or decode
    /// failures leave an error message in place of the question and do not retry.
    pub async fn load_question(&self, index: u32) -> QuestionLoad {
        {
            let mut state = self.state.borrow_mut();
            state.session.begin_loading(index);
            state.renderer.clear_result();
            state.renderer.show_loading();
        }

        let fetched = self.api.fetch_question(index).await;

        let mut state = self.state.borrow_mut();
        match fetched {
            Ok(QuestionFetch::Ready(payload)) => {
                let view = QuestionView::new(index, &payload);
                state.renderer.render_question(&view);
                state.session.commit_question(index, payload.total);
                debug!(index, total = payload.total, "question rendered");
                QuestionLoad::Rendered
            }
            Ok(QuestionFetch::Exhausted) => {
                info!(index, "no more questions, showing results");
                state.session.finish();
                let summary = state.session.results();
                state.renderer.navigate(Destination::Results(summary));
                QuestionLoad::Exhausted
            }
            Err(err) => {
                warn!(index, error = %err, "failed to load question");
                state.renderer.show_question_error(QUESTION_ERROR_MESSAGE);
                QuestionLoad::Failed
            }
        }
    }

    /// Re-requests the question whose load last failed.
    ///
    /// Answered questions are never fetched again: after a failed advance this
    /// asks for the next index, not the one already on the score.
    pub async fn retry_question(&self) -> QuestionLoad {
        let index = {
            let session = self.state.borrow().session;
            if session.phase() != QuizPhase::Loading {
                debug!(phase = ?session.phase(), "retry ignored");
                return QuestionLoad::Ignored;
            }
            session.loading_question()
        };
        self.load_question(index).await
    }

    /// Submits `choice` for the current question and shows the verdict.
    ///
    /// A second call while one is outstanding is a silent no-op. On success the
    /// advance to the next question is armed for [`ADVANCE_DELAY`].
    pub async fn submit_answer(&self, choice: Choice) -> SubmitOutcome {
        let index = {
            let mut state = self.state.borrow_mut();
            if !state.session.begin_answer() {
                debug!(%choice, "answer ignored");
                return SubmitOutcome::Ignored;
            }
            state.renderer.set_cards_enabled(false);
            state.session.current_question()
        };

        match self.request_answer(index, choice).await {
            Ok(result) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.session.record_answer(&result);
                    state
                        .renderer
                        .render_answer(&AnswerView::new(choice, &result));
                }
                self.arm_advance();
                self.state.borrow_mut().session.release_answer();
                debug!(
                    index,
                    correct = result.is_correct,
                    score = result.score,
                    "answer shown"
                );
                SubmitOutcome::Answered(result)
            }
            Err(err) => {
                error!(index, %choice, error = %err, "failed to submit answer");
                let mut state = self.state.borrow_mut();
                state.session.abort_answer();
                state.renderer.set_cards_enabled(true);
                SubmitOutcome::Failed
            }
        }
    }

    async fn request_answer(
        &self,
        index: u32,
        choice: Choice,
    ) -> Result<AnswerResult, QuizApiError> {
        let result = self.api.submit_answer(index, choice).await?;
        result.check(choice)?;
        Ok(result)
    }

    fn arm_advance(&self) {
        let controller = self.clone();
        self.scheduler.schedule(
            ADVANCE_DELAY,
            Box::pin(async move {
                controller.advance().await;
            }),
        );
    }

    /// Moves past the answered question: the next question, or the results page.
    async fn advance(&self) {
        let next = {
            let mut state = self.state.borrow_mut();
            let next = state.session.next_question();
            if next.is_none() {
                state.renderer.set_progress(100.0);
            }
            next
        };

        match next {
            Some(index) => {
                self.load_question(index).await;
            }
            None => {
                let controller = self.clone();
                self.scheduler.schedule(
                    FINISH_DELAY,
                    Box::pin(async move {
                        controller.finish();
                    }),
                );
            }
        }
    }

    fn finish(&self) {
        let mut state = self.state.borrow_mut();
        state.session.finish();
        let summary = state.session.results();
        info!(score = summary.score, total = summary.total, "quiz complete");
        state.renderer.navigate(Destination::Results(summary));
    }
}
