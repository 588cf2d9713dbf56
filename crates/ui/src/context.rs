use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{QuizLength, ResultsSummary};
use services::QuizApi;

pub trait UiApp: Send + Sync {
    fn quiz_api(&self) -> Arc<dyn QuizApi>;
    fn default_length(&self) -> QuizLength;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_api: Arc<dyn QuizApi>,
    default_length: QuizLength,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_api: app.quiz_api(),
            default_length: app.default_length(),
        }
    }

    #[must_use]
    pub fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.quiz_api)
    }

    #[must_use]
    pub fn default_length(&self) -> QuizLength {
        self.default_length
    }
}

/// Quiz state that outlives a single route: what was started, how it ended.
#[derive(Clone, Copy)]
pub struct QuizRun {
    /// Length of the quiz the server has a session for, if one was started here.
    pub length: Signal<Option<QuizLength>>,
    pub results: Signal<Option<ResultsSummary>>,
}

impl QuizRun {
    /// Creates the signals in the current scope; call from the root component.
    #[must_use]
    pub fn new_in_scope() -> Self {
        Self {
            length: Signal::new(None),
            results: Signal::new(None),
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
