use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{
    AnswerResult, Choice, PlayerSummary, QuestionPayload, QuizLength, ResultsSummary, SeasonLabel,
};
use services::{QuestionFetch, QuizApi, QuizApiError, StatusCode};

use crate::context::{QuizRun, UiApp, build_app_context};
use crate::views::{HomeView, QuizView, ResultsView};

/// Serves one question at index 0 and reports exhaustion after that.
#[derive(Default)]
pub struct FakeQuizApi {
    pub fail_start: bool,
    pub started: Mutex<Vec<QuizLength>>,
    pub fetched: Mutex<Vec<u32>>,
}

#[async_trait]
impl QuizApi for FakeQuizApi {
    async fn start_quiz(&self, length: QuizLength) -> Result<(), QuizApiError> {
        self.started.lock().unwrap().push(length);
        if self.fail_start {
            return Err(QuizApiError::StartFailed(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(())
    }

    async fn fetch_question(&self, index: u32) -> Result<QuestionFetch, QuizApiError> {
        self.fetched.lock().unwrap().push(index);
        if index > 0 {
            return Ok(QuestionFetch::Exhausted);
        }
        Ok(QuestionFetch::Ready(QuestionPayload {
            question_number: Some(index),
            total: 10,
            question_word: "more".into(),
            stat_display: "passing yards".into(),
            season: SeasonLabel::from(2023),
            player1: PlayerSummary::new("Tua Tagovailoa", "MIA", "https://img/tua.png"),
            player2: PlayerSummary::new("Jared Goff", "DET", "https://img/goff.png"),
        }))
    }

    async fn submit_answer(
        &self,
        _index: u32,
        choice: Choice,
    ) -> Result<AnswerResult, QuizApiError> {
        Ok(AnswerResult {
            score: 1,
            player1_value: "4,624".into(),
            player2_value: "4,575".into(),
            stat_display: "passing yards".into(),
            correct_answer: Choice::First,
            is_correct: choice == Choice::First,
        })
    }
}

struct TestApp {
    api: Arc<FakeQuizApi>,
}

impl UiApp for TestApp {
    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        self.api.clone()
    }

    fn default_length(&self) -> QuizLength {
        QuizLength::Ten
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    length: Option<QuizLength>,
    results: Option<ResultsSummary>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| QuizRun {
        length: Signal::new(props.length),
        results: Signal::new(props.results),
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<FakeQuizApi>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    length: Option<QuizLength>,
    results: Option<ResultsSummary>,
) -> ViewHarness {
    setup_view_harness_with_api(FakeQuizApi::default(), view, length, results)
}

pub fn setup_view_harness_with_api(
    api: FakeQuizApi,
    view: ViewKind,
    length: Option<QuizLength>,
    results: Option<ResultsSummary>,
) -> ViewHarness {
    let api = Arc::new(api);
    let app = Arc::new(TestApp { api: api.clone() });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            length,
            results,
        },
    );

    ViewHarness { dom, api }
}
