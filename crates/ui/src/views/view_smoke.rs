use dioxus::prelude::*;
use quiz_core::model::{
    AnswerResult, Choice, PlayerSummary, QuestionPayload, QuizLength, ResultsSummary, SeasonLabel,
};
use services::{AnswerView, QUESTION_ERROR_MESSAGE, QuestionView, QuizRenderer};

use super::test_harness::{
    FakeQuizApi, ViewKind, setup_view_harness, setup_view_harness_with_api,
};
use crate::views::QuizBoard;
use crate::vm::QuizScreen;

#[component]
fn BoardHarness(screen: QuizScreen) -> Element {
    rsx! {
        QuizBoard {
            screen,
            on_choose: move |_: Choice| {},
            on_retry: move |()| {},
        }
    }
}

fn render_board(screen: QuizScreen) -> String {
    let mut dom = VirtualDom::new_with_props(BoardHarness, BoardHarnessProps { screen });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn loaded_screen(index: u32) -> QuizScreen {
    let payload = QuestionPayload {
        question_number: Some(index),
        total: 10,
        question_word: "more".into(),
        stat_display: "rushing yards".into(),
        season: SeasonLabel::from(2023),
        player1: PlayerSummary::new("Christian McCaffrey", "SF", "https://img/cmc.png"),
        player2: PlayerSummary::new("Derrick Henry", "TEN", "https://img/henry.png"),
    };
    let mut screen = QuizScreen::default();
    screen.clear_result();
    screen.render_question(&QuestionView::new(index, &payload));
    screen
}

fn answer(screen: &mut QuizScreen, submitted: Choice, correct: Choice, score: u32) {
    let result = AnswerResult {
        score,
        player1_value: "1,500 yds".into(),
        player2_value: "1,200 yds".into(),
        stat_display: "rushing yards".into(),
        correct_answer: correct,
        is_correct: submitted == correct,
    };
    screen.set_cards_enabled(false);
    screen.render_answer(&AnswerView::new(submitted, &result));
}

#[test]
fn board_renders_question_slots() {
    let html = render_board(loaded_screen(4));

    assert!(html.contains("Question 5 of 10"), "missing counter in {html}");
    assert!(html.contains("width: 40%"), "missing progress in {html}");
    assert!(html.contains("Who had more rushing yards in 2023?"), "missing prompt in {html}");
    assert!(html.contains("Derrick Henry"), "missing player in {html}");
    assert!(html.contains("https://img/cmc.png"), "missing headshot in {html}");
    assert!(!html.contains("feedback"), "unexpected banner in {html}");
}

#[test]
fn board_renders_correct_answer() {
    let mut screen = loaded_screen(4);
    answer(&mut screen, Choice::First, Choice::First, 3);
    let html = render_board(screen);

    assert!(html.contains("Score: 3"), "missing score in {html}");
    assert!(html.contains("player-card disabled correct winner"), "missing markers in {html}");
    assert!(!html.contains("wrong"), "unexpected wrong marker in {html}");
    assert!(html.contains("Correct!"), "missing banner in {html}");
    assert!(html.contains("1,200 yds"), "missing revealed value in {html}");
}

#[test]
fn board_renders_wrong_answer() {
    let mut screen = loaded_screen(4);
    answer(&mut screen, Choice::First, Choice::Second, 2);
    let html = render_board(screen);

    assert!(html.contains("player-card disabled wrong"), "missing wrong marker in {html}");
    assert!(html.contains("player-card disabled correct winner"), "missing winner in {html}");
    assert!(html.contains("Wrong!"), "missing banner in {html}");
}

#[test]
fn board_offers_retry_after_load_error() {
    let mut screen = loaded_screen(2);
    screen.show_question_error(QUESTION_ERROR_MESSAGE);
    let html = render_board(screen);

    assert!(html.contains(QUESTION_ERROR_MESSAGE), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_loads_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, Some(QuizLength::Ten), None);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert!(html.contains("Who had more passing yards in 2023?"), "missing prompt in {html}");
    assert!(html.contains("Question 1 of 10"), "missing counter in {html}");
    assert_eq!(*harness.api.fetched.lock().unwrap(), vec![0]);
    assert!(harness.api.started.lock().unwrap().is_empty(), "quiz already started");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_starts_session_when_opened_directly() {
    let mut harness = setup_view_harness(ViewKind::Quiz, None, None);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }

    assert_eq!(*harness.api.started.lock().unwrap(), vec![QuizLength::Ten]);
    assert_eq!(*harness.api.fetched.lock().unwrap(), vec![0]);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_stops_when_session_cannot_start() {
    let api = FakeQuizApi {
        fail_start: true,
        ..FakeQuizApi::default()
    };
    let mut harness = setup_view_harness_with_api(api, ViewKind::Quiz, None, None);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert_eq!(*harness.api.started.lock().unwrap(), vec![QuizLength::Ten]);
    assert!(harness.api.fetched.lock().unwrap().is_empty(), "question fetched anyway");
    assert!(html.contains("could not start a new quiz"), "missing error in {html}");
    assert!(html.contains("Back to start"), "missing home link in {html}");
    assert!(!html.contains("Question 1 of"), "board rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_quiz_lengths() {
    let mut harness = setup_view_harness(ViewKind::Home, None, None);
    harness.rebuild();
    let html = harness.render();

    for label in ["10 questions", "15 questions", "25 questions"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_shows_grade() {
    let mut harness =
        setup_view_harness(ViewKind::Results, None, Some(ResultsSummary::new(7, 10)));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("7 / 10"), "missing score in {html}");
    assert!(html.contains("70%"), "missing percentage in {html}");
    assert!(html.contains("grade-C"), "missing grade in {html}");
    assert!(html.contains("Play again"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_without_quiz() {
    let mut harness = setup_view_harness(ViewKind::Results, None, None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No finished quiz yet."), "missing placeholder in {html}");
}
