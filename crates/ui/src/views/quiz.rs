use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::Choice;
use services::{Destination, QuizController};
use tracing::warn;

use crate::context::{AppContext, QuizRun};
use crate::routes::Route;
use crate::timer::DioxusScheduler;
use crate::views::ViewError;
use crate::vm::{CardSlot, PromptState, QuizScreen, ScreenHandle};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let run = use_context::<QuizRun>();
    let navigator = use_navigator();
    let screen = use_signal(QuizScreen::default);
    let start_error = use_signal(|| None::<ViewError>);

    let started_here = *run.length.peek();
    let length = started_here.unwrap_or(ctx.default_length());

    let controller = use_hook(|| {
        QuizController::new(
            ctx.quiz_api(),
            Rc::new(DioxusScheduler),
            ScreenHandle::new(screen),
            length.count(),
        )
    });

    use_hook({
        let controller = controller.clone();
        let api = ctx.quiz_api();
        move || {
            spawn(async move {
                // Arriving here directly: open a server session first.
                if started_here.is_none() {
                    if let Err(err) = api.start_quiz(length).await {
                        warn!(error = %err, "failed to start quiz");
                        let mut start_error = start_error;
                        start_error.set(Some(ViewError::from(&err)));
                        return;
                    }
                    let mut run = run;
                    run.length.set(Some(length));
                }
                controller.load_question(0).await;
            });
        }
    });

    use_effect(move || {
        let destination = screen.read().destination;
        if let Some(Destination::Results(summary)) = destination {
            let mut results = run.results;
            results.set(Some(summary));
            navigator.replace(Route::Results {});
        }
    });

    let on_choose = {
        let controller = controller.clone();
        move |choice: Choice| {
            let controller = controller.clone();
            spawn(async move {
                controller.submit_answer(choice).await;
            });
        }
    };

    let on_retry = move |()| {
        let controller = controller.clone();
        spawn(async move {
            controller.retry_question().await;
        });
    };

    if let Some(err) = start_error() {
        return rsx! {
            div { class: "page quiz",
                p { id: "quiz-start-error", class: "error", "{err.message()}" }
                Link { class: "play-again", to: Route::Home {}, "Back to start" }
            }
        };
    }

    rsx! {
        QuizBoard { screen: screen(), on_choose, on_retry }
    }
}

#[component]
pub fn QuizBoard(
    screen: QuizScreen,
    on_choose: EventHandler<Choice>,
    on_retry: EventHandler<()>,
) -> Element {
    let progress_style = screen.progress_style();
    let prompt_class = match screen.prompt_state {
        PromptState::Loading => "question-text loading",
        PromptState::Ready => "question-text",
        PromptState::Error => "question-text error",
    };

    rsx! {
        div { class: "page quiz",
            div { class: "quiz-header",
                span { id: "question-counter", "{screen.counter}" }
                span { id: "score-display", "{screen.score_label}" }
            }
            div { class: "progress",
                div { id: "progress-bar", class: "progress-bar", style: "{progress_style}" }
            }

            h2 { id: "question-text", class: "{prompt_class}", "{screen.prompt}" }
            if screen.prompt_state == PromptState::Error {
                button {
                    id: "question-retry",
                    class: "retry",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }

            div { class: "cards",
                for choice in Choice::BOTH {
                    PlayerCard {
                        key: "{choice}",
                        choice,
                        card_class: screen.card_class(choice),
                        enabled: screen.cards_enabled,
                        slot: screen.card(choice).clone(),
                        on_choose,
                    }
                }
            }

            if let Some(feedback) = screen.feedback.clone() {
                div { id: "feedback", class: "{feedback.kind.class()}",
                    span { class: "feedback-icon", "{feedback.icon}" }
                    span { class: "feedback-text", "{feedback.text}" }
                }
            }
        }
    }
}

#[component]
fn PlayerCard(
    choice: Choice,
    card_class: String,
    enabled: bool,
    slot: CardSlot,
    on_choose: EventHandler<Choice>,
) -> Element {
    let Some(player) = slot.player else {
        return rsx! {
            div { id: "player{choice}-card", class: "{card_class} empty" }
        };
    };

    rsx! {
        button {
            id: "player{choice}-card",
            class: "{card_class}",
            disabled: !enabled,
            onclick: move |_| {
                if enabled {
                    on_choose.call(choice);
                }
            },
            img { id: "player{choice}-img", src: "{player.headshot}", alt: "{player.name}" }
            div { id: "player{choice}-name", class: "player-name", "{player.name}" }
            div { id: "player{choice}-team", class: "player-team", "{player.team}" }
            if let Some(reveal) = slot.reveal {
                div { id: "player{choice}-value", class: "player-value", "{reveal.value}" }
                div { id: "player{choice}-label", class: "player-label", "{reveal.label}" }
            }
        }
    }
}
