use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::QuizLength;
use tracing::warn;

use crate::context::{AppContext, QuizRun};
use crate::routes::Route;
use crate::views::ViewError;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let run = use_context::<QuizRun>();
    let navigator = use_navigator();

    let error = use_signal(|| None::<ViewError>);
    let starting = use_signal(|| None::<QuizLength>);
    let default_length = ctx.default_length();

    let start = use_callback(move |length: QuizLength| {
        let mut error = error;
        let mut starting = starting;
        let mut run = run;
        if starting().is_some() {
            return;
        }
        starting.set(Some(length));
        let api = ctx.quiz_api();
        spawn(async move {
            match api.start_quiz(length).await {
                Ok(()) => {
                    error.set(None);
                    run.length.set(Some(length));
                    run.results.set(None);
                    navigator.push(Route::Quiz {});
                }
                Err(err) => {
                    warn!(error = %err, "failed to start quiz");
                    error.set(Some(ViewError::from(&err)));
                }
            }
            starting.set(None);
        });
    });

    rsx! {
        div { class: "page home",
            h2 { "Who had the better season?" }
            p { "Two players, one stat. Pick the player with the bigger number." }

            div { class: "length-picker",
                for length in QuizLength::ALL {
                    button {
                        key: "{length.count()}",
                        class: length_class(length, default_length),
                        disabled: starting().is_some(),
                        onclick: move |_| start.call(length),
                        if starting() == Some(length) {
                            "Starting..."
                        } else {
                            "{length}"
                        }
                    }
                }
            }

            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

fn length_class(length: QuizLength, default_length: QuizLength) -> &'static str {
    if length == default_length {
        "length primary"
    } else {
        "length"
    }
}
