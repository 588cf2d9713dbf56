use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::QuizRun;
use crate::routes::Route;
use crate::vm::ResultsVm;

#[component]
pub fn ResultsView() -> Element {
    let run = use_context::<QuizRun>();
    let results = (run.results)();

    rsx! {
        div { class: "page results",
            h2 { "Final Results" }
            match results {
                Some(summary) => rsx! {
                    ResultsCard { results: ResultsVm::from(&summary) }
                },
                None => rsx! {
                    p { "No finished quiz yet." }
                },
            }
            Link { class: "play-again", to: Route::Home {}, "Play again" }
        }
    }
}

#[component]
pub fn ResultsCard(results: ResultsVm) -> Element {
    rsx! {
        dl { class: "summary",
            dt { "Score" }
            dd { id: "final-score", "{results.score_line}" }

            dt { "Percentage" }
            dd { id: "final-percentage", "{results.percentage_label}" }

            dt { "Grade" }
            dd { id: "final-grade", class: "grade grade-{results.grade}", "{results.grade}" }
        }
    }
}
