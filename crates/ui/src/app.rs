use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::QuizRun;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_context_provider(QuizRun::new_in_scope);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "NFL Stat Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
