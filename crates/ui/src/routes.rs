use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                Link { to: Route::Home {}, h1 { "NFL Stat Quiz" } }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
