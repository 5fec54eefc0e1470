// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use views::{Board, JobDetail};

mod catalog;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(BoardLayout)]
        #[route("/")]
        Board {},
        #[route("/jobs/:id")]
        JobDetail { id: String },
}

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "desktop")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(catalog::load);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Site header shared by every page.
#[component]
fn BoardLayout() -> Element {
    rsx! {
        header { class: "bg-white border-b border-gray-200",
            div { class: "max-w-7xl mx-auto px-6 py-4 flex items-center justify-between",
                Link {
                    to: Route::Board {},
                    class: "text-xl font-bold text-gray-900",
                    "JobFrica"
                }
                span { class: "text-sm text-gray-500", "Jobs across Africa" }
            }
        }

        main {
            Outlet::<Route> {}
        }
    }
}
