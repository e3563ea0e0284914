use dioxus::prelude::*;
use ui::FormEditor;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Form Editor" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            class: "App",
            header {
                class: "App-header",
                h1 { "Form Editor Application" }
            }

            FormEditor {}

            footer {
                class: "App-footer",
                p { "Form Editor App © 2024" }
            }
        }
    }
}
