use dioxus::prelude::*;

use super::app::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));

    use_effect(move || {
        tracing::warn!("attempted to access non-existent route: {path}");
    });

    rsx! {
        div { class: "landing",
            div { class: "card auth-card empty-state",
                h1 { "404" }
                p { "Oops! Page not found" }
                button {
                    class: "primary",
                    onclick: move |_| { nav.push(Route::RoleSelection {}); },
                    "Return to Home"
                }
            }
        }
    }
}
