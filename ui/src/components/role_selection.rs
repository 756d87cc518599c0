use dioxus::prelude::*;

use aftercare_common::session::Role;

use super::app::Route;
use super::session_state::{save_session, use_session};

#[component]
pub fn RoleSelectionView() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut select = move |role: Role| {
        {
            let mut state = session.write();
            state.select_role(role);
            save_session(&state);
        }
        tracing::debug!("role selected: {}", role.as_str());
        nav.push(Route::Login {});
    };

    rsx! {
        div { class: "landing",
            div { class: "landing-heading",
                h1 { "Warranty Management" }
                p { "Select your role to continue" }
            }
            div { class: "role-grid",
                div { class: "card role-card",
                    onclick: move |_| select(Role::Customer),
                    h2 { "Customer" }
                    p { "Register warranty, track products, and raise service requests" }
                    button { class: "primary", "Continue as Customer" }
                }
                div { class: "card role-card",
                    onclick: move |_| select(Role::Distributor),
                    h2 { "Distributor" }
                    p { "Manage customer products, update details, and assist with services" }
                    button { class: "secondary", "Continue as Distributor" }
                }
            }
        }
    }
}
