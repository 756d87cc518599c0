use dioxus::prelude::*;

use aftercare_common::dates::format_date;
use aftercare_common::fixtures;
use aftercare_common::product::filter_products;
use aftercare_common::session::Role;

use super::app::Route;
use super::session_state::{save_session, use_session};

#[component]
pub fn DashboardView() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut search_query = use_signal(String::new);

    let role = session.read().role_or_default();
    let heading = match role {
        Role::Customer => "My Products",
        Role::Distributor => "Distributor Portal",
    };
    let list_heading = match role {
        Role::Customer => "Your Products",
        Role::Distributor => "Products Sold",
    };

    let products = fixtures::products();
    let query = search_query.read().clone();
    let filtered: Vec<_> = filter_products(&products, &query)
        .into_iter()
        .cloned()
        .collect();

    let logout = move |_| {
        {
            let mut state = session.write();
            state.logout();
            save_session(&state);
        }
        tracing::info!("logged out");
        nav.push(Route::RoleSelection {});
    };

    rsx! {
        div { class: "screen",
            header { class: "app-header",
                h1 { "{heading}" }
                div { class: "header-actions",
                    button {
                        class: "ghost",
                        onclick: move |_| { nav.push(Route::Profile {}); },
                        "Profile"
                    }
                    button { class: "ghost", onclick: logout, "Logout" }
                }
            }
            main { class: "container",
                div { class: "search-bar",
                    input {
                        r#type: "text",
                        placeholder: "Search products...",
                        value: "{search_query}",
                        oninput: move |evt| search_query.set(evt.value()),
                    }
                    button {
                        class: "primary",
                        onclick: move |_| { nav.push(Route::RegisterWarranty {}); },
                        "+ Register Warranty"
                    }
                }

                div { class: "quick-actions",
                    div { class: "card action-card",
                        onclick: move |_| { nav.push(Route::RegisterWarranty {}); },
                        span { "Register Warranty" }
                    }
                    div { class: "card action-card",
                        onclick: move |_| { nav.push(Route::ServiceRequest {}); },
                        span { "Service Request" }
                    }
                    div { class: "card action-card",
                        onclick: move |_| { nav.push(Route::ServiceHistory {}); },
                        span { "Service History" }
                    }
                    div { class: "card action-card",
                        onclick: move |_| { nav.push(Route::Profile {}); },
                        span { "Profile" }
                    }
                }

                h2 { "{list_heading}" }
                div { class: "product-list",
                    if filtered.is_empty() {
                        div { class: "card empty-state",
                            h3 { "No Products Found" }
                            p { "Try adjusting your search or register a new warranty" }
                        }
                    } else {
                        {filtered.into_iter().map(|product| {
                            let id = product.id.0.clone();
                            let detail_id = id.clone();
                            let purchase = format_date(product.purchase_date);
                            let expiry = format_date(product.warranty_expiry);
                            rsx! {
                                div { class: "card product-card",
                                    key: "{product.id.0}",
                                    onclick: move |_| {
                                        nav.push(Route::ProductDetail { id: id.clone() });
                                    },
                                    div { class: "product-card-heading",
                                        div {
                                            h3 { "{product.name}" }
                                            p { class: "muted", "{product.model}" }
                                        }
                                        span { class: "{product.warranty_status.badge_class()}",
                                            "{product.warranty_status.label()}"
                                        }
                                    }
                                    div { class: "product-card-grid",
                                        p { span { class: "muted", "Serial: " } "{product.serial_number}" }
                                        p { span { class: "muted", "Purchase: " } "{purchase}" }
                                        if role == Role::Distributor {
                                            p { span { class: "muted", "Customer: " } "{product.customer_phone}" }
                                        }
                                        p { span { class: "muted", "Warranty Expires: " } "{expiry}" }
                                    }
                                    button {
                                        class: "secondary",
                                        onclick: move |evt| {
                                            evt.stop_propagation();
                                            nav.push(Route::ProductDetail { id: detail_id.clone() });
                                        },
                                        "View Details"
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
