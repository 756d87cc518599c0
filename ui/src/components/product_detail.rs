use dioxus::prelude::*;

use aftercare_common::dates::format_date;
use aftercare_common::fixtures;
use aftercare_common::session::Role;

use super::app::Route;
use super::session_state::use_session;

#[component]
pub fn ProductDetailView(id: String) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let role = session.read().role_or_default();

    let Some(product) = fixtures::product(&id) else {
        return rsx! {
            div { class: "screen",
                header { class: "app-header",
                    button {
                        class: "ghost",
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        "← Back to Dashboard"
                    }
                }
                main { class: "container narrow",
                    div { class: "card empty-state",
                        h3 { "Product Not Found" }
                        p { "No product with id {id} is registered to this account." }
                    }
                }
            }
        };
    };

    let purchase = format_date(product.purchase_date);
    let installation = format_date(product.installation_date);
    let expiry = format_date(product.warranty_expiry);

    rsx! {
        div { class: "screen",
            header { class: "app-header",
                button {
                    class: "ghost",
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    "← Back to Dashboard"
                }
            }
            main { class: "container narrow",
                div { class: "card",
                    div { class: "product-card-heading",
                        div {
                            h1 { "{product.name}" }
                            p { class: "muted", "{product.model}" }
                        }
                        span { class: "{product.warranty_status.badge_class()}",
                            "{product.warranty_status.label()}"
                        }
                    }
                    div { class: "detail-grid",
                        div {
                            p { class: "muted", "Serial Number" }
                            p { class: "strong", "{product.serial_number}" }
                        }
                        div {
                            p { class: "muted", "Invoice Number" }
                            p { class: "strong", "{product.invoice_number}" }
                        }
                    }
                }

                div { class: "card",
                    h2 { "Warranty Status" }
                    div { class: "detail-grid",
                        div { class: "detail-tile",
                            p { class: "muted", "Purchase Date" }
                            p { class: "strong", "{purchase}" }
                        }
                        div { class: "detail-tile",
                            p { class: "muted", "Installation Date" }
                            p { class: "strong", "{installation}" }
                        }
                        div { class: "detail-tile",
                            p { class: "muted", "Warranty Period" }
                            p { class: "strong", "{product.warranty_period}" }
                        }
                        div { class: "detail-tile",
                            p { class: "muted", "Warranty Expires" }
                            p { class: "strong", "{expiry}" }
                        }
                    }
                }

                if role == Role::Distributor {
                    div { class: "card",
                        h2 { "Customer Details" }
                        div { class: "detail-grid",
                            div {
                                p { class: "muted", "Customer Name" }
                                p { class: "strong", "{product.customer_name}" }
                            }
                            div {
                                p { class: "muted", "Phone Number" }
                                p { class: "strong", "{product.customer_phone}" }
                            }
                            div {
                                p { class: "muted", "Email" }
                                p { class: "strong", "{product.customer_email}" }
                            }
                        }
                    }
                }

                div { class: "action-row",
                    button {
                        class: "primary",
                        onclick: move |_| { nav.push(Route::ServiceRequest {}); },
                        "Raise Service Request"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| { nav.push(Route::ServiceHistory {}); },
                        "View Service History"
                    }
                }
            }
        }
    }
}
