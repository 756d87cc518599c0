use dioxus::prelude::*;

use aftercare_common::fixtures;
use aftercare_common::forms::WarrantyRegistration;

use super::app::Route;
use super::toast::{delay_ms, use_toasts};

/// Pause before leaving a submitted form, long enough to read the toast.
const SUBMIT_NAV_MS: u32 = 1500;

#[component]
pub fn RegisterWarrantyView() -> Element {
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut product_id = use_signal(String::new);
    let mut installation_date = use_signal(String::new);

    let today = chrono::Local::now().date_naive().to_string();
    let products = fixtures::products();

    let submit = move |_| {
        let form = WarrantyRegistration {
            product_id: product_id.read().clone(),
            installation_date: installation_date.read().clone(),
        };
        match form.validate() {
            Ok(()) => {
                tracing::info!(product = %form.product_id, "warranty registration submitted");
                toasts.info(
                    "Warranty Activated!",
                    "Your warranty has been successfully registered",
                );
                spawn(async move {
                    delay_ms(SUBMIT_NAV_MS).await;
                    nav.push(Route::Dashboard {});
                });
            }
            Err(err) => {
                tracing::debug!("warranty registration rejected: {err}");
                toasts.error("Missing Information", "Please fill in all required fields");
            }
        }
    };

    rsx! {
        div { class: "screen",
            header { class: "app-header",
                button {
                    class: "ghost",
                    onclick: move |_| { nav.push(Route::Dashboard {}); },
                    "← Back"
                }
            }
            main { class: "container narrow",
                div { class: "card",
                    div { class: "form-heading",
                        h1 { "Register Warranty" }
                        p { "Activate warranty for your product" }
                    }
                    div { class: "form-group",
                        label { "Select Product *" }
                        select {
                            value: "{product_id}",
                            onchange: move |evt| product_id.set(evt.value()),
                            option { value: "", disabled: true, "Choose a product" }
                            {products.iter().map(|p| {
                                rsx! {
                                    option { key: "{p.id.0}", value: "{p.id.0}", "{p.name}" }
                                }
                            })}
                        }
                    }
                    div { class: "form-group",
                        label { "Installation Date *" }
                        input {
                            r#type: "date",
                            value: "{installation_date}",
                            max: "{today}",
                            oninput: move |evt| installation_date.set(evt.value()),
                        }
                        span { class: "field-hint", "Warranty will be calculated from this date" }
                    }
                    div { class: "info-panel",
                        h3 { "Important Information" }
                        ul {
                            li { "Warranty period starts from installation date" }
                            li { "Keep your invoice and serial number safe" }
                            li { "Register within 30 days of purchase for best coverage" }
                        }
                    }
                    div { class: "action-row",
                        button {
                            class: "secondary",
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            "Cancel"
                        }
                        button { class: "primary", onclick: submit, "Activate Warranty" }
                    }
                }
            }
        }
    }
}
