use dioxus::prelude::*;

use aftercare_common::fixtures;
use aftercare_common::forms::ProfileForm;
use aftercare_common::phone::{sanitize_digits, PINCODE_LEN};

use super::app::Route;
use super::session_state::use_session;
use super::toast::use_toasts;

#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut name = use_signal(|| fixtures::default_profile().name);
    let mut email = use_signal(|| fixtures::default_profile().email);
    let mut address = use_signal(|| fixtures::default_profile().address);
    let mut city = use_signal(|| fixtures::default_profile().city);
    let mut state_field = use_signal(|| fixtures::default_profile().state);
    let mut pincode = use_signal(|| fixtures::default_profile().pincode);

    let role = session.read().role_or_default();
    let phone = session.read().mobile.clone().unwrap_or_default();
    let phone_for_submit = phone.clone();

    let submit = move |_| {
        let form = ProfileForm {
            name: name.read().clone(),
            email: email.read().clone(),
            phone: phone_for_submit.clone(),
            address: address.read().clone(),
            city: city.read().clone(),
            state: state_field.read().clone(),
            pincode: pincode.read().clone(),
        };
        match form.validate() {
            Ok(()) => {
                tracing::info!("profile saved");
                toasts.info(
                    "Profile Updated",
                    "Your profile information has been saved successfully",
                );
            }
            Err(err) => {
                tracing::debug!("profile save rejected: {err}");
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
                    "← Back to Dashboard"
                }
            }
            main { class: "container narrow",
                div { class: "card",
                    div { class: "form-heading",
                        h1 { "My Profile" }
                        p { "{role.label()}" }
                    }
                    div { class: "form-group",
                        label { "Full Name" }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Email Address" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Phone Number" }
                        input { r#type: "tel", value: "{phone}", disabled: true }
                        span { class: "field-hint", "Phone number cannot be changed" }
                    }
                    h2 { "Address Details" }
                    div { class: "form-group",
                        label { "Street Address" }
                        input {
                            r#type: "text",
                            value: "{address}",
                            oninput: move |evt| address.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "City" }
                            input {
                                r#type: "text",
                                value: "{city}",
                                oninput: move |evt| city.set(evt.value()),
                            }
                        }
                        div { class: "form-group",
                            label { "State" }
                            input {
                                r#type: "text",
                                value: "{state_field}",
                                oninput: move |evt| state_field.set(evt.value()),
                            }
                        }
                    }
                    div { class: "form-group",
                        label { "PIN Code" }
                        input {
                            r#type: "text",
                            value: "{pincode}",
                            oninput: move |evt| {
                                pincode.set(sanitize_digits(&evt.value(), PINCODE_LEN));
                            },
                        }
                    }
                    div { class: "action-row",
                        button {
                            class: "secondary",
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            "Cancel"
                        }
                        button { class: "primary", onclick: submit, "Save Changes" }
                    }
                }
            }
        }
    }
}
