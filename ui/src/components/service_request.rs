use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use dioxus::prelude::*;

use aftercare_common::fixtures;
use aftercare_common::forms::ServiceRequestDraft;

use super::app::Route;
use super::toast::{delay_ms, use_toasts};

const SUBMIT_NAV_MS: u32 = 1500;

#[component]
pub fn ServiceRequestView() -> Element {
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut product_id = use_signal(String::new);
    let mut issue_description = use_signal(String::new);
    // Data URL of the attached photo; preview only, never uploaded.
    let mut photo_preview = use_signal(|| None::<String>);

    let products = fixtures::products();

    let attach_photo = move |evt: Event<FormData>| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let mime = file
                        .content_type()
                        .unwrap_or_else(|| "image/png".to_string());
                    let encoded = BASE64.encode(&bytes);
                    tracing::debug!(name = %file.name(), size = bytes.len(), "photo attached");
                    photo_preview.set(Some(format!("data:{mime};base64,{encoded}")));
                }
                Err(err) => {
                    tracing::warn!("failed to read attachment: {err}");
                    toasts.error("Upload failed", "Could not read the selected image");
                }
            }
        });
    };

    let submit = move |_| {
        let draft = ServiceRequestDraft {
            product_id: product_id.read().clone(),
            issue_description: issue_description.read().clone(),
        };
        match draft.validate() {
            Ok(()) => {
                tracing::info!(product = %draft.product_id, "service request submitted");
                toasts.info(
                    "Service Request Created",
                    "Your request has been submitted. We'll contact you soon.",
                );
                spawn(async move {
                    delay_ms(SUBMIT_NAV_MS).await;
                    nav.push(Route::ServiceHistory {});
                });
            }
            Err(err) => {
                tracing::debug!("service request rejected: {err}");
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
                        h1 { "Service Request" }
                        p { "Describe the issue you're facing" }
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
                        label { "Describe the Issue *" }
                        textarea {
                            placeholder: "Please describe the problem in detail...",
                            rows: "5",
                            value: "{issue_description}",
                            oninput: move |evt| issue_description.set(evt.value()),
                        }
                    }
                    div { class: "form-group",
                        label { "Upload Photo (Optional)" }
                        div { class: "upload-box",
                            input {
                                r#type: "file",
                                accept: "image/*",
                                onchange: attach_photo,
                            }
                            if let Some(preview) = photo_preview.read().clone() {
                                img { class: "upload-preview", src: "{preview}", alt: "Preview" }
                                p { class: "field-hint ok", "Image uploaded successfully" }
                            } else {
                                p { class: "field-hint", "PNG, JPG up to 10MB" }
                            }
                        }
                    }
                    div { class: "info-panel",
                        h3 { "What happens next?" }
                        ul {
                            li { "We'll review your request within 24 hours" }
                            li { "Our service team will contact you to schedule a visit" }
                            li { "Track your request status in Service History" }
                        }
                    }
                    div { class: "action-row",
                        button {
                            class: "secondary",
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            "Cancel"
                        }
                        button { class: "primary", onclick: submit, "Submit Request" }
                    }
                }
            }
        }
    }
}
