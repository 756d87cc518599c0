use dioxus::prelude::*;

use aftercare_common::phone::{sanitize_digits, MOBILE_LEN, OTP_LEN};
use aftercare_common::session::LoginFlow;

use super::app::Route;
use super::session_state::{save_session, use_session};
use super::toast::use_toasts;

#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut flow = use_signal(LoginFlow::default);
    let mut mobile_input = use_signal(String::new);
    let mut otp_input = use_signal(String::new);

    let role = session.read().role_or_default();
    let otp_sent = flow.read().otp_sent();

    let send_otp = move |_| {
        let mobile = mobile_input.read().clone();
        match flow.write().submit_mobile(&mobile) {
            Ok(()) => {
                toasts.info(
                    "OTP Sent",
                    "A 6-digit OTP has been sent to your mobile number",
                );
            }
            Err(err) => {
                tracing::debug!("send OTP rejected: {err}");
                toasts.error(
                    "Invalid mobile number",
                    "Please enter a valid 10-digit mobile number",
                );
            }
        }
    };

    let verify_otp = move |_| {
        let otp = otp_input.read().clone();
        let result = flow.write().submit_otp(&otp);
        match result {
            Ok(()) => {
                let mobile = flow
                    .read()
                    .mobile()
                    .unwrap_or_default()
                    .to_string();
                {
                    let mut state = session.write();
                    state.authenticate(mobile);
                    save_session(&state);
                }
                tracing::info!("login successful");
                toasts.info("Login Successful", "Welcome back!");
                nav.push(Route::Dashboard {});
            }
            Err(err) => {
                tracing::debug!("OTP verification rejected: {err}");
                toasts.error("Invalid OTP", "Please enter a valid 6-digit OTP");
            }
        }
    };

    rsx! {
        div { class: "auth-screen",
            div { class: "card auth-card",
                button {
                    class: "ghost",
                    onclick: move |_| { nav.push(Route::RoleSelection {}); },
                    "← Back"
                }
                div { class: "auth-heading",
                    h1 { "Welcome Back" }
                    p { "Login as {role.label()}" }
                }
                div { class: "form-group",
                    label { "Mobile Number" }
                    input {
                        r#type: "tel",
                        placeholder: "Enter 10-digit mobile number",
                        value: "{mobile_input}",
                        disabled: otp_sent,
                        oninput: move |evt| {
                            mobile_input.set(sanitize_digits(&evt.value(), MOBILE_LEN));
                        },
                    }
                }
                if !otp_sent {
                    button { class: "primary wide", onclick: send_otp, "Send OTP" }
                } else {
                    div { class: "form-group",
                        label { "Enter OTP" }
                        input {
                            r#type: "text",
                            placeholder: "Enter 6-digit OTP",
                            value: "{otp_input}",
                            oninput: move |evt| {
                                otp_input.set(sanitize_digits(&evt.value(), OTP_LEN));
                            },
                        }
                    }
                    button { class: "primary wide", onclick: verify_otp, "Verify & Login" }
                    button {
                        class: "ghost wide",
                        onclick: move |_| {
                            flow.write().reset();
                            otp_input.set(String::new());
                        },
                        "Resend OTP"
                    }
                }
            }
        }
    }
}
