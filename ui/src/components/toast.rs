use dioxus::prelude::*;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 2500;

/// Sleep helper for toast dismissal and post-submit navigation delays.
/// Resolves immediately off-wasm so desktop builds stay responsive.
pub async fn delay_ms(ms: u32) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_family = "wasm"))]
    let _ = ms;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Info,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// At most one toast is visible at a time; a new one replaces the
/// current one and restarts the dismissal timer.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    // Generation counter so a stale timer doesn't dismiss a newer toast.
    seq: u32,
}

/// Handle for showing toasts from event handlers.
#[derive(Clone, Copy)]
pub struct Toasts(Signal<ToastState>);

impl Toasts {
    pub fn info(&mut self, title: &str, description: &str) {
        self.show(Toast {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Info,
        });
    }

    pub fn error(&mut self, title: &str, description: &str) {
        self.show(Toast {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        });
    }

    fn show(&mut self, toast: Toast) {
        let seq = {
            let mut state = self.0.write();
            state.seq = state.seq.wrapping_add(1);
            state.current = Some(toast);
            state.seq
        };
        let mut signal = self.0;
        spawn(async move {
            delay_ms(TOAST_MS).await;
            let mut state = signal.write();
            if state.seq == seq {
                state.current = None;
            }
        });
    }
}

/// Provide toast state as shared context at the top of the app.
pub fn provide_toasts() {
    use_context_provider(|| Signal::new(ToastState::default()));
}

pub fn use_toasts() -> Toasts {
    Toasts(use_context::<Signal<ToastState>>())
}

/// Renders the active toast, if any. Mounted once next to the router.
#[component]
pub fn ToastHost() -> Element {
    let state = use_context::<Signal<ToastState>>();
    let current = state.read().current.clone();

    rsx! {
        if let Some(toast) = current {
            {
                let class = match toast.variant {
                    ToastVariant::Info => "toast",
                    ToastVariant::Destructive => "toast toast-destructive",
                };
                rsx! {
                    div { class: "{class}",
                        p { class: "toast-title", "{toast.title}" }
                        p { class: "toast-description", "{toast.description}" }
                    }
                }
            }
        }
    }
}
