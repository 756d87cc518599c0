use dioxus::prelude::*;

use aftercare_common::session::{Role, Session};

/// Storage keys for the persisted session. Plain strings, no schema
/// versioning; anything unparseable is treated as absent.
pub const ROLE_KEY: &str = "aftercare_role";
pub const AUTH_KEY: &str = "aftercare_authenticated";
pub const MOBILE_KEY: &str = "aftercare_mobile";

#[cfg(target_family = "wasm")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the session persisted in localStorage. Survives reloads within
/// a browser; on non-wasm targets there is nothing to load.
pub fn load_session() -> Session {
    #[cfg(target_family = "wasm")]
    {
        if let Some(storage) = local_storage() {
            let get = |key: &str| storage.get_item(key).ok().flatten();
            return Session {
                role: get(ROLE_KEY).and_then(|s| Role::parse(&s)),
                authenticated: get(AUTH_KEY).as_deref() == Some("true"),
                mobile: get(MOBILE_KEY).filter(|s| !s.is_empty()),
            };
        }
    }
    Session::default()
}

/// Write the session back to localStorage. Best-effort: a browser that
/// refuses storage access just loses persistence across reloads.
pub fn save_session(session: &Session) {
    #[cfg(target_family = "wasm")]
    {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, session not persisted");
            return;
        };
        let result = match session.role {
            Some(role) => storage.set_item(ROLE_KEY, role.as_str()),
            None => storage.remove_item(ROLE_KEY),
        }
        .and(if session.authenticated {
            storage.set_item(AUTH_KEY, "true")
        } else {
            storage.remove_item(AUTH_KEY)
        })
        .and(match &session.mobile {
            Some(mobile) => storage.set_item(MOBILE_KEY, mobile),
            None => storage.remove_item(MOBILE_KEY),
        });
        if result.is_err() {
            tracing::warn!("failed to persist session to localStorage");
        }
    }
    #[cfg(not(target_family = "wasm"))]
    let _ = session;
}

/// The session signal provided as context at the top of the app.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}
