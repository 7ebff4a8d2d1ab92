//! Authentication context and hooks for the UI.

use api::{AuthClient, ServiceConfig, Session};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the restore-on-mount pass has run; views gate their
    /// redirects on this to avoid bouncing a user whose session is still
    /// being read back.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the session signal.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Restore a persisted session on mount
    let _ = use_resource(move || async move {
        auth_state.set(AuthState {
            session: load_stored_session(),
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let config = use_context::<ServiceConfig>();

    let onclick = move |_| {
        let config = config.clone();
        async move {
            if let Some(session) = auth_state().session {
                // Best-effort revocation; the local session goes either way
                if let Err(e) = AuthClient::new(config).sign_out(&session).await {
                    tracing::warn!("sign-out request failed: {e}");
                }
            }
            clear_session_storage();
            auth_state.set(AuthState {
                session: None,
                loading: false,
            });
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read the persisted session, if any. Unreadable state is signed out.
#[cfg(target_arch = "wasm32")]
pub fn load_stored_session() -> Option<Session> {
    let raw = local_storage()?.get_item(api::SESSION_STORAGE_KEY).ok()??;
    Session::from_json(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_stored_session() -> Option<Session> {
    None
}

/// Persist the session so a reload restores it (web only).
#[cfg(target_arch = "wasm32")]
pub fn persist_session(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(api::SESSION_STORAGE_KEY, &session.to_json());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn persist_session(_session: &Session) {}

#[cfg(target_arch = "wasm32")]
pub fn clear_session_storage() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(api::SESSION_STORAGE_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_session_storage() {}
