//! Sign-in page with an email/password form.

use dioxus::prelude::*;

use api::{AuthClient, ServiceConfig};
use ui::{persist_session, use_auth, AuthState, Navbar};

use crate::Route;

/// Sign-in page component.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let mut auth_state = use_auth();
    let nav = use_navigator();
    let config = use_context::<ServiceConfig>();

    // Already signed in: back to the catalog
    use_effect(move || {
        let state = auth_state();
        if !state.loading && state.session.is_some() {
            nav.replace(Route::Courses {});
        }
    });

    let cfg = config.clone();
    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let config = cfg.clone();
        spawn(async move {
            error.set(None);

            if email().trim().is_empty() || password().is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            submitting.set(true);
            match AuthClient::new(config).sign_in(&email(), &password()).await {
                Ok(session) => {
                    persist_session(&session);
                    auth_state.set(AuthState {
                        session: Some(session),
                        loading: false,
                    });
                    nav.replace(Route::Courses {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        Navbar {
            on_navigate_courses: move |_| { nav.push(Route::Courses {}); },
            on_navigate_account: move |_| { nav.push(Route::Account {}); },
            on_navigate_login: move |_| { nav.push(Route::Login {}); },
        }

        div {
            class: "login-container",

            h1 { "CourseHub" }

            p {
                class: "login-subtitle",
                "Sign in to save courses and edit your profile."
            }

            form {
                class: "login-form",
                onsubmit: handle_sign_in,

                if let Some(err) = error() {
                    div { class: "error-banner", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign In" }
                }
            }
        }
    }
}
