use dioxus::prelude::*;

use api::ServiceConfig;
use store::{Course, Profile, ProfileUpdate};
use ui::{make_service, use_auth, ErrorBanner, Navbar};

use crate::Route;

/// Account settings: the profile form plus the user's saved courses.
///
/// The form merges server state only after the update confirms success —
/// a failed update leaves the displayed profile untouched and shows the
/// error instead.
#[component]
pub fn Account() -> Element {
    let mut profile = use_signal(|| Option::<Profile>::None);
    let mut full_name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut save_status = use_signal(|| Option::<String>::None);
    let mut saved_courses = use_signal(Vec::<Course>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let nav = use_navigator();
    let auth = use_auth();
    let config = use_context::<ServiceConfig>();

    // Load the profile row and saved courses once the session is known
    let cfg = config.clone();
    let _loader = use_resource(move || {
        let config = cfg.clone();
        async move {
            let state = auth();
            if state.loading {
                return;
            }
            let Some(session) = state.session else {
                nav.replace(Route::Login {});
                return;
            };

            let service = make_service(&config, Some(&session));
            match service.profile(&session.user_id).await {
                Ok(row) => {
                    full_name.set(row.full_name.clone().unwrap_or_default());
                    bio.set(row.bio.clone().unwrap_or_default());
                    profile.set(Some(row));
                }
                Err(e) => {
                    tracing::error!("failed to fetch profile: {e}");
                    load_error.set(Some(format!("Could not load your profile: {e}")));
                }
            }

            match service.saved_courses(&session.user_id).await {
                Ok(list) => saved_courses.set(list),
                Err(e) => {
                    tracing::error!("failed to fetch saved courses: {e}");
                    load_error.set(Some(format!("Could not load saved courses: {e}")));
                }
            }
        }
    });

    let cfg = config.clone();
    let handle_update = move |evt: FormEvent| {
        evt.prevent_default();
        let config = cfg.clone();
        spawn(async move {
            let Some(session) = auth().session else {
                return;
            };
            save_status.set(None);
            saving.set(true);

            let update = ProfileUpdate {
                full_name: Some(full_name().trim().to_string()),
                bio: Some(bio()),
            };
            let service = make_service(&config, Some(&session));
            match service.update_profile(&session.user_id, &update).await {
                Ok(row) => {
                    // Merge only the confirmed server state
                    full_name.set(row.full_name.clone().unwrap_or_default());
                    bio.set(row.bio.clone().unwrap_or_default());
                    profile.set(Some(row));
                    save_status.set(Some("success".to_string()));
                }
                Err(e) => {
                    tracing::error!("profile update failed: {e}");
                    save_status.set(Some(format!("Update failed: {e}")));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        Navbar {
            on_navigate_courses: move |_| { nav.push(Route::Courses {}); },
            on_navigate_account: move |_| { nav.push(Route::Account {}); },
            on_navigate_login: move |_| { nav.push(Route::Login {}); },
        }

        div {
            class: "page page-narrow",

            h1 { "Account Settings" }

            if let Some(message) = load_error() {
                ErrorBanner { message }
            }

            if profile().is_some() {
                form {
                    onsubmit: handle_update,

                    div {
                        class: "form-field",
                        label { "Full Name" }
                        input {
                            r#type: "text",
                            value: full_name(),
                            oninput: move |evt| {
                                full_name.set(evt.value());
                                save_status.set(None);
                            },
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Bio" }
                        textarea {
                            rows: 4,
                            value: bio(),
                            oninput: move |evt| {
                                bio.set(evt.value());
                                save_status.set(None);
                            },
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Updating..." } else { "Update Profile" }
                        }
                        if let Some(ref status) = save_status() {
                            if status == "success" {
                                span { class: "save-status success", "Saved" }
                            } else {
                                span { class: "save-status error", "{status}" }
                            }
                        }
                    }
                }

                div {
                    class: "saved-courses",
                    h2 { "Your saved courses:" }
                    if saved_courses().is_empty() {
                        p { class: "placeholder", "Nothing saved yet." }
                    } else {
                        ul {
                            for course in saved_courses() {
                                li { key: "{course.id}", "{course.title}" }
                            }
                        }
                    }
                }
            } else {
                p { class: "placeholder", "Loading..." }
            }
        }
    }
}
