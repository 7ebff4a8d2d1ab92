//! Bookmark-style enrollment toggle for a single course.

use api::ServiceConfig;
use dioxus::prelude::*;
use store::{SaveState, ToggleIntent};

use crate::auth::use_auth;
use crate::icons::{fa_regular_icons, fa_solid_icons};
use crate::service::make_service;
use crate::Icon;

/// Saved/unsaved toggle backed by the membership table.
///
/// On mount the current membership is fetched; until it is known the button
/// shows a placeholder. A signed-out click emits `on_require_auth` instead
/// of mutating data. While a toggle is in flight further clicks are refused,
/// and a failed remote call rolls the optimistic state back and surfaces the
/// error below the button.
#[component]
pub fn EnrollButton(course_id: i64, on_require_auth: EventHandler<()>) -> Element {
    let auth = use_auth();
    let config = use_context::<ServiceConfig>();
    let mut state = use_signal(|| Option::<SaveState>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Determine current membership on mount and whenever the session changes
    let cfg = config.clone();
    let _loader = use_resource(move || {
        let config = cfg.clone();
        async move {
            let Some(session) = auth().session else {
                state.set(Some(SaveState::Unsaved));
                return;
            };
            let service = make_service(&config, Some(&session));
            match service.is_saved(&session.user_id, course_id).await {
                Ok(saved) => state.set(Some(SaveState::from_membership(saved))),
                Err(e) => {
                    tracing::error!("failed to fetch membership for course {course_id}: {e}");
                    error.set(Some(format!("Could not load bookmark state: {e}")));
                    state.set(Some(SaveState::Unsaved));
                }
            }
        }
    });

    let cfg = config.clone();
    let handle_click = move |_| {
        let config = cfg.clone();
        async move {
            let Some(session) = auth().session else {
                on_require_auth.call(());
                return;
            };
            let Some(mut current) = state() else {
                return;
            };
            let Some(intent) = current.begin_toggle() else {
                // a toggle for this pair is already in flight
                return;
            };
            state.set(Some(current));
            error.set(None);

            let service = make_service(&config, Some(&session));
            let result = match intent {
                ToggleIntent::Save => service.save_course(&session.user_id, course_id).await,
                ToggleIntent::Unsave => service.unsave_course(&session.user_id, course_id).await,
            };

            match result {
                Ok(()) => current.complete(),
                Err(e) => {
                    tracing::error!("enrollment toggle failed for course {course_id}: {e}");
                    error.set(Some(format!("Could not update bookmark: {e}")));
                    current.rollback();
                }
            }
            state.set(Some(current));
        }
    };

    let Some(current) = state() else {
        return rsx! {
            span { class: "enroll-loading", "Loading..." }
        };
    };

    rsx! {
        div {
            class: "enroll",
            button {
                class: "enroll-button",
                title: if current.is_saved() { "Remove bookmark" } else { "Save course" },
                disabled: current.is_pending(),
                onclick: handle_click,
                if current.is_saved() {
                    Icon { icon: fa_solid_icons::FaBookmark, width: 20, height: 20 }
                } else {
                    Icon { icon: fa_regular_icons::FaBookmark, width: 20, height: 20 }
                }
            }
            if let Some(message) = error() {
                p { class: "enroll-error", "{message}" }
            }
        }
    }
}
