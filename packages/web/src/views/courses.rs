use dioxus::prelude::*;

use api::ServiceConfig;
use store::{category_name, Category, Course};
use ui::{make_service, CourseCard, ErrorBanner, Navbar, SearchBar};

use crate::Route;

/// Delay between the last keystroke and the remote search query.
const SEARCH_DEBOUNCE_MS: u64 = 250;

/// The course catalog: full list on load, debounced remote search while
/// typing. The remote query is the single filtering authority; each request
/// carries a generation token and a response older than the newest token is
/// dropped, so a slow query can never overwrite newer results.
#[component]
pub fn Courses() -> Element {
    let mut courses = use_signal(Vec::<Course>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut search_term = use_signal(String::new);
    let mut search_generation = use_signal(|| 0u64);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let nav = use_navigator();
    let config = use_context::<ServiceConfig>();

    // Initial load: the catalog plus the category list for label resolution
    let cfg = config.clone();
    let _loader = use_resource(move || {
        let config = cfg.clone();
        async move {
            let service = make_service(&config, None);
            match service.list_courses().await {
                Ok(list) => courses.set(list),
                Err(e) => {
                    tracing::error!("failed to fetch courses: {e}");
                    load_error.set(Some(format!("Could not load courses: {e}")));
                }
            }
            match service.list_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => {
                    tracing::error!("failed to fetch categories: {e}");
                    load_error.set(Some(format!("Could not load categories: {e}")));
                }
            }
            loading.set(false);
        }
    });

    let cfg = config.clone();
    let handle_search_input = move |term: String| {
        search_term.set(term.clone());
        let generation = search_generation() + 1;
        search_generation.set(generation);
        let config = cfg.clone();
        spawn(async move {
            sleep_ms(SEARCH_DEBOUNCE_MS).await;
            if search_generation() != generation {
                // superseded by a newer keystroke
                return;
            }

            let service = make_service(&config, None);
            let result = service.search_courses(&term).await;
            if search_generation() != generation {
                // stale response; a newer query owns the list now
                return;
            }

            match result {
                Ok(list) => {
                    load_error.set(None);
                    courses.set(list);
                }
                Err(e) => {
                    tracing::error!("course search failed: {e}");
                    load_error.set(Some(format!("Search failed: {e}")));
                }
            }
        });
    };

    let on_require_auth = move |_: ()| {
        nav.push(Route::Login {});
    };

    rsx! {
        Navbar {
            on_navigate_courses: move |_| { nav.push(Route::Courses {}); },
            on_navigate_account: move |_| { nav.push(Route::Account {}); },
            on_navigate_login: move |_| { nav.push(Route::Login {}); },
        }

        div {
            class: "page",

            h1 { "Courses" }

            SearchBar {
                value: search_term(),
                on_input: handle_search_input,
            }

            if let Some(message) = load_error() {
                ErrorBanner { message }
            }

            if loading() {
                p { class: "placeholder", "Loading..." }
            } else if courses().is_empty() {
                p { class: "placeholder", "No courses match your search." }
            } else {
                div {
                    class: "course-grid",
                    for course in courses() {
                        CourseCard {
                            key: "{course.id}",
                            category: category_name(&categories(), course.category_id),
                            course,
                            on_require_auth: on_require_auth,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
