use dioxus::prelude::*;

/// Visible failure banner for background fetches. Errors are reported here,
/// not only logged.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            "{message}"
        }
    }
}
