use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::SignOutButton;

/// Top navigation bar: catalog link plus the session controls. The Account
/// link and Sign Out button appear only for a signed-in user.
#[component]
pub fn Navbar(
    on_navigate_courses: EventHandler<()>,
    on_navigate_account: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let auth = use_auth();

    rsx! {
        header {
            class: "navbar",
            nav {
                class: "navbar-links",
                a {
                    class: "navbar-link",
                    onclick: move |_| on_navigate_courses.call(()),
                    "Courses"
                }
                if auth().session.is_some() {
                    a {
                        class: "navbar-link",
                        onclick: move |_| on_navigate_account.call(()),
                        "Account"
                    }
                    SignOutButton { class: "navbar-link navbar-button" }
                } else {
                    a {
                        class: "navbar-link",
                        onclick: move |_| on_navigate_login.call(()),
                        "Sign In"
                    }
                }
            }
        }
    }
}
