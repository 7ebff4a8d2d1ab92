use dioxus::prelude::*;

use api::ServiceConfig;
use ui::AuthProvider;
use views::{Account, Courses, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/courses")]
    Courses {},
    #[route("/account")]
    Account {},
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // The app is useless without the remote endpoint and key; refuse to
    // start rather than run with null credentials.
    let config = ServiceConfig::from_env().expect("remote service configuration");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/courses`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Courses {});
    rsx! {}
}
