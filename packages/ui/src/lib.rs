//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_regular_icons;
    pub use dioxus_free_icons::icons::fa_solid_icons;
}

mod auth;
pub use auth::{
    clear_session_storage, persist_session, use_auth, AuthProvider, AuthState, SignOutButton,
};

mod service;
pub use service::make_service;

mod navbar;
pub use navbar::Navbar;

mod course_card;
pub use course_card::CourseCard;

mod enroll_button;
pub use enroll_button::EnrollButton;

mod search_bar;
pub use search_bar::SearchBar;

mod status;
pub use status::ErrorBanner;
