use dioxus::prelude::*;

use crate::icons::fa_solid_icons::FaMagnifyingGlass;
use crate::Icon;

/// Search input with a trailing icon. Emits every keystroke; debouncing is
/// the caller's concern.
#[component]
pub fn SearchBar(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-bar",
            input {
                r#type: "text",
                class: "search-input",
                placeholder: "Search courses...",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            span {
                class: "search-icon",
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
            }
        }
    }
}
