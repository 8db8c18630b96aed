use dioxus::prelude::*;

use crate::app::models::Notice;

#[component]
pub fn MessagePopup(text: String, level: Notice) -> Element {
    rsx! {
        div {
            class: "popup",
            id: match level {
                Notice::Info => "msgnorm",
                Notice::Error => "msgerr",
            },
            "{text}"
        }
    }
}
