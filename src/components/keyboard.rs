use dioxus::prelude::*;

use crate::app::models::KeyPress;

const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[component]
pub fn Keyboard(on_key: EventHandler<KeyPress>, disabled: bool) -> Element {
    rsx! {
        div { class: "keyboard",
            for (index, row) in ROWS.iter().enumerate() {
                div { class: "key-row", key: "{index}",
                    if index == ROWS.len() - 1 {
                        button { class: "key wide", disabled: disabled, onclick: move |_| on_key.call(KeyPress::Enter), "ENTER" }
                    }
                    for letter in row.chars() {
                        button { class: "key", disabled: disabled,
                            onclick: move |_| on_key.call(KeyPress::Letter(letter)),
                            "{letter}"
                        }
                    }
                    if index == ROWS.len() - 1 {
                        button { class: "key wide", disabled: disabled, onclick: move |_| on_key.call(KeyPress::Delete), "DELETE" }
                    }
                }
            }
        }
    }
}
