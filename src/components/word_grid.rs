use dioxus::prelude::*;

use crate::{
    app::{
        actions::{handle_input, handle_key},
        models::{KeyPress, Popup},
    },
    game::{PuzzleSession, SlotView, Snapshot},
};

fn area_class(slot: &SlotView, active: bool) -> &'static str {
    match (slot.solved, slot.revealed_by_hint, active) {
        (true, true, _) => "input-area hinted",
        (true, false, _) => "input-area solved",
        (false, _, true) => "input-area active",
        (false, _, false) => "input-area",
    }
}

/// the lock plus the typeable suffix
fn max_length(slot: &SlotView) -> String {
    (slot.max_suffix_len + 1).to_string()
}

/// puts the session's text back into a word input the virtual dom considers unchanged
fn resync_input(index: usize, shown: &str) {
    _ = document::eval(&format!(
        "document.getElementById('word-{index}').value = '{shown}';"
    ));
}

/// one text input per word, the locked first letter always shown in front
#[component]
pub fn WordGrid(
    snapshot: Snapshot,
    mut session: Signal<PuzzleSession>,
    message: Signal<Popup>,
) -> Element {
    let over = snapshot.status.is_over();

    rsx! {
        div { class: "grid",
            for (index, slot) in snapshot.slots.iter().enumerate() {
                div { class: area_class(slot, !over && index == snapshot.active_slot), key: "{index}",
                    input {
                        id: "word-{index}",
                        class: "guess-input",
                        r#type: "text",
                        value: "{slot.display}",
                        maxlength: max_length(slot),
                        disabled: slot.solved || over,
                        autocomplete: "off",
                        spellcheck: "false",
                        onfocus: move |_| {
                            session.write().select_slot(index);
                        },
                        oninput: move |evt: Event<FormData>| {
                            if let Some(shown) = handle_input(session, index, evt.value()) {
                                resync_input(index, &shown);
                            }
                        },
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                evt.prevent_default();
                                session.write().select_slot(index);
                                handle_key(session, message, KeyPress::Enter);
                            }
                        },
                    }
                }
            }
        }
    }
}
