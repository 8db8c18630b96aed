use dioxus::prelude::*;

use crate::game::{GameStatus, Snapshot};

#[component]
pub fn GameOverPanel(snapshot: Snapshot, on_restart: EventHandler<MouseEvent>) -> Element {
    let headline = match snapshot.status {
        GameStatus::Won { by_hint: false } => "You got it!",
        GameStatus::Won { by_hint: true } => "Solved, with a little help",
        GameStatus::Lost => "Out of attempts",
        GameStatus::InProgress => return rsx! {},
    };
    let answer = snapshot
        .answer
        .as_deref()
        .unwrap_or_default()
        .join(" ")
        .to_uppercase();
    let attempts = snapshot.attempts_used;
    let hints = snapshot.hints_used;

    rsx! {
        div { class: "modal",
            h2 { "{headline}" }
            p { class: "answer", "{snapshot.acronym}: {answer}" }
            p { "wrong guesses: {attempts}, hints used: {hints}" }
            button { class: "restart", onclick: move |evt| on_restart.call(evt), "Play again" }
        }
    }
}
